//! ANNOY (random projection forest) validator.

use serde::{Deserialize, Serialize};

use crate::constants::{annoy, keys};
use crate::error::Result;
use crate::metric::MetricType;
use crate::params::ParamSet;
use crate::predicates::int_in_range;
use crate::registry::IndexType;

use super::flat::check_float_metric;
use super::ParamValidator;

/// Typed build parameters for ANNOY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnoyParams {
    pub n_trees: usize,
    pub metric: MetricType,
}

impl AnnoyParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let n_trees = int_in_range(params, keys::N_TREES, annoy::MIN_N_TREES, annoy::MAX_N_TREES)?;
        let metric = check_float_metric(params)?;
        Ok(Self {
            n_trees: n_trees as usize,
            metric,
        })
    }
}

/// Validator for `ANNOY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnoyValidator;

impl ParamValidator for AnnoyValidator {
    fn index_type(&self) -> IndexType {
        IndexType::Annoy
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        AnnoyParams::from_params(params).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trees(n: &str) -> ParamSet {
        ParamSet::new().with("n_trees", n).with("metric_type", "IP")
    }

    #[test]
    fn test_n_trees_boundaries() {
        assert!(AnnoyValidator.check_train(&trees("1")));
        assert!(AnnoyValidator.check_train(&trees("1024")));
        assert!(!AnnoyValidator.check_train(&trees("0")));
        assert!(!AnnoyValidator.check_train(&trees("1025")));
    }

    #[test]
    fn test_metric_and_presence() {
        assert!(!AnnoyValidator.check_train(&trees("8").with("metric_type", "TANIMOTO")));
        assert!(!AnnoyValidator.check_train(&ParamSet::new().with("metric_type", "L2")));
    }
}
