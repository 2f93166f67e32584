//! NSG (Navigating Spreading-out Graph) validator.
//!
//! NSG builds a kNN graph first and then prunes it into the navigating
//! graph, so it carries four independent size parameters.

use serde::{Deserialize, Serialize};

use crate::constants::{keys, nsg};
use crate::error::Result;
use crate::metric::MetricType;
use crate::params::ParamSet;
use crate::predicates::int_in_range;
use crate::registry::IndexType;

use super::flat::check_float_metric;
use super::ParamValidator;

/// Typed build parameters for NSG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsgParams {
    pub metric: MetricType,
    /// Out-degree of the initial kNN graph.
    pub knng: usize,
    pub search_length: usize,
    pub out_degree: usize,
    pub candidate_pool_size: usize,
}

impl NsgParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let metric = check_float_metric(params)?;
        let knng = int_in_range(params, keys::KNNG, nsg::MIN_KNNG, nsg::MAX_KNNG)?;
        let search_length = int_in_range(
            params,
            keys::SEARCH_LENGTH,
            nsg::MIN_SEARCH_LENGTH,
            nsg::MAX_SEARCH_LENGTH,
        )?;
        let out_degree = int_in_range(
            params,
            keys::OUT_DEGREE,
            nsg::MIN_OUT_DEGREE,
            nsg::MAX_OUT_DEGREE,
        )?;
        let candidate_pool_size = int_in_range(
            params,
            keys::CANDIDATE_POOL_SIZE,
            nsg::MIN_CANDIDATE_POOL_SIZE,
            nsg::MAX_CANDIDATE_POOL_SIZE,
        )?;

        Ok(Self {
            metric,
            knng: knng as usize,
            search_length: search_length as usize,
            out_degree: out_degree as usize,
            candidate_pool_size: candidate_pool_size as usize,
        })
    }
}

/// Validator for `NSG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NsgValidator;

impl ParamValidator for NsgValidator {
    fn index_type(&self) -> IndexType {
        IndexType::Nsg
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        NsgParams::from_params(params).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ParamSet {
        ParamSet::new()
            .with("metric_type", "L2")
            .with("knng", "20")
            .with("search_length", "40")
            .with("out_degree", "30")
            .with("candidate_pool_size", "100")
    }

    #[test]
    fn test_valid_nsg() {
        let parsed = NsgParams::from_params(&valid()).unwrap();
        assert_eq!(parsed.knng, 20);
        assert_eq!(parsed.candidate_pool_size, 100);
        assert!(NsgValidator.check_train(&valid()));
    }

    #[test]
    fn test_every_range_boundary() {
        let cases = [
            ("knng", 5, 300),
            ("search_length", 10, 300),
            ("out_degree", 5, 300),
            ("candidate_pool_size", 50, 1000),
        ];
        for (key, min, max) in cases {
            assert!(NsgValidator.check_train(&valid().with(key, min.to_string())), "{key}={min}");
            assert!(NsgValidator.check_train(&valid().with(key, max.to_string())), "{key}={max}");
            assert!(!NsgValidator.check_train(&valid().with(key, (min - 1).to_string())), "{key} below");
            assert!(!NsgValidator.check_train(&valid().with(key, (max + 1).to_string())), "{key} above");
        }
    }

    #[test]
    fn test_every_key_required() {
        for key in ["metric_type", "knng", "search_length", "out_degree", "candidate_pool_size"] {
            let mut params = valid();
            params.remove(key);
            assert!(!NsgValidator.check_train(&params), "{key}");
        }
    }

    #[test]
    fn test_binary_metric_rejected() {
        assert!(!NsgValidator.check_train(&valid().with("metric_type", "HAMMING")));
    }
}
