//! Inverted-file (IVF) index validators.
//!
//! IVF partitions the vector space into `nlist` clusters at build time.
//! The validators here cover plain IVF_FLAT, scalar-quantized IVF_SQ8 and
//! the binary IVF variant. Whether there are enough rows to train `nlist`
//! centroids is left to the build pipeline.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constants::{ivf, keys, pq};
use crate::error::Result;
use crate::metric::{MetricType, BINARY_IVF_METRICS};
use crate::params::ParamSet;
use crate::predicates::{int_in_range, str_in_values};
use crate::registry::IndexType;
use crate::types::NumClusters;

use super::flat::check_float_metric;
use super::ParamValidator;

/// Require `nlist` in `[1, 65536]`.
pub fn check_nlist(params: &ParamSet) -> Result<NumClusters> {
    let nlist = int_in_range(params, keys::NLIST, ivf::MIN_NLIST, ivf::MAX_NLIST)?;
    Ok(NumClusters::new(nlist as usize))
}

/// Typed build parameters for a float IVF index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvfParams {
    pub nlist: NumClusters,
    pub metric: MetricType,
}

impl IvfParams {
    /// Parse and check, `nlist` first, then the metric.
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let nlist = check_nlist(params)?;
        let metric = check_float_metric(params)?;
        Ok(Self { nlist, metric })
    }
}

/// Validator for `IVF_FLAT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IvfValidator;

impl ParamValidator for IvfValidator {
    fn index_type(&self) -> IndexType {
        IndexType::IvfFlat
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        IvfParams::from_params(params).map(|_| ())
    }
}

/// Validator for the 8-bit scalar-quantized IVF types.
///
/// SQ8 codes are always one byte wide, so the normalized parameters carry
/// `nbits = 8` whatever the caller sent.
#[derive(Debug, Clone, Copy)]
pub struct IvfSqValidator {
    index_type: IndexType,
}

impl IvfSqValidator {
    /// Validator for `IVF_SQ8`.
    pub fn sq8() -> Self {
        Self {
            index_type: IndexType::IvfSq8,
        }
    }

    /// Validator for `IVF_SQ8_HYBRID`.
    pub fn sq8_hybrid() -> Self {
        Self {
            index_type: IndexType::IvfSq8Hybrid,
        }
    }
}

impl Default for IvfSqValidator {
    fn default() -> Self {
        Self::sq8()
    }
}

impl ParamValidator for IvfSqValidator {
    fn index_type(&self) -> IndexType {
        self.index_type
    }

    /// `nbits` plays no part in the rules, so the normalized copy is only
    /// built for the plan.
    fn validate(&self, params: &ParamSet) -> Result<()> {
        IvfParams::from_params(params).map(|_| ())
    }

    fn normalize<'a>(&self, params: &'a ParamSet) -> Cow<'a, ParamSet> {
        Cow::Owned(params.with_override(keys::NBITS, pq::DEFAULT_NBITS.to_string()))
    }
}

/// Typed build parameters for a binary IVF index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinIvfParams {
    pub nlist: NumClusters,
    pub metric: MetricType,
}

impl BinIvfParams {
    /// Parse and check. Structural metrics cannot be partitioned and are refused.
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let nlist = check_nlist(params)?;
        let metric = str_in_values(params, keys::METRIC_TYPE, &BINARY_IVF_METRICS)?
            .parse::<MetricType>()?;
        Ok(Self { nlist, metric })
    }
}

/// Validator for `BIN_IVF_FLAT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinIvfValidator;

impl ParamValidator for BinIvfValidator {
    fn index_type(&self) -> IndexType {
        IndexType::BinIvfFlat
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        BinIvfParams::from_params(params).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamCheckError;

    fn ivf(nlist: &str, metric: &str) -> ParamSet {
        ParamSet::new().with("nlist", nlist).with("metric_type", metric)
    }

    #[test]
    fn test_ivf_nlist_boundaries() {
        assert!(IvfValidator.check_train(&ivf("1", "L2")));
        assert!(IvfValidator.check_train(&ivf("65536", "IP")));
        assert!(!IvfValidator.check_train(&ivf("0", "L2")));
        assert!(!IvfValidator.check_train(&ivf("65537", "L2")));
    }

    #[test]
    fn test_ivf_requires_float_metric() {
        assert!(!IvfValidator.check_train(&ivf("128", "HAMMING")));
        assert!(!IvfValidator.check_train(&ParamSet::new().with("nlist", "128")));
        assert!(!IvfValidator.check_train(&ParamSet::new()));
    }

    #[test]
    fn test_ivf_checks_nlist_before_metric() {
        let err = IvfValidator.validate(&ivf("0", "COSINE")).unwrap_err();
        assert!(matches!(err, ParamCheckError::OutOfRange { .. }));
    }

    #[test]
    fn test_ivf_params_typed() {
        let parsed = IvfParams::from_params(&ivf("1024", "IP")).unwrap();
        assert_eq!(parsed.nlist, NumClusters::new(1024));
        assert_eq!(parsed.metric, MetricType::IP);
    }

    #[test]
    fn test_ivf_sq_normalizes_without_mutating() {
        let params = ivf("128", "L2");
        let validator = IvfSqValidator::sq8();

        assert!(validator.check_train(&params));
        assert!(!params.contains_key("nbits"));

        let normalized = validator.normalize(&params);
        assert_eq!(normalized.get("nbits"), Some("8"));
    }

    #[test]
    fn test_ivf_sq_overrides_caller_nbits() {
        let params = ivf("128", "L2").with("nbits", "4");
        let normalized = IvfSqValidator::sq8_hybrid().normalize(&params);
        assert_eq!(normalized.get("nbits"), Some("8"));
        assert_eq!(params.get("nbits"), Some("4"));
    }

    #[test]
    fn test_ivf_sq_still_checks_ivf_rules() {
        assert!(!IvfSqValidator::sq8().check_train(&ivf("0", "L2")));
        assert_eq!(IvfSqValidator::sq8_hybrid().index_type(), IndexType::IvfSq8Hybrid);
    }

    #[test]
    fn test_ivf_sq_ignores_caller_nbits() {
        let params = ivf("128", "L2").with("nbits", "not a number");
        assert!(IvfSqValidator::sq8().validate(&params).is_ok());
        assert!(IvfSqValidator::sq8_hybrid().check_train(&params));
    }

    #[test]
    fn test_bin_ivf_metrics() {
        for m in ["HAMMING", "JACCARD", "TANIMOTO"] {
            assert!(BinIvfValidator.check_train(&ivf("64", m)), "{m}");
        }
        for m in ["SUBSTRUCTURE", "SUPERSTRUCTURE", "L2", "IP"] {
            assert!(!BinIvfValidator.check_train(&ivf("64", m)), "{m}");
        }
    }

    #[test]
    fn test_bin_ivf_nlist_boundaries() {
        assert!(BinIvfValidator.check_train(&ivf("1", "HAMMING")));
        assert!(BinIvfValidator.check_train(&ivf("65536", "HAMMING")));
        assert!(!BinIvfValidator.check_train(&ivf("0", "HAMMING")));
        assert!(!BinIvfValidator.check_train(&ivf("65537", "HAMMING")));
    }
}
