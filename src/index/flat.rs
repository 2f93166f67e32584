//! Flat (exhaustive) index validators and the shared metric gate.
//!
//! A flat index has nothing to train, so the only thing that can be wrong
//! with its parameters is the metric. [`check_float_metric`] is also the
//! base check that every float-vector family runs.
//!
//! The vector dimension is fixed when the collection is created and is not
//! this layer's to check.

use crate::constants::keys;
use crate::error::Result;
use crate::metric::{MetricType, BINARY_METRICS, FLOAT_METRICS};
use crate::params::ParamSet;
use crate::predicates::str_in_values;
use crate::registry::IndexType;

use super::ParamValidator;

/// Require a float-vector metric (`L2` or `IP`).
pub fn check_float_metric(params: &ParamSet) -> Result<MetricType> {
    str_in_values(params, keys::METRIC_TYPE, &FLOAT_METRICS)?.parse()
}

/// Require any binary-vector metric, structural ones included.
pub fn check_binary_metric(params: &ParamSet) -> Result<MetricType> {
    str_in_values(params, keys::METRIC_TYPE, &BINARY_METRICS)?.parse()
}

/// Validator for `FLAT`: the base metric check and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseValidator;

impl ParamValidator for BaseValidator {
    fn index_type(&self) -> IndexType {
        IndexType::Flat
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        check_float_metric(params).map(|_| ())
    }
}

/// Validator for `BIN_FLAT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinFlatValidator;

impl ParamValidator for BinFlatValidator {
    fn index_type(&self) -> IndexType {
        IndexType::BinFlat
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        check_binary_metric(params).map(|_| ())
    }
}
