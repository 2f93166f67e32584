//! NANG graph index validator.
//!
//! NANG currently checks the metric only.

use tracing::trace;

use crate::error::Result;
use crate::params::ParamSet;
use crate::registry::IndexType;

use super::flat::check_float_metric;
use super::ParamValidator;

/// Validator for `NANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NangValidator;

impl ParamValidator for NangValidator {
    fn index_type(&self) -> IndexType {
        IndexType::Nang
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        // TODO: decide whether K in [50, 500] and iter in [2, 30] should gate
        // NANG builds; both range checks are disabled upstream and not enforced here.
        trace!(params = params.len(), "checking NANG parameters");
        check_float_metric(params).map(|_| ())
    }
}
