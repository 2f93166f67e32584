//! Common trait for index parameter validators.
//!
//! Every index family implements [`ParamValidator`], so the registry can
//! hand out any validator behind a `Box<dyn ParamValidator>`.

use std::borrow::Cow;

use tracing::debug;

use crate::error::Result;
use crate::params::ParamSet;
use crate::registry::IndexType;

/// Decides whether an index of one type can be built from a parameter set.
///
/// # Thread Safety
///
/// Validators hold no state. Implementations must be `Send + Sync` and may
/// be shared across threads or constructed fresh per call.
pub trait ParamValidator: Send + Sync {
    /// The index type this validator is registered for.
    fn index_type(&self) -> IndexType;

    /// Check `params`, reporting the first rule that fails.
    ///
    /// Checks run in a fixed order and stop at the first failure.
    fn validate(&self, params: &ParamSet) -> Result<()>;

    /// Derive the parameter set the build should actually use.
    ///
    /// The caller's set is never modified. Most index types borrow it
    /// unchanged; quantizing types fill in a code width.
    fn normalize<'a>(&self, params: &'a ParamSet) -> Cow<'a, ParamSet> {
        Cow::Borrowed(params)
    }

    /// True if an index can be built with `params`.
    ///
    /// All rejection detail is dropped here; it is only logged.
    fn check_train(&self, params: &ParamSet) -> bool {
        match self.validate(params) {
            Ok(()) => true,
            Err(err) => {
                debug!(index_type = %self.index_type(), error = %err, "index parameters rejected");
                false
            }
        }
    }
}
