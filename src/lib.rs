//! forge-paramcheck: pre-flight validation of vector index build parameters.
//!
//! Before an expensive index build is scheduled, the validator for the
//! requested index type checks that the parameter set is structurally and
//! numerically sound: ranges, metric compatibility, cross-parameter
//! arithmetic and CPU/GPU mode rules.
//!
//! # Features
//!
//! - **One validator per index family**: FLAT, IVF_FLAT, IVF_PQ, IVF_SQ8,
//!   BIN_FLAT, BIN_IVF_FLAT, NSG, HNSW, ANNOY, RHNSW_*, NGT_*, NANG
//! - **Registry**: resolve a validator by exact index-type name
//! - **Typed records**: each family parses the string map into a typed record
//! - **Build requests**: merge type/index parameters, normalize defaults,
//!   check batches in parallel with Rayon
//!
//! # Example
//!
//! ```
//! use forge_paramcheck::{validate, ParamSet};
//!
//! let params = ParamSet::new()
//!     .with("metric_type", "L2")
//!     .with("efConstruction", "200")
//!     .with("M", "16");
//!
//! assert!(validate("HNSW", &params)?);
//! assert!(!validate("HNSW", &params.clone().with("M", "128"))?);
//! assert!(validate("NO_SUCH_INDEX", &params).is_err());
//! # Ok::<(), forge_paramcheck::ParamCheckError>(())
//! ```

pub mod constants;
pub mod error;
pub mod index;
pub mod metric;
pub mod params;
pub mod predicates;
pub mod registry;
pub mod request;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ParamCheckError, Result};
pub use index::ParamValidator;
pub use metric::MetricType;
pub use params::ParamSet;
pub use predicates::{check_int_by_range, check_str_by_values};
pub use registry::{registered_index_types, resolve, IndexType};
pub use request::{check_all, BuildPlan, BuildRequest, BuildRequestBuilder};
pub use types::{IndexMode, NumClusters};

/// Resolve the validator for `index_type` and check `params` with it.
///
/// `Ok(false)` means the request is rejected. The only error is
/// [`ParamCheckError::UnknownIndexType`].
pub fn validate(index_type: &str, params: &ParamSet) -> Result<bool> {
    Ok(resolve(index_type)?.check_train(params))
}
