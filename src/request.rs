//! Build requests: merged parameters plus the index type they target.
//!
//! A build request arrives as two parameter sets, type parameters from the
//! collection schema (`dim`, ...) and index parameters from the index
//! definition. They are merged with index parameters winning, then checked
//! by the validator for the request's index type.
//!
//! # Example
//!
//! ```
//! use forge_paramcheck::{BuildRequestBuilder, ParamSet};
//!
//! let plan = BuildRequestBuilder::new()
//!     .type_params(ParamSet::new().with("dim", "128"))
//!     .index_params(
//!         ParamSet::new()
//!             .with("index_type", "IVF_PQ")
//!             .with("metric_type", "L2")
//!             .with("nlist", "1024")
//!             .with("m", "16"),
//!     )
//!     .build()?
//!     .check()?;
//!
//! assert_eq!(plan.params.get("nbits"), Some("8"));
//! # Ok::<(), forge_paramcheck::ParamCheckError>(())
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::constants::keys;
use crate::error::{ParamCheckError, Result};
use crate::params::ParamSet;
use crate::registry::{self, IndexType};
use crate::types::IndexMode;

/// Builder for a [`BuildRequest`].
#[derive(Debug, Clone, Default)]
pub struct BuildRequestBuilder {
    index_type: Option<String>,
    type_params: ParamSet,
    index_params: ParamSet,
}

impl BuildRequestBuilder {
    /// Create a new builder with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index type explicitly.
    ///
    /// If not set, the `index_type` key of the merged parameters is used.
    pub fn index_type(mut self, name: impl Into<String>) -> Self {
        self.index_type = Some(name.into());
        self
    }

    /// Set the type parameters (from the collection schema).
    pub fn type_params(mut self, params: ParamSet) -> Self {
        self.type_params = params;
        self
    }

    /// Set the index parameters. These override type parameters on conflict.
    pub fn index_params(mut self, params: ParamSet) -> Self {
        self.index_params = params;
        self
    }

    /// Add a single index parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.index_params.insert(key, value);
        self
    }

    /// Merge the parameters and resolve the index type.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if no index type was given either way, and
    /// `UnknownIndexType` if the name is not a known index type.
    pub fn build(self) -> Result<BuildRequest> {
        let mut params = self.type_params;
        params.merge(&self.index_params);

        let name = match self.index_type {
            Some(name) => name,
            None => params
                .get(keys::INDEX_TYPE)
                .map(str::to_string)
                .ok_or_else(|| ParamCheckError::missing(keys::INDEX_TYPE))?,
        };
        let index_type = name.parse::<IndexType>()?;

        Ok(BuildRequest { index_type, params })
    }
}

/// A single index build request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub index_type: IndexType,
    pub params: ParamSet,
}

impl BuildRequest {
    pub fn new(index_type: IndexType, params: ParamSet) -> Self {
        Self { index_type, params }
    }

    /// Where the index is to be built.
    pub fn index_mode(&self) -> IndexMode {
        IndexMode::from_raw(self.params.get(keys::INDEX_MODE))
    }

    /// Validate the request and produce the plan the build should follow.
    ///
    /// # Errors
    ///
    /// Returns `Rejected` carrying the validator's reason if the parameters
    /// are not buildable.
    pub fn check(&self) -> Result<BuildPlan> {
        let validator = registry::resolve(self.index_type.as_str())?;
        let params = validator.normalize(&self.params).into_owned();

        if let Err(reason) = validator.validate(&params) {
            debug!(index_type = %self.index_type, error = %reason, "build request rejected");
            return Err(ParamCheckError::rejected(self.index_type.as_str(), &reason));
        }

        Ok(BuildPlan {
            index_type: self.index_type,
            index_mode: self.index_mode(),
            store_raw_data: self.index_type.stores_raw_data(),
            one_pass: self.index_type.builds_in_one_pass(),
            params,
        })
    }
}

/// A validated request, ready for the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub index_type: IndexType,
    pub index_mode: IndexMode,
    /// Normalized parameters; defaults such as `nbits` are filled in.
    pub params: ParamSet,
    /// Keep the raw vectors alongside the built index.
    pub store_raw_data: bool,
    /// Train and add in one pass instead of two.
    pub one_pass: bool,
}

/// Check a batch of requests in parallel. Results keep the input order.
pub fn check_all(requests: &[BuildRequest]) -> Vec<Result<BuildPlan>> {
    let results: Vec<Result<BuildPlan>> = requests.par_iter().map(BuildRequest::check).collect();
    let accepted = results.iter().filter(|r| r.is_ok()).count();
    debug!(
        total = results.len(),
        accepted,
        rejected = results.len() - accepted,
        "checked build requests"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hnsw_params() -> ParamSet {
        ParamSet::new()
            .with("metric_type", "L2")
            .with("efConstruction", "200")
            .with("M", "16")
    }

    #[test]
    fn test_index_params_override_type_params() {
        let request = BuildRequestBuilder::new()
            .index_type("HNSW")
            .type_params(ParamSet::new().with("dim", "64").with("metric_type", "HAMMING"))
            .index_params(hnsw_params())
            .build()
            .unwrap();

        assert_eq!(request.params.get("dim"), Some("64"));
        assert_eq!(request.params.get("metric_type"), Some("L2"));
        assert!(request.check().is_ok());
    }

    #[test]
    fn test_index_type_from_params() {
        let request = BuildRequestBuilder::new()
            .index_params(hnsw_params().with("index_type", "RHNSW_FLAT"))
            .build()
            .unwrap();
        assert_eq!(request.index_type, IndexType::RhnswFlat);

        let plan = request.check().unwrap();
        assert!(plan.store_raw_data);
        assert!(!plan.one_pass);
    }

    #[test]
    fn test_missing_and_unknown_index_type() {
        let err = BuildRequestBuilder::new().index_params(hnsw_params()).build().unwrap_err();
        assert_eq!(err, ParamCheckError::missing("index_type"));

        let err = BuildRequestBuilder::new().index_type("HNSW3").build().unwrap_err();
        assert!(matches!(err, ParamCheckError::UnknownIndexType(_)));
    }

    #[test]
    fn test_rejection_carries_reason() {
        let request = BuildRequest::new(IndexType::Hnsw, hnsw_params().with("M", "2"));
        let err = request.check().unwrap_err();
        match err {
            ParamCheckError::Rejected { index_type, reason } => {
                assert_eq!(index_type, "HNSW");
                assert!(reason.contains("'M'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plan_carries_normalized_params() {
        let request = BuildRequestBuilder::new()
            .index_type("IVF_SQ8")
            .param("metric_type", "IP")
            .param("nlist", "256")
            .param("nbits", "4")
            .param("index_mode", "GPU")
            .build()
            .unwrap();

        let plan = request.check().unwrap();
        assert_eq!(plan.params.get("nbits"), Some("8"));
        assert_eq!(plan.index_mode, IndexMode::Gpu);
        assert_eq!(request.params.get("nbits"), Some("4"));
    }

    #[test]
    fn test_check_all_keeps_order() {
        let requests = vec![
            BuildRequest::new(IndexType::Hnsw, hnsw_params()),
            BuildRequest::new(IndexType::Hnsw, ParamSet::new()),
            BuildRequest::new(IndexType::Flat, ParamSet::new().with("metric_type", "IP")),
        ];
        let results = check_all(&requests);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().index_type, IndexType::Flat);
    }
}
