//! HNSW (Hierarchical Navigable Small World) family validators.
//!
//! # Parameters
//!
//! - `efConstruction`: beam width while building, in `[8, 512]`
//! - `M`: max connections per node, in `[4, 64]`
//!
//! `HNSW` and `HNSW2` are separate engine backends, and `RHNSW_FLAT` /
//! `RHNSW_SQ` are the refactored variants; all four share one rule set and
//! differ only in the identity they report. `RHNSW_PQ` adds a product
//! quantization layout on top.

use serde::{Deserialize, Serialize};

use crate::constants::{hnsw, keys};
use crate::error::Result;
use crate::metric::MetricType;
use crate::params::ParamSet;
use crate::predicates::int_in_range;
use crate::registry::IndexType;

use super::flat::check_float_metric;
use super::ivf_pq::check_cpu_pq;
use super::ParamValidator;

/// Graph construction parameters shared by every HNSW variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HnswGraph {
    pub ef_construction: usize,
    pub m: usize,
}

impl HnswGraph {
    /// Check `efConstruction`, then `M`.
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let ef_construction = int_in_range(
            params,
            keys::EF_CONSTRUCTION,
            hnsw::MIN_EF_CONSTRUCTION,
            hnsw::MAX_EF_CONSTRUCTION,
        )?;
        let m = int_in_range(params, keys::HNSW_M, hnsw::MIN_M, hnsw::MAX_M)?;
        Ok(Self {
            ef_construction: ef_construction as usize,
            m: m as usize,
        })
    }
}

/// Typed build parameters for HNSW, HNSW2, RHNSW_FLAT and RHNSW_SQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HnswParams {
    pub graph: HnswGraph,
    pub metric: MetricType,
}

impl HnswParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let graph = HnswGraph::from_params(params)?;
        let metric = check_float_metric(params)?;
        Ok(Self { graph, metric })
    }
}

/// Validator for the plain-graph HNSW identities.
#[derive(Debug, Clone, Copy)]
pub struct HnswValidator {
    index_type: IndexType,
}

impl HnswValidator {
    pub fn hnsw() -> Self {
        Self {
            index_type: IndexType::Hnsw,
        }
    }

    pub fn hnsw2() -> Self {
        Self {
            index_type: IndexType::Hnsw2,
        }
    }

    pub fn rhnsw_flat() -> Self {
        Self {
            index_type: IndexType::RhnswFlat,
        }
    }

    pub fn rhnsw_sq() -> Self {
        Self {
            index_type: IndexType::RhnswSq,
        }
    }
}

impl ParamValidator for HnswValidator {
    fn index_type(&self) -> IndexType {
        self.index_type
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        HnswParams::from_params(params).map(|_| ())
    }
}

/// Typed build parameters for RHNSW_PQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhnswPqParams {
    pub metric: MetricType,
    pub graph: HnswGraph,
    /// `None` when the dimension is deferred to the collection schema.
    pub dim: Option<i64>,
    pub pqm: i64,
}

impl RhnswPqParams {
    /// Metric first, then the graph, then the PQ layout.
    ///
    /// `PQM` is required even when `dim` is absent; divisibility is only
    /// checked once the dimension is known.
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let metric = check_float_metric(params)?;
        let graph = HnswGraph::from_params(params)?;

        let dim = match params.get(keys::DIM) {
            Some(_) => Some(params.get_int(keys::DIM)?),
            None => None,
        };
        let pqm = params.get_int(keys::PQM)?;

        if let Some(dim) = dim {
            check_cpu_pq(dim, pqm)?;
        }

        Ok(Self {
            metric,
            graph,
            dim,
            pqm,
        })
    }
}

/// Validator for `RHNSW_PQ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RhnswPqValidator;

impl ParamValidator for RhnswPqValidator {
    fn index_type(&self) -> IndexType {
        IndexType::RhnswPq
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        RhnswPqParams::from_params(params).map(|_| ())
    }
}
