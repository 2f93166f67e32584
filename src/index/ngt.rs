//! NGT graph index validators (PANNG and ONNG).
//!
//! Every NGT edge-size parameter lives in `[1, 200]`. PANNG additionally
//! prunes in two passes, and the selective pass must keep strictly fewer
//! edges than the forced pass.

use serde::{Deserialize, Serialize};

use crate::constants::{keys, ngt};
use crate::error::{ParamCheckError, Result};
use crate::metric::MetricType;
use crate::params::ParamSet;
use crate::predicates::int_in_range;
use crate::registry::IndexType;

use super::flat::check_float_metric;
use super::ParamValidator;

fn edge_size(params: &ParamSet, key: &str) -> Result<usize> {
    int_in_range(params, key, ngt::MIN_EDGE_SIZE, ngt::MAX_EDGE_SIZE).map(|v| v as usize)
}

/// Typed build parameters for NGT_PANNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanngParams {
    pub edge_size: usize,
    pub forcedly_pruned_edge_size: usize,
    pub selectively_pruned_edge_size: usize,
    pub metric: MetricType,
}

impl PanngParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let edge = edge_size(params, keys::EDGE_SIZE)?;
        let forced = edge_size(params, keys::FORCEDLY_PRUNED_EDGE_SIZE)?;
        let selective = edge_size(params, keys::SELECTIVELY_PRUNED_EDGE_SIZE)?;

        if selective >= forced {
            return Err(ParamCheckError::invalid_combination(format!(
                "{} ({}) must be less than {} ({})",
                keys::SELECTIVELY_PRUNED_EDGE_SIZE,
                selective,
                keys::FORCEDLY_PRUNED_EDGE_SIZE,
                forced
            )));
        }

        let metric = check_float_metric(params)?;
        Ok(Self {
            edge_size: edge,
            forcedly_pruned_edge_size: forced,
            selectively_pruned_edge_size: selective,
            metric,
        })
    }
}

/// Validator for `NGT_PANNG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanngValidator;

impl ParamValidator for PanngValidator {
    fn index_type(&self) -> IndexType {
        IndexType::NgtPanng
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        PanngParams::from_params(params).map(|_| ())
    }
}

/// Typed build parameters for NGT_ONNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnngParams {
    pub edge_size: usize,
    pub outgoing_edge_size: usize,
    pub incoming_edge_size: usize,
    pub metric: MetricType,
}

impl OnngParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        Ok(Self {
            edge_size: edge_size(params, keys::EDGE_SIZE)?,
            outgoing_edge_size: edge_size(params, keys::OUTGOING_EDGE_SIZE)?,
            incoming_edge_size: edge_size(params, keys::INCOMING_EDGE_SIZE)?,
            metric: check_float_metric(params)?,
        })
    }
}

/// Validator for `NGT_ONNG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnngValidator;

impl ParamValidator for OnngValidator {
    fn index_type(&self) -> IndexType {
        IndexType::NgtOnng
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        OnngParams::from_params(params).map(|_| ())
    }
}
