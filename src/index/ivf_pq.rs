//! IVF with product quantization (IVF_PQ).
//!
//! On top of the IVF rules, PQ splits each vector into `m` sub-vectors, so
//! `m` has to divide the dimension. GPU builds are further restricted to
//! the sub-quantizer layouts the GPU kernels support without precomputed
//! codes, and to 8-bit codes.
//!
//! If `dim` is absent the PQ layout cannot be judged yet; the dimension is
//! resolved from the collection schema later, so the request passes here.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constants::{keys, pq};
use crate::error::{ParamCheckError, Result};
use crate::params::ParamSet;
use crate::predicates::slice_contains;
use crate::registry::IndexType;
use crate::types::IndexMode;

use super::ivf::IvfParams;
use super::ParamValidator;

/// CPU PQ rule: the dimension splits evenly into `m` sub-vectors.
///
/// Zero sub-quantizers can never split anything. Signs are not otherwise
/// restricted.
pub fn check_cpu_pq(dim: i64, m: i64) -> Result<()> {
    match dim.checked_rem(m) {
        Some(0) => Ok(()),
        Some(_) => Err(ParamCheckError::invalid_combination(format!(
            "dimension {} is not divisible by {} sub-quantizers",
            dim, m
        ))),
        None => Err(ParamCheckError::invalid_combination(format!(
            "dimension {} cannot be split into {} sub-quantizers",
            dim, m
        ))),
    }
}

/// GPU PQ rule: supported sub-quantizer count, supported dimensions per
/// sub-quantizer (integer division), and 8-bit codes.
pub fn check_gpu_pq(dim: i64, m: i64, nbits: i64) -> Result<()> {
    if !slice_contains(&pq::GPU_SUB_QUANTIZERS, &m) {
        return Err(ParamCheckError::invalid_combination(format!(
            "{} sub-quantizers are not supported on GPU",
            m
        )));
    }

    let sub_dim = dim.checked_div(m).unwrap_or(0);
    if !slice_contains(&pq::GPU_DIMS_PER_SUB_QUANTIZER, &sub_dim) {
        return Err(ParamCheckError::invalid_combination(format!(
            "{} dimensions per sub-quantizer are not supported on GPU",
            sub_dim
        )));
    }

    if nbits != pq::DEFAULT_NBITS {
        return Err(ParamCheckError::invalid_combination(format!(
            "GPU product quantization requires nbits = {}, got {}",
            pq::DEFAULT_NBITS,
            nbits
        )));
    }
    Ok(())
}

/// Product-quantization layout, once the dimension is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PqParams {
    pub dim: i64,
    /// Number of sub-quantizers.
    pub m: i64,
    pub nbits: i64,
    pub mode: IndexMode,
}

impl PqParams {
    /// Parse `dim`, `nbits` (default 8), `m` and `index_mode`, then apply
    /// the GPU rules (GPU mode only) followed by the CPU rule.
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let dim = params.get_int(keys::DIM)?;
        let nbits = params.get_int_or(keys::NBITS, pq::DEFAULT_NBITS)?;
        let m = params.get_int(keys::IVF_M)?;
        let mode = IndexMode::from_raw(params.get(keys::INDEX_MODE));

        if mode == IndexMode::Gpu {
            check_gpu_pq(dim, m, nbits)?;
        }
        check_cpu_pq(dim, m)?;

        Ok(Self {
            dim,
            m,
            nbits,
            mode,
        })
    }
}

/// Typed build parameters for IVF_PQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvfPqParams {
    pub ivf: IvfParams,
    /// `None` when the dimension is deferred to the collection schema.
    pub pq: Option<PqParams>,
}

impl IvfPqParams {
    pub fn from_params(params: &ParamSet) -> Result<Self> {
        let ivf = IvfParams::from_params(params)?;
        let pq = if params.contains_key(keys::DIM) {
            Some(PqParams::from_params(params)?)
        } else {
            None
        };
        Ok(Self { ivf, pq })
    }
}

/// Validator for `IVF_PQ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IvfPqValidator;

impl ParamValidator for IvfPqValidator {
    fn index_type(&self) -> IndexType {
        IndexType::IvfPq
    }

    fn validate(&self, params: &ParamSet) -> Result<()> {
        IvfPqParams::from_params(params).map(|_| ())
    }

    /// Fill in `nbits = 8` when the caller left it out.
    fn normalize<'a>(&self, params: &'a ParamSet) -> Cow<'a, ParamSet> {
        if params.contains_key(keys::NBITS) {
            Cow::Borrowed(params)
        } else {
            Cow::Owned(params.with_default(keys::NBITS, pq::DEFAULT_NBITS.to_string()))
        }
    }
}
