//! Per-algorithm parameter validators.

pub mod annoy;
pub mod flat;
pub mod hnsw;
pub mod ivf;
pub mod ivf_pq;
pub mod nang;
pub mod ngt;
pub mod nsg;
pub mod traits;

pub use annoy::{AnnoyParams, AnnoyValidator};
pub use flat::{check_binary_metric, check_float_metric, BaseValidator, BinFlatValidator};
pub use hnsw::{HnswGraph, HnswParams, HnswValidator, RhnswPqParams, RhnswPqValidator};
pub use ivf::{check_nlist, BinIvfParams, BinIvfValidator, IvfParams, IvfSqValidator, IvfValidator};
pub use ivf_pq::{check_cpu_pq, check_gpu_pq, IvfPqParams, IvfPqValidator, PqParams};
pub use nang::NangValidator;
pub use ngt::{OnngParams, OnngValidator, PanngParams, PanngValidator};
pub use nsg::{NsgParams, NsgValidator};
pub use traits::ParamValidator;
