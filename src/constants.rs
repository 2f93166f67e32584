//! Named constants for parameter keys and legal ranges.
//!
//! This module is the constraint table: every inclusive range a validator
//! enforces lives here, grouped by index family. Nothing in it is mutated
//! after compilation, so it is safe to read from any thread.

/// Parameter keys understood by the validators.
///
/// These are a stable wire contract with upstream callers; values are
/// always strings, integers as decimal text.
pub mod keys {
    /// Vector dimension.
    pub const DIM: &str = "dim";
    /// Distance metric.
    pub const METRIC_TYPE: &str = "metric_type";
    /// Number of inverted-file partitions.
    pub const NLIST: &str = "nlist";
    /// Bits per product/scalar quantization code.
    pub const NBITS: &str = "nbits";
    /// Number of PQ sub-quantizers for IVF_PQ.
    pub const IVF_M: &str = "m";
    /// NSG k-nearest-neighbor graph degree.
    pub const KNNG: &str = "knng";
    pub const SEARCH_LENGTH: &str = "search_length";
    pub const OUT_DEGREE: &str = "out_degree";
    pub const CANDIDATE_POOL_SIZE: &str = "candidate_pool_size";
    /// HNSW beam width during construction.
    pub const EF_CONSTRUCTION: &str = "efConstruction";
    /// HNSW max connections per node. Case matters: `m` is the IVF key.
    pub const HNSW_M: &str = "M";
    /// Number of PQ sub-quantizers for RHNSW_PQ.
    pub const PQM: &str = "PQM";
    pub const N_TREES: &str = "n_trees";
    pub const EDGE_SIZE: &str = "edge_size";
    pub const FORCEDLY_PRUNED_EDGE_SIZE: &str = "forcedly_pruned_edge_size";
    pub const SELECTIVELY_PRUNED_EDGE_SIZE: &str = "selectively_pruned_edge_size";
    pub const OUTGOING_EDGE_SIZE: &str = "outgoing_edge_size";
    pub const INCOMING_EDGE_SIZE: &str = "incoming_edge_size";
    /// CPU or GPU build.
    pub const INDEX_MODE: &str = "index_mode";
    /// Index type carried inside a request's parameters.
    pub const INDEX_TYPE: &str = "index_type";
}

/// Constants for inverted-file indexes.
pub mod ivf {
    /// Lower limit of `nlist`.
    pub const MIN_NLIST: i64 = 1;
    /// Upper limit of `nlist`.
    pub const MAX_NLIST: i64 = 65536;
}

/// Constants for product and scalar quantization.
pub mod pq {
    /// Bits per code when `nbits` is not given. SQ8 always uses this.
    pub const DEFAULT_NBITS: i64 = 8;

    /// Sub-quantizer counts the GPU PQ kernels support without
    /// precomputed codes.
    pub const GPU_SUB_QUANTIZERS: [i64; 16] =
        [96, 64, 56, 48, 40, 32, 28, 24, 20, 16, 12, 8, 4, 3, 2, 1];

    /// Dimensions per sub-quantizer the GPU PQ kernels support without
    /// precomputed codes.
    pub const GPU_DIMS_PER_SUB_QUANTIZER: [i64; 13] = [32, 28, 24, 20, 16, 12, 10, 8, 6, 4, 3, 2, 1];
}

/// Constants for HNSW and the RHNSW family.
pub mod hnsw {
    pub const MIN_EF_CONSTRUCTION: i64 = 8;
    pub const MAX_EF_CONSTRUCTION: i64 = 512;
    pub const MIN_M: i64 = 4;
    pub const MAX_M: i64 = 64;
}

/// Constants for NSG.
pub mod nsg {
    pub const MIN_KNNG: i64 = 5;
    pub const MAX_KNNG: i64 = 300;
    pub const MIN_SEARCH_LENGTH: i64 = 10;
    pub const MAX_SEARCH_LENGTH: i64 = 300;
    pub const MIN_OUT_DEGREE: i64 = 5;
    pub const MAX_OUT_DEGREE: i64 = 300;
    pub const MIN_CANDIDATE_POOL_SIZE: i64 = 50;
    pub const MAX_CANDIDATE_POOL_SIZE: i64 = 1000;
}

/// Constants for ANNOY.
pub mod annoy {
    pub const MIN_N_TREES: i64 = 1;
    /// Large forests take very long to build; raise this if a real workload needs it.
    pub const MAX_N_TREES: i64 = 1024;
}

/// Constants for the NGT family (PANNG and ONNG).
pub mod ngt {
    pub const MIN_EDGE_SIZE: i64 = 1;
    pub const MAX_EDGE_SIZE: i64 = 200;
}
