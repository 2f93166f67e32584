//! Metric identifiers and their compatibility classes.
//!
//! Float-vector indexes accept `L2` and `IP`. Binary indexes accept the
//! remaining five, except that inverted-file binary indexes cannot
//! partition under the structural metrics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParamCheckError;

/// Supported distance metrics, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricType {
    /// Euclidean distance.
    L2,
    /// Inner product.
    IP,
    /// Hamming distance over bit vectors.
    Hamming,
    /// Jaccard distance over bit vectors.
    Jaccard,
    /// Tanimoto distance over bit vectors.
    Tanimoto,
    /// Query is a substructure of the target.
    Substructure,
    /// Query is a superstructure of the target.
    Superstructure,
}

/// Metrics accepted by float-vector indexes.
pub const FLOAT_METRICS: [&str; 2] = ["L2", "IP"];

/// Metrics accepted by the binary flat index.
pub const BINARY_METRICS: [&str; 5] = [
    "HAMMING",
    "JACCARD",
    "TANIMOTO",
    "SUBSTRUCTURE",
    "SUPERSTRUCTURE",
];

/// Metrics accepted by the binary inverted-file index.
pub const BINARY_IVF_METRICS: [&str; 3] = ["HAMMING", "JACCARD", "TANIMOTO"];

impl MetricType {
    /// All metrics, float first.
    pub const ALL: [MetricType; 7] = [
        MetricType::L2,
        MetricType::IP,
        MetricType::Hamming,
        MetricType::Jaccard,
        MetricType::Tanimoto,
        MetricType::Substructure,
        MetricType::Superstructure,
    ];

    /// Wire name of this metric.
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricType::L2 => "L2",
            MetricType::IP => "IP",
            MetricType::Hamming => "HAMMING",
            MetricType::Jaccard => "JACCARD",
            MetricType::Tanimoto => "TANIMOTO",
            MetricType::Substructure => "SUBSTRUCTURE",
            MetricType::Superstructure => "SUPERSTRUCTURE",
        }
    }

    /// True for metrics defined on float vectors.
    pub const fn is_float(self) -> bool {
        matches!(self, MetricType::L2 | MetricType::IP)
    }

    /// True for metrics defined on binary vectors.
    pub const fn is_binary(self) -> bool {
        !self.is_float()
    }

    /// True for binary metrics usable with inverted-file partitioning.
    pub const fn supports_binary_ivf(self) -> bool {
        matches!(
            self,
            MetricType::Hamming | MetricType::Jaccard | MetricType::Tanimoto
        )
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricType {
    type Err = ParamCheckError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParamCheckError::unsupported_value(crate::constants::keys::METRIC_TYPE, s))
    }
}
