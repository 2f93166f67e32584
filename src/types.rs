//! Core newtypes for typed parameter records.
//!
//! The partition count and build mode, once parsed out of the string map.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of inverted-file partitions (`nlist`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NumClusters(pub usize);

impl NumClusters {
    /// Create a new NumClusters.
    #[inline]
    pub const fn new(nlist: usize) -> Self {
        Self(nlist)
    }
}

/// Where the index will be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexMode {
    /// CPU build (default).
    #[default]
    #[serde(rename = "CPU")]
    Cpu,
    /// GPU build; imposes the extra GPU PQ restrictions.
    #[serde(rename = "GPU")]
    Gpu,
}

impl IndexMode {
    /// Wire name of this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexMode::Cpu => "CPU",
            IndexMode::Gpu => "GPU",
        }
    }

    /// Resolve a raw `index_mode` value.
    ///
    /// Only the exact string `"GPU"` selects GPU rules; an absent or
    /// unrecognized mode builds on CPU.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("GPU") => IndexMode::Gpu,
            _ => IndexMode::Cpu,
        }
    }
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
