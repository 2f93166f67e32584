//! Index type catalogue and the validator registry.
//!
//! The registry is a fixed map from exact index-type name to a constructor,
//! built once on first use and only read afterwards. Callers resolve a
//! validator by name instead of constructing one directly.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ParamCheckError, Result};
use crate::index::{
    AnnoyValidator, BaseValidator, BinFlatValidator, BinIvfValidator, HnswValidator,
    IvfPqValidator, IvfSqValidator, IvfValidator, NangValidator, NsgValidator, OnngValidator,
    PanngValidator, ParamValidator, RhnswPqValidator,
};

/// Every index type a validator exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    Flat,
    IvfFlat,
    IvfPq,
    IvfSq8,
    #[serde(rename = "IVF_SQ8_HYBRID")]
    IvfSq8Hybrid,
    BinFlat,
    BinIvfFlat,
    Nsg,
    Hnsw,
    #[serde(rename = "HNSW2")]
    Hnsw2,
    Annoy,
    RhnswFlat,
    RhnswPq,
    RhnswSq,
    NgtPanng,
    NgtOnng,
    Nang,
}

impl IndexType {
    pub const ALL: [IndexType; 17] = [
        IndexType::Flat,
        IndexType::IvfFlat,
        IndexType::IvfPq,
        IndexType::IvfSq8,
        IndexType::IvfSq8Hybrid,
        IndexType::BinFlat,
        IndexType::BinIvfFlat,
        IndexType::Nsg,
        IndexType::Hnsw,
        IndexType::Hnsw2,
        IndexType::Annoy,
        IndexType::RhnswFlat,
        IndexType::RhnswPq,
        IndexType::RhnswSq,
        IndexType::NgtPanng,
        IndexType::NgtOnng,
        IndexType::Nang,
    ];

    /// Wire name of this index type.
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexType::Flat => "FLAT",
            IndexType::IvfFlat => "IVF_FLAT",
            IndexType::IvfPq => "IVF_PQ",
            IndexType::IvfSq8 => "IVF_SQ8",
            IndexType::IvfSq8Hybrid => "IVF_SQ8_HYBRID",
            IndexType::BinFlat => "BIN_FLAT",
            IndexType::BinIvfFlat => "BIN_IVF_FLAT",
            IndexType::Nsg => "NSG",
            IndexType::Hnsw => "HNSW",
            IndexType::Hnsw2 => "HNSW2",
            IndexType::Annoy => "ANNOY",
            IndexType::RhnswFlat => "RHNSW_FLAT",
            IndexType::RhnswPq => "RHNSW_PQ",
            IndexType::RhnswSq => "RHNSW_SQ",
            IndexType::NgtPanng => "NGT_PANNG",
            IndexType::NgtOnng => "NGT_ONNG",
            IndexType::Nang => "NANG",
        }
    }

    /// Index types over binary vectors.
    pub const fn is_binary(self) -> bool {
        matches!(self, IndexType::BinFlat | IndexType::BinIvfFlat)
    }

    /// Index types that keep the raw vectors next to the index after building.
    pub const fn stores_raw_data(self) -> bool {
        matches!(
            self,
            IndexType::IvfFlat | IndexType::Nsg | IndexType::RhnswFlat
        )
    }

    /// Index types built in a single train-and-add pass.
    pub const fn builds_in_one_pass(self) -> bool {
        matches!(self, IndexType::Nsg | IndexType::Nang)
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexType {
    type Err = ParamCheckError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self> {
        IndexType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParamCheckError::unknown_index_type(s))
    }
}

type Constructor = fn() -> Box<dyn ParamValidator>;

static REGISTRY: Lazy<HashMap<&'static str, Constructor>> = Lazy::new(|| {
    let entries: [(IndexType, Constructor); 17] = [
        (IndexType::Flat, || Box::new(BaseValidator)),
        (IndexType::IvfFlat, || Box::new(IvfValidator)),
        (IndexType::IvfPq, || Box::new(IvfPqValidator)),
        (IndexType::IvfSq8, || Box::new(IvfSqValidator::sq8())),
        (IndexType::IvfSq8Hybrid, || Box::new(IvfSqValidator::sq8_hybrid())),
        (IndexType::BinFlat, || Box::new(BinFlatValidator)),
        (IndexType::BinIvfFlat, || Box::new(BinIvfValidator)),
        (IndexType::Nsg, || Box::new(NsgValidator)),
        (IndexType::Hnsw, || Box::new(HnswValidator::hnsw())),
        (IndexType::Hnsw2, || Box::new(HnswValidator::hnsw2())),
        (IndexType::Annoy, || Box::new(AnnoyValidator)),
        (IndexType::RhnswFlat, || Box::new(HnswValidator::rhnsw_flat())),
        (IndexType::RhnswPq, || Box::new(RhnswPqValidator)),
        (IndexType::RhnswSq, || Box::new(HnswValidator::rhnsw_sq())),
        (IndexType::NgtPanng, || Box::new(PanngValidator)),
        (IndexType::NgtOnng, || Box::new(OnngValidator)),
        (IndexType::Nang, || Box::new(NangValidator)),
    ];
    entries
        .into_iter()
        .map(|(index_type, ctor)| (index_type.as_str(), ctor))
        .collect()
});

/// Resolve the validator registered under `index_type`.
///
/// # Errors
///
/// Returns `UnknownIndexType` if no validator is registered for the name.
/// This is the only error the registry produces.
pub fn resolve(index_type: &str) -> Result<Box<dyn ParamValidator>> {
    match REGISTRY.get(index_type) {
        Some(ctor) => Ok(ctor()),
        None => {
            warn!(index_type, "no parameter validator registered");
            Err(ParamCheckError::unknown_index_type(index_type))
        }
    }
}

/// Names of every registered index type, sorted.
pub fn registered_index_types() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_resolves_to_itself() {
        for index_type in IndexType::ALL {
            let validator = resolve(index_type.as_str()).unwrap();
            assert_eq!(validator.index_type(), index_type);
        }
        assert_eq!(registered_index_types().len(), IndexType::ALL.len());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        for name in ["IVF_FOO", "hnsw", "", "IVF_FLAT "] {
            let err = resolve(name).err().unwrap();
            assert_eq!(err, ParamCheckError::unknown_index_type(name));
        }
    }

    #[test]
    fn test_index_type_parse_and_display() {
        assert_eq!("RHNSW_PQ".parse::<IndexType>().unwrap(), IndexType::RhnswPq);
        assert_eq!(IndexType::IvfSq8Hybrid.to_string(), "IVF_SQ8_HYBRID");
        assert!("Flat".parse::<IndexType>().is_err());
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        for index_type in IndexType::ALL {
            let json = serde_json::to_string(&index_type).unwrap();
            assert_eq!(json, format!("\"{}\"", index_type.as_str()));
        }
    }

    #[test]
    fn test_build_traits() {
        assert!(IndexType::BinIvfFlat.is_binary());
        assert!(!IndexType::IvfFlat.is_binary());
        assert!(IndexType::RhnswFlat.stores_raw_data());
        assert!(!IndexType::RhnswPq.stores_raw_data());
        assert!(IndexType::Nang.builds_in_one_pass());
        assert!(!IndexType::Hnsw.builds_in_one_pass());
    }
}
