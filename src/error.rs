//! Error types for parameter validation.
//!
//! Validators report *why* a parameter set was rejected through
//! [`ParamCheckError`], but the boolean `check_train` surface collapses every
//! structural rejection to `false`. The only error a caller of
//! [`crate::validate`] ever sees is [`ParamCheckError::UnknownIndexType`].

use thiserror::Error;

/// Result type alias using [`ParamCheckError`].
pub type Result<T> = std::result::Result<T, ParamCheckError>;

/// Errors that can occur while checking index build parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamCheckError {
    /// A required parameter key is absent.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    /// A parameter value could not be parsed as a decimal integer.
    #[error("invalid integer for '{key}': {value:?}")]
    InvalidInteger {
        /// Parameter key.
        key: String,
        /// Raw value as supplied.
        value: String,
    },

    /// An integer parameter lies outside its legal inclusive range.
    #[error("parameter '{key}' = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter key.
        key: String,
        /// Parsed value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A string parameter is not one of the allowed values.
    #[error("unsupported value for '{key}': {value:?}")]
    UnsupportedValue {
        /// Parameter key.
        key: String,
        /// Raw value as supplied.
        value: String,
    },

    /// Individually valid parameters that are illegal together.
    #[error("invalid parameter combination: {0}")]
    InvalidCombination(String),

    /// No validator is registered for the requested index type.
    #[error("unknown index type: {0:?}")]
    UnknownIndexType(String),

    /// A build request was rejected by its validator.
    #[error("{index_type} rejected build parameters: {reason}")]
    Rejected {
        /// Index type the request targeted.
        index_type: String,
        /// Rejection detail from the validator.
        reason: String,
    },

    /// A parameter set could not be decoded from JSON.
    #[error("invalid parameter document: {0}")]
    InvalidDocument(String),
}

impl ParamCheckError {
    /// Creates a new `MissingParameter` error.
    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingParameter(key.into())
    }

    /// Creates a new `InvalidInteger` error.
    pub fn invalid_integer(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new `OutOfRange` error.
    pub fn out_of_range(key: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            key: key.into(),
            value,
            min,
            max,
        }
    }

    /// Creates a new `UnsupportedValue` error.
    pub fn unsupported_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a new `InvalidCombination` error.
    pub fn invalid_combination(msg: impl Into<String>) -> Self {
        Self::InvalidCombination(msg.into())
    }

    /// Creates a new `UnknownIndexType` error.
    pub fn unknown_index_type(name: impl Into<String>) -> Self {
        Self::UnknownIndexType(name.into())
    }

    /// Wraps a validator rejection with the index type it came from.
    pub fn rejected(index_type: impl Into<String>, reason: &ParamCheckError) -> Self {
        Self::Rejected {
            index_type: index_type.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true for errors that mean "request rejected" rather than
    /// "request could not be routed".
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::UnknownIndexType(_))
    }
}

impl From<serde_json::Error> for ParamCheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDocument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParamCheckError::out_of_range("nlist", 0, 1, 65536);
        assert_eq!(
            err.to_string(),
            "parameter 'nlist' = 0 is out of range [1, 65536]"
        );

        let err = ParamCheckError::missing("m");
        assert_eq!(err.to_string(), "missing parameter: m");

        let err = ParamCheckError::invalid_integer("dim", "12x");
        assert_eq!(err.to_string(), "invalid integer for 'dim': \"12x\"");

        let err = ParamCheckError::unknown_index_type("IVF_FOO");
        assert_eq!(err.to_string(), "unknown index type: \"IVF_FOO\"");
    }

    #[test]
    fn test_rejected_wraps_reason() {
        let reason = ParamCheckError::unsupported_value("metric_type", "COSINE");
        let err = ParamCheckError::rejected("HNSW", &reason);
        assert_eq!(
            err.to_string(),
            "HNSW rejected build parameters: unsupported value for 'metric_type': \"COSINE\""
        );
        assert!(err.is_rejection());
        assert!(!ParamCheckError::unknown_index_type("X").is_rejection());
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ParamCheckError = json_err.into();
        assert!(matches!(err, ParamCheckError::InvalidDocument(_)));
    }
}
