//! Range and membership predicates shared by every validator.
//!
//! Each predicate comes in two shapes: a `Result` form that says why a
//! value was refused, and the boolean `check_*` form. Neither ever panics;
//! a missing key or a non-integer value is just a refusal.

use crate::error::{ParamCheckError, Result};
use crate::params::ParamSet;

/// Parse `key` as an integer and require it to lie in `[min, max]`.
pub fn int_in_range(params: &ParamSet, key: &str, min: i64, max: i64) -> Result<i64> {
    let value = params.get_int(key)?;
    if value < min || value > max {
        return Err(ParamCheckError::out_of_range(key, value, min, max));
    }
    Ok(value)
}

/// Require the raw value of `key` to equal one of `allowed` exactly.
pub fn str_in_values<'a>(params: &'a ParamSet, key: &str, allowed: &[&str]) -> Result<&'a str> {
    let value = params.get(key).ok_or_else(|| ParamCheckError::missing(key))?;
    if !slice_contains(allowed, &value) {
        return Err(ParamCheckError::unsupported_value(key, value));
    }
    Ok(value)
}

/// True if `key` is present, parses as an integer, and lies in `[min, max]`.
pub fn check_int_by_range(params: &ParamSet, key: &str, min: i64, max: i64) -> bool {
    int_in_range(params, key, min, max).is_ok()
}

/// True if `key` is present and its value is exactly one of `allowed`.
pub fn check_str_by_values(params: &ParamSet, key: &str, allowed: &[&str]) -> bool {
    str_in_values(params, key, allowed).is_ok()
}

/// Slice membership.
#[inline]
pub fn slice_contains<T: PartialEq>(items: &[T], item: &T) -> bool {
    items.iter().any(|x| x == item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_range_bounds_inclusive() {
        for (value, ok) in [("0", false), ("1", true), ("65536", true), ("65537", false)] {
            let params = ParamSet::new().with("nlist", value);
            assert_eq!(check_int_by_range(&params, "nlist", 1, 65536), ok, "nlist={value}");
        }
    }

    #[test]
    fn test_int_range_missing_or_garbage() {
        let params = ParamSet::new().with("nlist", "lots");
        assert!(!check_int_by_range(&params, "nlist", 1, 65536));
        assert!(!check_int_by_range(&params, "M", 4, 64));
        assert!(!check_int_by_range(&ParamSet::new().with("nlist", ""), "nlist", 1, 65536));
    }

    #[test]
    fn test_int_range_reports_value() {
        let params = ParamSet::new().with("M", "65");
        let err = int_in_range(&params, "M", 4, 64).unwrap_err();
        assert_eq!(err, ParamCheckError::out_of_range("M", 65, 4, 64));
    }

    #[test]
    fn test_str_by_values_exact_match() {
        let params = ParamSet::new().with("metric_type", "L2");
        assert!(check_str_by_values(&params, "metric_type", &["L2", "IP"]));
        assert!(!check_str_by_values(&params, "metric_type", &["IP"]));

        let lower = ParamSet::new().with("metric_type", "l2");
        assert!(!check_str_by_values(&lower, "metric_type", &["L2", "IP"]));
        assert!(!check_str_by_values(&ParamSet::new(), "metric_type", &["L2"]));
    }

    #[test]
    fn test_slice_contains() {
        assert!(slice_contains(&[96, 64, 8], &8));
        assert!(!slice_contains(&[96, 64, 8], &7));
        assert!(!slice_contains::<i64>(&[], &1));
    }
}
