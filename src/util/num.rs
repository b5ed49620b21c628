use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Converts a collection length to an integer value.
///
/// ## Errors
/// Returns `LengthOverflow` if the length exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(3).unwrap(), 3);
/// assert!(usize_to_i64_checked(usize::MAX).is_err());
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::LengthOverflow { length: value })
}

/// Converts an integer index to a position, or `None` for negative values
/// and values beyond the address space.
#[must_use]
pub fn index_from_i64(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
