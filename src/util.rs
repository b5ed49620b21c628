/// Integer conversion helpers.
///
/// This module provides checked conversions between `usize` lengths and
/// positions and the interpreter's `i64` integers, so that no conversion
/// silently truncates or wraps.
pub mod num;
