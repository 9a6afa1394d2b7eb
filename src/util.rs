/// Safe numeric conversion helpers.
///
/// Provides checked conversions between integer and floating-point types
/// that refuse to silently lose precision.
pub mod num;
