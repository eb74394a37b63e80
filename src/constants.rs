/// Inclusive bounds of the fixed threshold search range. Attribute values
/// are assumed to be small integers; values above `THRESHOLD_MAX` are still
/// routed correctly at prediction time but never isolated by a split of
/// their own.
pub const THRESHOLD_MIN: i64 = 1;
pub const THRESHOLD_MAX: i64 = 10;
