/// Decimal precision for money figures returned to callers
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
