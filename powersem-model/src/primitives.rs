//! Fixed-width division primitives and the two-indicator overflow model.
//!
//! The architecture leaves division undefined for divisor zero and for the
//! signed minimum divided by minus one; `checked_div`/`checked_rem` return
//! `None` on exactly those inputs, so the evaluators map `None` to the
//! defined sentinel (result 0, both overflow indicators set) and never
//! fault.

use powersem_spec::OverflowFlags;

/// Truncating quotient and remainder, 64-bit signed.
#[inline]
pub(crate) fn div_rem_s64(dividend: i64, divisor: i64) -> Option<(i64, i64)> {
    Some((dividend.checked_div(divisor)?, dividend.checked_rem(divisor)?))
}

/// Truncating quotient and remainder, 64-bit unsigned.
#[inline]
pub(crate) fn div_rem_u64(dividend: u64, divisor: u64) -> Option<(u64, u64)> {
    Some((dividend.checked_div(divisor)?, dividend.checked_rem(divisor)?))
}

/// Truncating quotient and remainder, 32-bit signed.
#[inline]
pub(crate) fn div_rem_s32(dividend: i32, divisor: i32) -> Option<(i32, i32)> {
    Some((dividend.checked_div(divisor)?, dividend.checked_rem(divisor)?))
}

/// Truncating quotient and remainder, 32-bit unsigned.
#[inline]
pub(crate) fn div_rem_u32(dividend: u32, divisor: u32) -> Option<(u32, u32)> {
    Some((dividend.checked_div(divisor)?, dividend.checked_rem(divisor)?))
}

/// Whether a 64-bit signed result exceeds the 32-bit reference width.
#[inline]
pub(crate) fn exceeds_i32(value: i64) -> bool {
    i64::from(value as i32) != value
}

/// Whether a 64-bit unsigned result exceeds the 32-bit reference width.
#[inline]
pub(crate) fn exceeds_u32(value: u64) -> bool {
    value > u64::from(u32::MAX)
}

/// Overflow pair for a defined 64-bit signed result: OV clear, OV32
/// tracking the 32-bit reference width independently.
#[inline]
pub(crate) fn flags_signed64(result: i64) -> OverflowFlags {
    OverflowFlags {
        overflow: false,
        overflow32: exceeds_i32(result),
    }
}

/// Overflow pair for a defined 64-bit unsigned result.
#[inline]
pub(crate) fn flags_unsigned64(result: u64) -> OverflowFlags {
    OverflowFlags {
        overflow: false,
        overflow32: exceeds_u32(result),
    }
}
