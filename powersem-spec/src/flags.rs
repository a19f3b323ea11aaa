//! # Status Flags
//!
//! Overflow indicators and condition-register fields as the fixed-point
//! arithmetic instructions report them.
//!
//! ## Overflow Pair
//!
//! Every OE-form instruction reports two indicators at once: `overflow` for
//! the operation's native width and `overflow32` for a fixed 32-bit
//! reference width. The two diverge on 64-bit operations whose true result
//! exceeds 32 bits but fits 64; on 32-bit operations they coincide by
//! construction.

use crate::{CR_EQ, CR_GT, CR_LT, CR_SO, XER_OV, XER_OV32};
use serde::{Deserialize, Serialize};

/// Overflow status pair reported by OE-form instructions.
///
/// Jointly present or jointly absent on a result: an instruction either
/// reports overflow status or it does not, never one half of it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowFlags {
    /// Overflow at the operation's native width (XER.OV).
    pub overflow: bool,
    /// Overflow at the 32-bit reference width (XER.OV32).
    pub overflow32: bool,
}

impl OverflowFlags {
    /// Flags for an operation whose native width is the 32-bit reference
    /// width, or whose result is architecturally undefined (both indicators
    /// track the same condition).
    #[inline]
    pub fn from_overflow(overflow: bool) -> Self {
        Self {
            overflow,
            overflow32: overflow,
        }
    }

    /// Decode the OV/OV32 bits out of a raw XER value.
    pub fn from_xer(xer: u64) -> Self {
        Self {
            overflow: (xer & XER_OV) != 0,
            overflow32: (xer & XER_OV32) != 0,
        }
    }
}

/// One 4-bit condition-register field (LT, GT, EQ, SO).
///
/// Exactly one of `lt`/`gt`/`eq` is true for any comparison outcome; `so`
/// is the sticky summary-overflow bit copied in alongside, orthogonal to
/// the comparison itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionRegister {
    pub lt: bool,
    pub gt: bool,
    pub eq: bool,
    pub so: bool,
}

impl ConditionRegister {
    /// Compare a signed result against zero, folding in the summary
    /// overflow state `so`.
    pub fn from_signed_int(value: i64, so: bool) -> Self {
        Self {
            lt: value < 0,
            gt: value > 0,
            eq: value == 0,
            so,
        }
    }

    /// Decode a raw 4-bit field (LT=8, GT=4, EQ=2, SO=1).
    pub fn from_4_bits(bits: u8) -> Self {
        Self {
            lt: (bits & CR_LT) != 0,
            gt: (bits & CR_GT) != 0,
            eq: (bits & CR_EQ) != 0,
            so: (bits & CR_SO) != 0,
        }
    }

    /// Re-encode as a raw 4-bit field.
    pub fn to_4_bits(self) -> u8 {
        (self.lt as u8) * CR_LT
            + (self.gt as u8) * CR_GT
            + (self.eq as u8) * CR_EQ
            + (self.so as u8) * CR_SO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_xer() {
        assert_eq!(
            OverflowFlags::from_xer(XER_OV),
            OverflowFlags {
                overflow: true,
                overflow32: false
            }
        );
        assert_eq!(
            OverflowFlags::from_xer(XER_OV | XER_OV32),
            OverflowFlags::from_overflow(true)
        );
        assert_eq!(OverflowFlags::from_xer(0), OverflowFlags::default());
    }

    #[test]
    fn test_from_signed_int() {
        let cr = ConditionRegister::from_signed_int(-5, false);
        assert!(cr.lt && !cr.gt && !cr.eq && !cr.so);
        let cr = ConditionRegister::from_signed_int(0, true);
        assert!(!cr.lt && !cr.gt && cr.eq && cr.so);
        let cr = ConditionRegister::from_signed_int(i64::MAX, false);
        assert!(!cr.lt && cr.gt && !cr.eq);
    }

    #[test]
    fn test_4_bit_round_trip() {
        for bits in 0..16u8 {
            assert_eq!(ConditionRegister::from_4_bits(bits).to_4_bits(), bits);
        }
    }

    proptest! {
        #[test]
        fn comparison_bits_mutually_exclusive(value: i64, so: bool) {
            let cr = ConditionRegister::from_signed_int(value, so);
            let set = cr.lt as u32 + cr.gt as u32 + cr.eq as u32;
            prop_assert_eq!(set, 1);
            prop_assert_eq!(cr.so, so);
        }
    }
}
