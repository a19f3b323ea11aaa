//! Plain and extended divide evaluators.
//!
//! The extended forms (`divde*`, `divwe*`) treat RA as the upper half of a
//! double-width dividend (lower half zero), which is what makes chained
//! arbitrary-precision division work: each step divides the running
//! remainder shifted up by one register width. A quotient that does not fit
//! the destination width, like any architecturally undefined division,
//! produces the sentinel result 0 with both overflow indicators set.

use crate::primitives::{
    div_rem_s32, div_rem_s64, div_rem_u32, div_rem_u64, exceeds_i32, exceeds_u32, flags_signed64,
    flags_unsigned64,
};
use crate::variants::instr_variants_ov_cr;
use powersem_spec::{InstructionInput, InstructionOutput, OverflowFlags};

// ========== Plain divide, 64-bit ==========

instr_variants_ov_cr!(divd, divdo, divd_, divdo_, i64);

pub fn divdo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = inputs.ra as i64;
    let divisor = inputs.rb as i64;
    let (result, overflow) = match div_rem_s64(dividend, divisor) {
        Some((quotient, _)) => (quotient as u64, flags_signed64(quotient)),
        None => (0, OverflowFlags::from_overflow(true)),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(overflow),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(divdu, divduo, divdu_, divduo_, i64);

pub fn divduo(inputs: InstructionInput) -> InstructionOutput {
    let (result, overflow) = match div_rem_u64(inputs.ra, inputs.rb) {
        Some((quotient, _)) => (quotient, flags_unsigned64(quotient)),
        None => (0, OverflowFlags::from_overflow(true)),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(overflow),
        ..InstructionOutput::default()
    }
}

// ========== Plain divide, 32-bit ==========

instr_variants_ov_cr!(divw, divwo, divw_, divwo_, i64);

pub fn divwo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = inputs.ra as i32;
    let divisor = inputs.rb as i32;
    let (result, overflow) = match div_rem_s32(dividend, divisor) {
        Some((quotient, _)) => (quotient as u32 as u64, false),
        None => (0, true),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(OverflowFlags::from_overflow(overflow)),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(divwu, divwuo, divwu_, divwuo_, i64);

pub fn divwuo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = inputs.ra as u32;
    let divisor = inputs.rb as u32;
    let (result, overflow) = match div_rem_u32(dividend, divisor) {
        Some((quotient, _)) => (u64::from(quotient), false),
        None => (0, true),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(OverflowFlags::from_overflow(overflow)),
        ..InstructionOutput::default()
    }
}

// ========== Extended divide, 64-bit ==========

instr_variants_ov_cr!(divde, divdeo, divde_, divdeo_, i64);

pub fn divdeo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = i128::from(inputs.ra as i64) << 64;
    let divisor = i128::from(inputs.rb as i64);
    let (result, overflow) = match dividend.checked_div(divisor) {
        Some(quotient) if i128::from(quotient as i64) == quotient => {
            (quotient as i64 as u64, flags_signed64(quotient as i64))
        }
        _ => (0, OverflowFlags::from_overflow(true)),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(overflow),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(divdeu, divdeuo, divdeu_, divdeuo_, i64);

pub fn divdeuo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = u128::from(inputs.ra) << 64;
    let divisor = u128::from(inputs.rb);
    let (result, overflow) = match dividend.checked_div(divisor) {
        Some(quotient) if quotient <= u128::from(u64::MAX) => {
            (quotient as u64, flags_unsigned64(quotient as u64))
        }
        _ => (0, OverflowFlags::from_overflow(true)),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(overflow),
        ..InstructionOutput::default()
    }
}

// ========== Extended divide, 32-bit ==========

instr_variants_ov_cr!(divwe, divweo, divwe_, divweo_, i64);

pub fn divweo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = i64::from(inputs.ra as i32) << 32;
    let divisor = i64::from(inputs.rb as i32);
    let (result, overflow) = match div_rem_s64(dividend, divisor) {
        Some((quotient, _)) if !exceeds_i32(quotient) => (quotient as u32 as u64, false),
        _ => (0, true),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(OverflowFlags::from_overflow(overflow)),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(divweu, divweuo, divweu_, divweuo_, i64);

pub fn divweuo(inputs: InstructionInput) -> InstructionOutput {
    let dividend = u64::from(inputs.ra as u32) << 32;
    let divisor = u64::from(inputs.rb as u32);
    let (result, overflow) = match div_rem_u64(dividend, divisor) {
        Some((quotient, _)) if !exceeds_u32(quotient) => (quotient as u32 as u64, false),
        _ => (0, true),
    };
    InstructionOutput {
        rt: Some(result),
        overflow: Some(OverflowFlags::from_overflow(overflow)),
        ..InstructionOutput::default()
    }
}
