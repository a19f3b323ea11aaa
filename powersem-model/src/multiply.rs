//! Multiply and fused multiply-add evaluators.
//!
//! The word high-multiplies replicate the high word of the product into
//! both halves of rt (POWER9 leaves the upper word undefined and does
//! exactly that). The fused multiply-adds compute over the full 128-bit
//! product and never report overflow status.

use crate::primitives::exceeds_i32;
use crate::variants::{instr_variants_cr, instr_variants_ov_cr};
use powersem_spec::{InstructionInput, InstructionOutput, OverflowFlags};

// ========== Low multiply ==========

instr_variants_ov_cr!(mullw, mullwo, mullw_, mullwo_, i64);

pub fn mullwo(inputs: InstructionInput) -> InstructionOutput {
    let ra = i64::from(inputs.ra as i32);
    let rb = i64::from(inputs.rb as i32);
    // The 32x32 product always fits 64 bits and lands in rt whole.
    let result = ra * rb;
    InstructionOutput {
        rt: Some(result as u64),
        overflow: Some(OverflowFlags::from_overflow(exceeds_i32(result))),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(mulld, mulldo, mulld_, mulldo_, i64);

pub fn mulldo(inputs: InstructionInput) -> InstructionOutput {
    let product = i128::from(inputs.ra as i64) * i128::from(inputs.rb as i64);
    let overflow = OverflowFlags {
        overflow: i128::from(product as i64) != product,
        overflow32: i128::from(product as i32) != product,
    };
    InstructionOutput {
        rt: Some(product as u64),
        overflow: Some(overflow),
        ..InstructionOutput::default()
    }
}

// ========== High multiply ==========

instr_variants_cr!(mulhw, mulhw_, i32);

pub fn mulhw(inputs: InstructionInput) -> InstructionOutput {
    let ra = i64::from(inputs.ra as i32);
    let rb = i64::from(inputs.rb as i32);
    let high = ((ra * rb) >> 32) as u32 as u64;
    InstructionOutput {
        rt: Some(high | (high << 32)),
        ..InstructionOutput::default()
    }
}

instr_variants_cr!(mulhwu, mulhwu_, i32);

pub fn mulhwu(inputs: InstructionInput) -> InstructionOutput {
    let ra = u64::from(inputs.ra as u32);
    let rb = u64::from(inputs.rb as u32);
    let high = ((ra * rb) >> 32) as u32 as u64;
    InstructionOutput {
        rt: Some(high | (high << 32)),
        ..InstructionOutput::default()
    }
}

instr_variants_cr!(mulhd, mulhd_, i64);

pub fn mulhd(inputs: InstructionInput) -> InstructionOutput {
    let product = i128::from(inputs.ra as i64) * i128::from(inputs.rb as i64);
    InstructionOutput {
        rt: Some((product >> 64) as i64 as u64),
        ..InstructionOutput::default()
    }
}

instr_variants_cr!(mulhdu, mulhdu_, i64);

pub fn mulhdu(inputs: InstructionInput) -> InstructionOutput {
    let product = u128::from(inputs.ra) * u128::from(inputs.rb);
    InstructionOutput {
        rt: Some((product >> 64) as u64),
        ..InstructionOutput::default()
    }
}

// ========== Fused multiply-add ==========

pub fn maddhd(inputs: InstructionInput) -> InstructionOutput {
    let ra = i128::from(inputs.ra as i64);
    let rb = i128::from(inputs.rb as i64);
    let rc = i128::from(inputs.rc as i64);
    InstructionOutput {
        rt: Some(((ra * rb + rc) >> 64) as u64),
        ..InstructionOutput::default()
    }
}

pub fn maddhdu(inputs: InstructionInput) -> InstructionOutput {
    let ra = u128::from(inputs.ra);
    let rb = u128::from(inputs.rb);
    let rc = u128::from(inputs.rc);
    InstructionOutput {
        rt: Some(((ra * rb + rc) >> 64) as u64),
        ..InstructionOutput::default()
    }
}

pub fn maddld(inputs: InstructionInput) -> InstructionOutput {
    let ra = inputs.ra as i64;
    let rb = inputs.rb as i64;
    let rc = inputs.rc as i64;
    InstructionOutput {
        rt: Some(ra.wrapping_mul(rb).wrapping_add(rc) as u64),
        ..InstructionOutput::default()
    }
}
