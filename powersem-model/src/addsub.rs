//! Add and subtract-from evaluators.
//!
//! Unlike the divides, these wrap on overflow instead of producing a
//! sentinel: rt always carries the wrapped result. The two overflow
//! indicators are computed independently, OV from the 64-bit addition and
//! OV32 from the same operands truncated to words.

use crate::variants::instr_variants_ov_cr;
use powersem_spec::{InstructionInput, InstructionOutput, OverflowFlags};

instr_variants_ov_cr!(add, addo, add_, addo_, i64);

pub fn addo(inputs: InstructionInput) -> InstructionOutput {
    let ra = inputs.ra as i64;
    let rb = inputs.rb as i64;
    let (result, overflow) = ra.overflowing_add(rb);
    let (_, overflow32) = (ra as i32).overflowing_add(rb as i32);
    InstructionOutput {
        rt: Some(result as u64),
        overflow: Some(OverflowFlags {
            overflow,
            overflow32,
        }),
        ..InstructionOutput::default()
    }
}

instr_variants_ov_cr!(subf, subfo, subf_, subfo_, i64);

/// Subtract-from: rt = rb - ra.
pub fn subfo(inputs: InstructionInput) -> InstructionOutput {
    let ra = inputs.ra as i64;
    let rb = inputs.rb as i64;
    let (result, overflow) = rb.overflowing_sub(ra);
    let (_, overflow32) = (rb as i32).overflowing_sub(ra as i32);
    InstructionOutput {
        rt: Some(result as u64),
        overflow: Some(OverflowFlags {
            overflow,
            overflow32,
        }),
        ..InstructionOutput::default()
    }
}
