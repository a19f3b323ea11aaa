//! Modulo evaluators.
//!
//! Modulo is defined never to overflow: the undefined divisor cases produce
//! the sentinel 0, and no overflow pair is ever reported — the slot stays
//! absent, not false. There are no OE or record forms in this family.

use crate::primitives::{div_rem_s32, div_rem_s64, div_rem_u32, div_rem_u64};
use powersem_spec::{InstructionInput, InstructionOutput};

pub fn modsd(inputs: InstructionInput) -> InstructionOutput {
    let result = match div_rem_s64(inputs.ra as i64, inputs.rb as i64) {
        Some((_, remainder)) => remainder as u64,
        None => 0,
    };
    InstructionOutput {
        rt: Some(result),
        ..InstructionOutput::default()
    }
}

pub fn modud(inputs: InstructionInput) -> InstructionOutput {
    let result = match div_rem_u64(inputs.ra, inputs.rb) {
        Some((_, remainder)) => remainder,
        None => 0,
    };
    InstructionOutput {
        rt: Some(result),
        ..InstructionOutput::default()
    }
}

pub fn modsw(inputs: InstructionInput) -> InstructionOutput {
    let result = match div_rem_s32(inputs.ra as i32, inputs.rb as i32) {
        Some((_, remainder)) => remainder as u64,
        None => 0,
    };
    InstructionOutput {
        rt: Some(result),
        ..InstructionOutput::default()
    }
}

pub fn moduw(inputs: InstructionInput) -> InstructionOutput {
    let result = match div_rem_u32(inputs.ra as u32, inputs.rb as u32) {
        Some((_, remainder)) => u64::from(remainder),
        None => 0,
    };
    InstructionOutput {
        rt: Some(result),
        ..InstructionOutput::default()
    }
}
