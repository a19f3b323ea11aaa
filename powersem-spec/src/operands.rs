//! # Operand and Result Bundles
//!
//! Value types carried across one evaluation: caller-supplied operands in,
//! freshly constructed results out. Nothing here has persistent identity;
//! the engine keeps no state between calls.
//!
//! ## Field Presence
//!
//! Result slots an instruction does not define are `None`, never a zero
//! default, so a consumer can distinguish "defined as zero" from "not
//! produced by this instruction". In the JSON rendering absent slots are
//! skipped and an embedded [`OverflowFlags`] inlines its fields into the
//! parent object.

use crate::{ConditionRegister, OverflowFlags};
use serde::{Deserialize, Serialize};

/// Operands for the legacy divide/modulo surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivInput {
    #[serde(with = "crate::serde_hex")]
    pub dividend: u64,
    #[serde(with = "crate::serde_hex")]
    pub divisor: u64,
    /// Prior partial result for chained extended-division sequences. The
    /// model evaluators ignore it; it exists so a hardware cross-check can
    /// preload the destination register.
    #[serde(default, with = "crate::serde_hex")]
    pub result_prev: u64,
}

/// Result of one legacy divide/modulo evaluation.
///
/// Modulo forms never overflow architecturally, so they omit `overflow`
/// entirely rather than report it false.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivResult {
    #[serde(with = "crate::serde_hex")]
    pub result: u64,
    #[serde(default, flatten, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowFlags>,
}

/// Generic operand bundle for the full registry.
///
/// Slots are named by operand position; an evaluator reads only the slots
/// its instruction uses (`ra`,`rb` for two-operand forms, plus `rc` for the
/// fused multiply-adds). Word-form instructions truncate operands to their
/// low 32 bits; out-of-width high bits are masked, never rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionInput {
    #[serde(default, with = "crate::serde_hex")]
    pub ra: u64,
    #[serde(default, with = "crate::serde_hex")]
    pub rb: u64,
    #[serde(default, with = "crate::serde_hex")]
    pub rc: u64,
    /// Caller's sticky summary-overflow state (XER.SO). Record forms copy
    /// it into CR0; OE record forms OR the instruction's own overflow into
    /// it first.
    #[serde(default)]
    pub so: bool,
}

impl InstructionInput {
    /// Two-operand bundle with clear summary overflow.
    pub fn new(ra: u64, rb: u64) -> Self {
        Self {
            ra,
            rb,
            ..Self::default()
        }
    }
}

/// Result bundle for the full registry.
///
/// A given instruction populates `rt`, at most one overflow pair, and at
/// most one condition-register field; everything else stays `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionOutput {
    #[serde(
        default,
        with = "crate::serde_hex::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rt: Option<u64>,
    #[serde(default, flatten, skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr0: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr1: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr2: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr3: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr4: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr5: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr6: Option<ConditionRegister>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cr7: Option<ConditionRegister>,
}
