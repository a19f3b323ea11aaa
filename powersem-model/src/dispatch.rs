//! Mnemonic-to-evaluator dispatch.
//!
//! The registry is closed and statically built: every [`Mnemonic`] maps to
//! exactly one evaluator function, so [`model_fn`] is total and dispatch by
//! string is a lookup-and-call with [`UnknownMnemonic`] as the only failure.

use crate::{addsub, divide, modulo, multiply};
use powersem_spec::{
    DivInput, DivInstr, DivResult, InstructionInput, InstructionOutput, Mnemonic, UnknownMnemonic,
};
use tracing::trace;

/// Evaluator for one instruction in the full registry.
pub type ModelFn = fn(InstructionInput) -> InstructionOutput;

/// Look up the evaluator for a registered mnemonic.
pub fn model_fn(mnemonic: Mnemonic) -> ModelFn {
    match mnemonic {
        // ========== Add / subtract-from ==========
        Mnemonic::Add => addsub::add,
        Mnemonic::AddO => addsub::addo,
        Mnemonic::Add_ => addsub::add_,
        Mnemonic::AddO_ => addsub::addo_,
        Mnemonic::SubF => addsub::subf,
        Mnemonic::SubFO => addsub::subfo,
        Mnemonic::SubF_ => addsub::subf_,
        Mnemonic::SubFO_ => addsub::subfo_,

        // ========== Extended divide ==========
        Mnemonic::DivDE => divide::divde,
        Mnemonic::DivDEO => divide::divdeo,
        Mnemonic::DivDE_ => divide::divde_,
        Mnemonic::DivDEO_ => divide::divdeo_,
        Mnemonic::DivDEU => divide::divdeu,
        Mnemonic::DivDEUO => divide::divdeuo,
        Mnemonic::DivDEU_ => divide::divdeu_,
        Mnemonic::DivDEUO_ => divide::divdeuo_,
        Mnemonic::DivWE => divide::divwe,
        Mnemonic::DivWEO => divide::divweo,
        Mnemonic::DivWE_ => divide::divwe_,
        Mnemonic::DivWEO_ => divide::divweo_,
        Mnemonic::DivWEU => divide::divweu,
        Mnemonic::DivWEUO => divide::divweuo,
        Mnemonic::DivWEU_ => divide::divweu_,
        Mnemonic::DivWEUO_ => divide::divweuo_,

        // ========== Plain divide ==========
        Mnemonic::DivD => divide::divd,
        Mnemonic::DivDO => divide::divdo,
        Mnemonic::DivD_ => divide::divd_,
        Mnemonic::DivDO_ => divide::divdo_,
        Mnemonic::DivDU => divide::divdu,
        Mnemonic::DivDUO => divide::divduo,
        Mnemonic::DivDU_ => divide::divdu_,
        Mnemonic::DivDUO_ => divide::divduo_,
        Mnemonic::DivW => divide::divw,
        Mnemonic::DivWO => divide::divwo,
        Mnemonic::DivW_ => divide::divw_,
        Mnemonic::DivWO_ => divide::divwo_,
        Mnemonic::DivWU => divide::divwu,
        Mnemonic::DivWUO => divide::divwuo,
        Mnemonic::DivWU_ => divide::divwu_,
        Mnemonic::DivWUO_ => divide::divwuo_,

        // ========== Modulo ==========
        Mnemonic::ModSD => modulo::modsd,
        Mnemonic::ModUD => modulo::modud,
        Mnemonic::ModSW => modulo::modsw,
        Mnemonic::ModUW => modulo::moduw,

        // ========== Multiply ==========
        Mnemonic::MulLW => multiply::mullw,
        Mnemonic::MulLWO => multiply::mullwo,
        Mnemonic::MulLW_ => multiply::mullw_,
        Mnemonic::MulLWO_ => multiply::mullwo_,
        Mnemonic::MulLD => multiply::mulld,
        Mnemonic::MulLDO => multiply::mulldo,
        Mnemonic::MulLD_ => multiply::mulld_,
        Mnemonic::MulLDO_ => multiply::mulldo_,
        Mnemonic::MulHW => multiply::mulhw,
        Mnemonic::MulHW_ => multiply::mulhw_,
        Mnemonic::MulHWU => multiply::mulhwu,
        Mnemonic::MulHWU_ => multiply::mulhwu_,
        Mnemonic::MulHD => multiply::mulhd,
        Mnemonic::MulHD_ => multiply::mulhd_,
        Mnemonic::MulHDU => multiply::mulhdu,
        Mnemonic::MulHDU_ => multiply::mulhdu_,

        // ========== Fused multiply-add ==========
        Mnemonic::MAddHD => multiply::maddhd,
        Mnemonic::MAddHDU => multiply::maddhdu,
        Mnemonic::MAddLD => multiply::maddld,
    }
}

/// Evaluate one instruction by mnemonic string.
pub fn evaluate(
    mnemonic: &str,
    inputs: InstructionInput,
) -> Result<InstructionOutput, UnknownMnemonic> {
    let mnemonic = Mnemonic::from_name(mnemonic)?;
    trace!(%mnemonic, ra = inputs.ra, rb = inputs.rb, rc = inputs.rc, "evaluating");
    Ok(model_fn(mnemonic)(inputs))
}

/// Evaluate one legacy divide/modulo instruction.
///
/// `result_prev` only matters to a hardware cross-check preloading the
/// destination register; the model ignores it.
pub fn div_model(instr: DivInstr, inputs: DivInput) -> DivResult {
    let out = model_fn(instr.mnemonic())(InstructionInput::new(inputs.dividend, inputs.divisor));
    DivResult {
        result: out.rt.expect("legacy mnemonics all set rt"),
        overflow: out.overflow,
    }
}

/// Evaluate one legacy divide/modulo instruction by mnemonic string.
pub fn evaluate_div(mnemonic: &str, inputs: DivInput) -> Result<DivResult, UnknownMnemonic> {
    let instr = DivInstr::from_name(mnemonic)?;
    trace!(%instr, dividend = inputs.dividend, divisor = inputs.divisor, "evaluating");
    Ok(div_model(instr, inputs))
}
