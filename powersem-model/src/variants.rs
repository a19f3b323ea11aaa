//! Record-form and OE-form variant generation.
//!
//! Every OE-capable family is written once as its `o` evaluator; the other
//! three spellings derive from it:
//!
//! - base: same computation, overflow pair not reported
//! - `.`  : CR0 from the result, SO copied from the caller's sticky state
//! - `o.` : CR0 with SO = sticky | instruction overflow, pair still reported
//!
//! `$iwidth` is the integer type CR0 compares the result as. POWER9 compares
//! the full 64-bit result even for the word divide forms (the ISA leaves the
//! word-form compare undefined), so the divide families all pass `i64`.

/// Expand `base`, `.` and `o.` evaluators around a hand-written `o` form.
macro_rules! instr_variants_ov_cr {
    ($base:ident, $o:ident, $rec:ident, $orec:ident, $iwidth:ident) => {
        pub fn $base(inputs: powersem_spec::InstructionInput) -> powersem_spec::InstructionOutput {
            powersem_spec::InstructionOutput {
                overflow: None,
                ..$o(inputs)
            }
        }

        pub fn $orec(inputs: powersem_spec::InstructionInput) -> powersem_spec::InstructionOutput {
            let mut out = $o(inputs);
            let result = out.rt.expect("OE evaluator sets rt");
            let overflow = out.overflow.expect("OE evaluator sets the overflow pair");
            let so = inputs.so || overflow.overflow;
            out.cr0 = Some(powersem_spec::ConditionRegister::from_signed_int(
                result as $iwidth as i64,
                so,
            ));
            out
        }

        pub fn $rec(inputs: powersem_spec::InstructionInput) -> powersem_spec::InstructionOutput {
            let mut out = $orec(inputs);
            if let Some(cr0) = out.cr0.as_mut() {
                cr0.so = inputs.so;
            }
            out.overflow = None;
            out
        }
    };
}

/// Expand a `.` evaluator around a base form that never overflows.
macro_rules! instr_variants_cr {
    ($base:ident, $rec:ident, $iwidth:ident) => {
        pub fn $rec(inputs: powersem_spec::InstructionInput) -> powersem_spec::InstructionOutput {
            let mut out = $base(inputs);
            let result = out.rt.expect("evaluator sets rt");
            out.cr0 = Some(powersem_spec::ConditionRegister::from_signed_int(
                result as $iwidth as i64,
                inputs.so,
            ));
            out
        }
    };
}

pub(crate) use {instr_variants_cr, instr_variants_ov_cr};
