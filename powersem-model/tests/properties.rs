//! Property tests for the instruction models.
//!
//! These check the architectural contracts over random operands rather than
//! hand-picked vectors: quotient correctness where division is defined, the
//! sentinel-plus-flags outcome where it is not, the extended-divide fit
//! criterion, and modulo's flagless-ness.

use powersem_model::{div_model, model_fn};
use powersem_spec::{DivInput, DivInstr, InstructionInput, Mnemonic, OverflowFlags};
use proptest::prelude::*;

proptest! {
    #[test]
    fn divdo_matches_checked_division(a: i64, b: i64) {
        let out = model_fn(Mnemonic::DivDO)(InstructionInput::new(a as u64, b as u64));
        match a.checked_div(b) {
            Some(quotient) => {
                prop_assert_eq!(out.rt, Some(quotient as u64));
                let flags = out.overflow.unwrap();
                prop_assert!(!flags.overflow);
                prop_assert_eq!(flags.overflow32, i64::from(quotient as i32) != quotient);
            }
            None => {
                prop_assert_eq!(out.rt, Some(0));
                prop_assert_eq!(out.overflow, Some(OverflowFlags::from_overflow(true)));
            }
        }
    }

    #[test]
    fn divwuo_matches_checked_division(a: u32, b: u32) {
        let out = model_fn(Mnemonic::DivWUO)(InstructionInput::new(u64::from(a), u64::from(b)));
        match a.checked_div(b) {
            Some(quotient) => {
                prop_assert_eq!(out.rt, Some(u64::from(quotient)));
                prop_assert_eq!(out.overflow, Some(OverflowFlags::default()));
            }
            None => {
                prop_assert_eq!(out.rt, Some(0));
                prop_assert_eq!(out.overflow, Some(OverflowFlags::from_overflow(true)));
            }
        }
    }

    #[test]
    fn divisor_zero_forces_sentinel(a: u64) {
        for m in [
            Mnemonic::DivDO,
            Mnemonic::DivDUO,
            Mnemonic::DivWO,
            Mnemonic::DivWUO,
            Mnemonic::DivDEO,
            Mnemonic::DivDEUO,
            Mnemonic::DivWEO,
            Mnemonic::DivWEUO,
        ] {
            let out = model_fn(m)(InstructionInput::new(a, 0));
            prop_assert_eq!(out.rt, Some(0));
            prop_assert_eq!(out.overflow, Some(OverflowFlags::from_overflow(true)));
        }
    }

    #[test]
    fn unsigned_extended_divide_fit_criterion(a: u64, b: u64) {
        // The 2W-bit quotient fits W bits exactly when dividend < divisor.
        let out = model_fn(Mnemonic::DivDEUO)(InstructionInput::new(a, b));
        let overflow = out.overflow.unwrap().overflow;
        prop_assert_eq!(overflow, a >= b || b == 0);
        if !overflow {
            let quotient = ((u128::from(a) << 64) / u128::from(b)) as u64;
            prop_assert_eq!(out.rt, Some(quotient));
        }

        let (a32, b32) = (a as u32, b as u32);
        let out = model_fn(Mnemonic::DivWEUO)(InstructionInput::new(a, b));
        prop_assert_eq!(out.overflow.unwrap().overflow, a32 >= b32 || b32 == 0);
    }

    #[test]
    fn modulo_never_reports_flags(a: u64, b: u64) {
        for m in [
            Mnemonic::ModSD,
            Mnemonic::ModUD,
            Mnemonic::ModSW,
            Mnemonic::ModUW,
        ] {
            let out = model_fn(m)(InstructionInput::new(a, b));
            prop_assert!(out.rt.is_some());
            prop_assert_eq!(out.overflow, None);
            prop_assert_eq!(out.cr0, None);
        }
    }

    #[test]
    fn quotient_remainder_identity(a: i64, b: i64) {
        prop_assume!(b != 0 && !(a == i64::MIN && b == -1));
        let q = model_fn(Mnemonic::DivD)(InstructionInput::new(a as u64, b as u64))
            .rt
            .unwrap() as i64;
        let r = model_fn(Mnemonic::ModSD)(InstructionInput::new(a as u64, b as u64))
            .rt
            .unwrap() as i64;
        prop_assert_eq!(b.wrapping_mul(q).wrapping_add(r), a);
        prop_assert!(r == 0 || (r < 0) == (a < 0));
    }

    #[test]
    fn record_form_matches_result_sign(a: i64, b: i64, so: bool) {
        let inputs = InstructionInput {
            ra: a as u64,
            rb: b as u64,
            so,
            ..InstructionInput::default()
        };
        let base = model_fn(Mnemonic::DivD)(inputs);
        let rec = model_fn(Mnemonic::DivD_)(inputs);
        prop_assert_eq!(base.rt, rec.rt);
        let cr0 = rec.cr0.unwrap();
        let result = rec.rt.unwrap() as i64;
        prop_assert_eq!(cr0.lt, result < 0);
        prop_assert_eq!(cr0.gt, result > 0);
        prop_assert_eq!(cr0.eq, result == 0);
        prop_assert_eq!(cr0.so, so);
    }

    #[test]
    fn legacy_surface_agrees_with_registry(a: u64, b: u64, prev: u64) {
        let legacy = DivInput {
            dividend: a,
            divisor: b,
            result_prev: prev,
        };
        for &instr in DivInstr::ALL {
            let via_div = div_model(instr, legacy);
            let out = model_fn(instr.mnemonic())(InstructionInput::new(a, b));
            prop_assert_eq!(Some(via_div.result), out.rt);
            prop_assert_eq!(via_div.overflow, out.overflow);
        }
    }
}
