//! # Power ISA Fixed-Point Semantics - Instruction Models
//!
//! Bit-exact evaluators for the fixed-point divide, modulo, multiply, and
//! add families, including their OE and record-form variants. Each
//! evaluator is a pure function from an operand bundle to a result bundle:
//! no shared state, no I/O, safe to call from any thread.
//!
//! Architecturally undefined divisions (divisor zero, signed minimum over
//! minus one, extended quotients that do not fit the destination width) are
//! normal outcomes: sentinel result 0 with both overflow indicators set.
//!
//! ## Example
//!
//! ```rust
//! use powersem_model::evaluate;
//! use powersem_spec::InstructionInput;
//!
//! let out = evaluate("divdo", InstructionInput::new(0x1234, 0x56)).unwrap();
//! assert_eq!(out.rt, Some(0x36));
//! assert!(!out.overflow.unwrap().overflow);
//! ```

pub mod addsub;
pub mod dispatch;
pub mod divide;
pub mod modulo;
pub mod multiply;
mod primitives;
mod variants;

pub use dispatch::{div_model, evaluate, evaluate_div, model_fn, ModelFn};
