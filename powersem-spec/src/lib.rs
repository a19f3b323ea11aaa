//! # Power ISA Fixed-Point Semantics - Specification Types
//!
//! Architectural data model for the fixed-point divide/multiply/add
//! instruction families: status flags, condition-register fields, operand
//! and result bundles, and the mnemonic registry.
//!
//! ## Key Features
//! - 64-bit register model; word-form instructions use the low 32 bits
//! - Two independently tracked overflow indicators (OV and OV32)
//! - Eight condition-register fields (CR0-CR7), each a 4-bit LT/GT/EQ/SO tuple
//! - Result bundles with explicit field presence: a slot an instruction does
//!   not define is `None`, never a zero default
//! - JSON rendering of register-width integers as `0x`-prefixed hex strings

pub mod error;
pub mod flags;
pub mod mnemonic;
pub mod operands;
pub mod serde_hex;

pub use error::UnknownMnemonic;
pub use flags::{ConditionRegister, OverflowFlags};
pub use mnemonic::{DivInstr, Mnemonic};
pub use operands::{DivInput, DivResult, InstructionInput, InstructionOutput};

/// XER bit for OV (overflow at the operation's native width).
pub const XER_OV: u64 = 0x4000_0000;

/// XER bit for OV32 (overflow at the fixed 32-bit reference width).
pub const XER_OV32: u64 = 0x8_0000;

/// Bits of a 4-bit condition-register field, most significant first.
pub const CR_LT: u8 = 8;
pub const CR_GT: u8 = 4;
pub const CR_EQ: u8 = 2;
pub const CR_SO: u8 = 1;
