//! # Error Types
//!
//! The engine is total over its declared domain: divide-by-zero and
//! signed-overflow division are normal outcomes reported through
//! [`OverflowFlags`](crate::OverflowFlags), not errors. The only failure the
//! registry surface can report is a mnemonic that is not in the registry.

use thiserror::Error;

/// A mnemonic string that does not name any registered instruction.
///
/// Raised by [`Mnemonic::from_name`](crate::Mnemonic::from_name) and the
/// dispatch entry points. Callers can avoid it entirely by enumerating
/// [`Mnemonic::ALL`](crate::Mnemonic::ALL) up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic: {0:?}")]
pub struct UnknownMnemonic(pub String);
