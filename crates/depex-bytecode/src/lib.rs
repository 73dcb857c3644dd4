//! Bytecode format for compiled dependency expressions.
//!
//! This crate contains:
//! - The opcode vocabulary ([`Opcode`])
//! - The append-only output stream ([`DepexStream`]) with termination
//!   and alignment padding
//! - Stream decoding and a human-readable disassembler ([`dump`])
//!
//! The byte encoding is the external contract consumed by the module
//! loader: a single-byte tag, optionally followed by a 16-byte GUID
//! operand, repeated until a single `END` tag.

pub mod dump;
pub mod opcode;
pub mod stream;


pub use dump::dump;
pub use opcode::Opcode;
pub use stream::{DecodedOp, Decoder, DepexStream, PAD_BYTE, StreamError};
