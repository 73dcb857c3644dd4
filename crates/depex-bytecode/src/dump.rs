//! Human-readable disassembly of an encoded stream.
//!
//! The listing is the textual companion the build tooling writes next to
//! the binary stream: one line per tag, offset column first, GUID
//! operands in registry format.

use std::fmt::Write as _;

use crate::stream::{Decoder, StreamError};

/// Disassemble an encoded stream into a listing.
///
/// Fails with the decoder's error if the stream is malformed; a partial
/// listing is never returned.
pub fn dump(bytes: &[u8]) -> Result<String, StreamError> {
    let width = offset_width(bytes.len());
    let mut out = String::new();

    for item in Decoder::new(bytes) {
        let decoded = item?;
        let mnemonic = decoded.opcode.mnemonic();
        let _ = match decoded.operand {
            Some(guid) => writeln!(
                out,
                "0x{offset:0width$X}  {mnemonic:<6}  {guid}",
                offset = decoded.offset,
            ),
            None => writeln!(out, "0x{offset:0width$X}  {mnemonic}", offset = decoded.offset),
        };
    }

    Ok(out)
}

/// Hex digits needed for the largest offset, minimum 4.
fn offset_width(len: usize) -> usize {
    let mut width = 0;
    let mut value = len.max(1);
    while value > 0 {
        width += 1;
        value >>= 4;
    }
    width.max(4)
}
