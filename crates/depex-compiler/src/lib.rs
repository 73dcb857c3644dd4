#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compiler for dependency expressions: lexer, parser, and bytecode
//! emitter.
//!
//! A dependency expression is the boolean load-ordering formula carried
//! by a firmware module: GUID atoms combined with `AND`/`OR`/`NOT`,
//! `TRUE`/`FALSE` literals, parentheses, and an optional leading
//! scheduling operator (`BEFORE`, `AFTER`, `SOR`).
//!
//! Pipeline: source text → [`token::lex`] → [`parser::parse`] →
//! [`emit::emit`] → [`DepexStream`]. [`validate`] runs the front half
//! for its verdict only; [`compile`] and the [`generate`] wrappers run
//! the whole pipeline. There is no second scan: legality of every
//! construct, including the first-token-only scheduling operators, is
//! proven by the parser before any byte is emitted.

pub mod ast;
pub mod diagnostics;
pub mod emit;
pub mod parser;
pub mod token;


pub use depex_bytecode::{DepexStream, Opcode};
pub use depex_core::Guid;

pub use diagnostics::render_diagnostic;
pub use token::Span;

use depex_bytecode::StreamError;

/// Errors that can occur while compiling a dependency expression.
///
/// All variants are terminal: a failing compilation produces no output
/// at all, and spans point into the source text for reporting via
/// [`render_diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Token sequence is not in the grammar.
    #[error("syntax error at offset {}", .span.start)]
    Syntax { span: Span },

    /// A `{...}` literal violates the eleven-field GUID shape.
    #[error("malformed GUID literal at offset {}", .span.start)]
    MalformedGuid { span: Span },

    /// `BEFORE`/`AFTER`/`SOR` anywhere but the very first token.
    #[error("scheduling operator is only legal as the first token (offset {})", .span.start)]
    IllegalLeadingOperator { span: Span },

    /// Characters matching no terminal of the language.
    #[error("unrecognized token at offset {}", .span.start)]
    UnrecognizedToken { span: Span },

    /// A literal tab, illegal anywhere in the input.
    #[error("tab character is not allowed (offset {})", .span.start)]
    TabCharacter { span: Span },

    /// The expression would produce zero opcodes before `END`.
    #[error("empty expression")]
    EmptyExpression,
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Decide whether `text` is a syntactically legal dependency expression.
///
/// A pure recognizer: no artifact, no diagnostics, true iff the entire
/// span is consumed by the grammar.
pub fn validate(text: &str) -> bool {
    parser::parse(text).is_ok()
}

/// Compile `text` into a terminated [`DepexStream`].
pub fn compile(text: &str) -> Result<DepexStream> {
    let expr = parser::parse(text)?;
    let stream = emit::emit(&expr).map_err(|err| match err {
        StreamError::EmptyExpression => Error::EmptyExpression,
        // the emitter appends at least one opcode per parsed node
        other => unreachable!("emitter failed: {other}"),
    })?;
    Ok(stream)
}

/// Compile `text` and return the raw byte stream.
pub fn generate(text: &str) -> Result<Vec<u8>> {
    compile(text).map(DepexStream::into_bytes)
}

/// Compile `text`, padding the stream with filler to a multiple of
/// `alignment`. An alignment of zero requests no padding.
pub fn generate_padded(text: &str, alignment: usize) -> Result<Vec<u8>> {
    let mut stream = compile(text)?;
    stream.pad_to(alignment);
    Ok(stream.into_bytes())
}
