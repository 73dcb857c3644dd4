//! Span-based lexer for the dependency-expression language.
//!
//! Produces `kind + span` tokens without storing text; a token's text is
//! sliced from the source on demand via [`token_text`]. Whitespace
//! (space, LF, CR) is skipped between tokens. A tab aborts the lex with
//! its own error, any other illegal character as an unrecognized token —
//! both are fatal, matching the rest of the pipeline's no-recovery
//! policy.

use logos::Logos;

use crate::Error;

/// Byte range into the source text.
pub type Span = std::ops::Range<usize>;

/// Terminal vocabulary of the language.
///
/// Keyword matching is case-sensitive; hex-literal field widths are
/// checked by the parser, not here.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \n\r]+")]
pub enum TokenKind {
    #[token("BEFORE")]
    KwBefore,

    #[token("AFTER")]
    KwAfter,

    #[token("SOR")]
    KwSor,

    #[token("AND")]
    KwAnd,

    #[token("OR")]
    KwOr,

    #[token("NOT")]
    KwNot,

    #[token("TRUE")]
    KwTrue,

    #[token("FALSE")]
    KwFalse,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    /// `0x`/`0X`-prefixed unsigned hexadecimal literal.
    #[regex(r"0[xX][0-9A-Fa-f]+")]
    HexLiteral,

    /// Lexed as its own kind so it can be reported distinctly from other
    /// garbage; never reaches the parser.
    #[token("\t")]
    Tab,
}

impl TokenKind {
    /// `BEFORE`, `AFTER`, or `SOR` — legal only as the first token of
    /// the whole expression.
    pub fn is_scheduling_keyword(self) -> bool {
        matches!(self, Self::KwBefore | Self::KwAfter | Self::KwSor)
    }
}

/// Token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize the whole expression body up front.
pub fn lex(source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    for (result, span) in TokenKind::lexer(source).spanned() {
        match result {
            Ok(TokenKind::Tab) => return Err(Error::TabCharacter { span }),
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => return Err(Error::UnrecognizedToken { span }),
        }
    }
    Ok(tokens)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
