//! Recursive-descent parser for dependency expressions.
//!
//! The grammar is LL(1) over the token stream: every alternative is
//! distinguished by its first token and the binary-operator tails are
//! iterative, so a single forward scan suffices. No backtracking, no
//! saved cursors.

mod grammar;

#[cfg(test)]
mod grammar_tests;

use crate::Error;
use crate::ast::Expr;
use crate::token::{Span, Token, TokenKind, lex, token_text};

/// Parse a complete expression body.
///
/// Succeeds only if the whole input is consumed. Used by
/// [`validate`](crate::validate) for its verdict alone and by the
/// compile path for the tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = lex(source)?;
    if tokens.is_empty() {
        return Err(Error::EmptyExpression);
    }

    let mut parser = Parser::new(source, tokens);
    let expr = parser.parse_depex()?;
    parser.expect_eof()?;
    Ok(expr)
}

pub(crate) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    /// Current position in `tokens`. Monotonically increases.
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Current token kind, `None` at end of input.
    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Span of the current token; empty end-of-input span when exhausted.
    pub(super) fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.clone(),
            None => self.source.len()..self.source.len(),
        }
    }

    /// Source text of the current token. Only valid while not at EOF.
    pub(super) fn current_text(&self) -> &'src str {
        token_text(self.source, &self.tokens[self.pos])
    }

    pub(super) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consume the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current() == Some(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// The whole expression must be consumed; classify whatever is left.
    fn expect_eof(&self) -> Result<(), Error> {
        match self.current() {
            None => Ok(()),
            Some(kind) if kind.is_scheduling_keyword() => Err(Error::IllegalLeadingOperator {
                span: self.current_span(),
            }),
            Some(_) => Err(Error::Syntax {
                span: self.current_span(),
            }),
        }
    }
}
