//! Grammar productions.
//!
//! ```text
//! depex  ::= BEFORE guid | AFTER guid | SOR bool | bool
//! bool   ::= term ((AND | OR) term)*
//! term   ::= NOT term | factor
//! factor ::= '(' bool ')' | TRUE | FALSE | guid
//! guid   ::= '{' hex32 ',' hex16 ',' hex16 (',' hex8){7} '}'
//! ```
//!
//! `AND` and `OR` share one precedence level and associate left; only
//! parentheses group. The scheduling keywords are matched here exactly
//! once, before anything else has been consumed, which is what makes
//! their first-token-only rule structural.

use depex_core::Guid;

use super::Parser;
use crate::Error;
use crate::ast::Expr;
use crate::token::TokenKind;

/// Maximum hex digits per GUID field: one 32-bit, two 16-bit, eight 8-bit.
const FIELD_DIGITS: [usize; 11] = [8, 4, 4, 2, 2, 2, 2, 2, 2, 2, 2];

impl Parser<'_> {
    pub(super) fn parse_depex(&mut self) -> Result<Expr, Error> {
        match self.current() {
            Some(TokenKind::KwBefore) => {
                self.bump();
                Ok(Expr::Before(self.parse_guid()?))
            }
            Some(TokenKind::KwAfter) => {
                self.bump();
                Ok(Expr::After(self.parse_guid()?))
            }
            Some(TokenKind::KwSor) => {
                self.bump();
                Ok(Expr::Sor(Box::new(self.parse_bool()?)))
            }
            _ => self.parse_bool(),
        }
    }

    fn parse_bool(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_term()?;

        loop {
            let op = match self.current() {
                Some(op @ (TokenKind::KwAnd | TokenKind::KwOr)) => op,
                _ => break,
            };
            self.bump();

            let rhs = self.parse_term()?;
            lhs = match op {
                TokenKind::KwAnd => Expr::And(Box::new(lhs), Box::new(rhs)),
                _ => Expr::Or(Box::new(lhs), Box::new(rhs)),
            };
        }

        Ok(lhs)
    }

    fn parse_term(&mut self) -> Result<Expr, Error> {
        if self.eat(TokenKind::KwNot) {
            return Ok(Expr::Not(Box::new(self.parse_term()?)));
        }
        self.parse_factor()
    }

    fn parse_factor(&mut self) -> Result<Expr, Error> {
        match self.current() {
            Some(TokenKind::ParenOpen) => {
                self.bump();
                let inner = self.parse_bool()?;
                if !self.eat(TokenKind::ParenClose) {
                    return Err(Error::Syntax {
                        span: self.current_span(),
                    });
                }
                Ok(inner)
            }
            Some(TokenKind::KwTrue) => {
                self.bump();
                Ok(Expr::True)
            }
            Some(TokenKind::KwFalse) => {
                self.bump();
                Ok(Expr::False)
            }
            Some(TokenKind::BraceOpen) => Ok(Expr::Module(self.parse_guid()?)),
            Some(kind) if kind.is_scheduling_keyword() => Err(Error::IllegalLeadingOperator {
                span: self.current_span(),
            }),
            _ => Err(Error::Syntax {
                span: self.current_span(),
            }),
        }
    }

    /// Parse a `{...}` GUID literal.
    ///
    /// Exactly eleven comma-separated hex fields with capped digit
    /// counts. Any shape violation — wrong field count, oversized field,
    /// missing brace — aborts the whole compilation; a corrupt literal
    /// means corrupt input, so no partial output is produced.
    fn parse_guid(&mut self) -> Result<Guid, Error> {
        let start = self.current_span().start;
        if !self.eat(TokenKind::BraceOpen) {
            return Err(self.malformed_guid(start));
        }

        let mut fields = [0u32; 11];
        for (index, max_digits) in FIELD_DIGITS.into_iter().enumerate() {
            if index > 0 && !self.eat(TokenKind::Comma) {
                return Err(self.malformed_guid(start));
            }
            fields[index] = self.parse_hex_field(max_digits, start)?;
        }

        if !self.eat(TokenKind::BraceClose) {
            return Err(self.malformed_guid(start));
        }

        Ok(Guid::new(
            fields[0],
            fields[1] as u16,
            fields[2] as u16,
            [
                fields[3] as u8,
                fields[4] as u8,
                fields[5] as u8,
                fields[6] as u8,
                fields[7] as u8,
                fields[8] as u8,
                fields[9] as u8,
                fields[10] as u8,
            ],
        ))
    }

    fn parse_hex_field(&mut self, max_digits: usize, guid_start: usize) -> Result<u32, Error> {
        if self.current() != Some(TokenKind::HexLiteral) {
            return Err(self.malformed_guid(guid_start));
        }

        let digits = &self.current_text()[2..]; // past the 0x/0X prefix
        if digits.len() > max_digits {
            return Err(self.malformed_guid(guid_start));
        }

        let value = u32::from_str_radix(digits, 16).expect("lexer produced hex digits");
        self.bump();
        Ok(value)
    }

    /// Malformed-guid error spanning from the opening brace to wherever
    /// the shape broke down.
    fn malformed_guid(&self, start: usize) -> Error {
        Error::MalformedGuid {
            span: start..self.current_span().end,
        }
    }
}
