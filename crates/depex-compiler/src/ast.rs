//! Parsed form of a dependency expression.

use depex_core::Guid;

/// A parsed dependency expression.
///
/// The parser only produces the scheduling variants (`Before`, `After`,
/// `Sor`) at the root, so "at most one scheduling operator, first
/// position only" holds for every value of this type by construction —
/// the emitter never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `BEFORE {guid}` — schedule this module before the named one.
    Before(Guid),
    /// `AFTER {guid}` — schedule this module after the named one.
    After(Guid),
    /// `SOR body` — schedule-on-request prefix over a boolean body.
    Sor(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    True,
    False,
    /// Availability of the named module.
    Module(Guid),
}
