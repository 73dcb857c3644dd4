//! Parser acceptance, tree shape, and rejection tests.

use depex_core::Guid;

use super::parse;
use crate::Error;
use crate::ast::Expr;

const GUID: &str = "{0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB}";

fn guid() -> Guid {
    Guid::new(0x1, 0x2, 0x3, [0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB])
}

fn and(lhs: Expr, rhs: Expr) -> Expr {
    Expr::And(Box::new(lhs), Box::new(rhs))
}

fn or(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Or(Box::new(lhs), Box::new(rhs))
}

fn not(inner: Expr) -> Expr {
    Expr::Not(Box::new(inner))
}

#[test]
fn literals() {
    assert_eq!(parse("TRUE"), Ok(Expr::True));
    assert_eq!(parse("FALSE"), Ok(Expr::False));
}

#[test]
fn guid_atom() {
    assert_eq!(parse(GUID), Ok(Expr::Module(guid())));
}

#[test]
fn operators_share_one_precedence_level_and_associate_left() {
    assert_eq!(
        parse("TRUE AND FALSE OR TRUE"),
        Ok(or(and(Expr::True, Expr::False), Expr::True))
    );
    assert_eq!(
        parse("TRUE OR FALSE AND TRUE"),
        Ok(and(or(Expr::True, Expr::False), Expr::True))
    );
}

#[test]
fn parentheses_group() {
    assert_eq!(
        parse("TRUE AND (FALSE OR TRUE)"),
        Ok(and(Expr::True, or(Expr::False, Expr::True)))
    );
    assert_eq!(parse("((TRUE))"), Ok(Expr::True));
}

#[test]
fn not_chains_and_binds_the_factor() {
    assert_eq!(parse("NOT NOT TRUE"), Ok(not(not(Expr::True))));
    assert_eq!(
        parse("NOT TRUE AND FALSE"),
        Ok(and(not(Expr::True), Expr::False))
    );
    assert_eq!(
        parse("NOT (TRUE AND FALSE)"),
        Ok(not(and(Expr::True, Expr::False)))
    );
}

#[test]
fn scheduling_operators_at_the_root() {
    assert_eq!(
        parse(&format!("BEFORE {GUID}")),
        Ok(Expr::Before(guid()))
    );
    assert_eq!(parse(&format!("AFTER {GUID}")), Ok(Expr::After(guid())));
    assert_eq!(
        parse("SOR TRUE AND FALSE"),
        Ok(Expr::Sor(Box::new(and(Expr::True, Expr::False))))
    );
}

#[test]
fn whole_input_must_be_consumed() {
    assert_eq!(
        parse("TRUE FALSE"),
        Err(Error::Syntax { span: 5..10 })
    );
    assert_eq!(parse("TRUE)"), Err(Error::Syntax { span: 4..5 }));
    assert!(matches!(
        parse(&format!("BEFORE {GUID} AND TRUE")),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(parse("(TRUE"), Err(Error::Syntax { span: 5..5 }));
    assert!(parse("(TRUE AND (FALSE)").is_err());
}

#[test]
fn scheduling_operator_anywhere_else_is_illegal() {
    assert_eq!(
        parse("TRUE AND SOR"),
        Err(Error::IllegalLeadingOperator { span: 9..12 })
    );
    assert_eq!(
        parse("SOR SOR TRUE"),
        Err(Error::IllegalLeadingOperator { span: 4..7 })
    );
    assert_eq!(
        parse("TRUE SOR"),
        Err(Error::IllegalLeadingOperator { span: 5..8 })
    );
    assert!(matches!(
        parse(&format!("BEFORE {GUID} AFTER {GUID}")),
        Err(Error::IllegalLeadingOperator { .. })
    ));
    assert!(matches!(
        parse(&format!("NOT BEFORE {GUID}")),
        Err(Error::IllegalLeadingOperator { .. })
    ));
}

#[test]
fn guid_field_count_is_exactly_eleven() {
    // ten fields
    assert!(matches!(
        parse("{0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA}"),
        Err(Error::MalformedGuid { .. })
    ));
    // twelve fields
    assert!(matches!(
        parse("{0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB, 0xC}"),
        Err(Error::MalformedGuid { .. })
    ));
    assert!(matches!(parse("{}"), Err(Error::MalformedGuid { .. })));
}

#[test]
fn guid_field_widths_are_capped() {
    // nine digits in the 32-bit field
    assert!(matches!(
        parse("{0x123456789, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB}"),
        Err(Error::MalformedGuid { .. })
    ));
    // five digits in a 16-bit field
    assert!(matches!(
        parse("{0x1, 0x23456, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB}"),
        Err(Error::MalformedGuid { .. })
    ));
    // three digits in an 8-bit field
    assert!(matches!(
        parse("{0x1, 0x2, 0x3, 0x456, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB}"),
        Err(Error::MalformedGuid { .. })
    ));
}

#[test]
fn unterminated_guid_is_malformed() {
    assert!(matches!(
        parse("{0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB"),
        Err(Error::MalformedGuid { .. })
    ));
}

#[test]
fn scheduling_operand_must_be_a_guid_literal() {
    assert!(matches!(
        parse("BEFORE TRUE"),
        Err(Error::MalformedGuid { .. })
    ));
    assert!(matches!(parse("AFTER"), Err(Error::MalformedGuid { .. })));
}

#[test]
fn empty_input_is_an_empty_expression() {
    assert_eq!(parse(""), Err(Error::EmptyExpression));
    assert_eq!(parse("  \r\n "), Err(Error::EmptyExpression));
}
