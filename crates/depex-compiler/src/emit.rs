//! Postfix emission over the parsed expression tree.
//!
//! Post-order over the left-associative tree yields operands in source
//! order with each operator immediately after its operands — the same
//! byte stream a flat-precedence operator-stack scan of the text would
//! produce, with parentheses already erased by tree shape.

use depex_bytecode::{DepexStream, Opcode, StreamError};

use crate::ast::Expr;

/// Emit a terminated stream for a parsed expression.
pub fn emit(expr: &Expr) -> Result<DepexStream, StreamError> {
    let mut stream = DepexStream::new();
    emit_expr(expr, &mut stream);
    stream.finish()?;
    Ok(stream)
}

fn emit_expr(expr: &Expr, out: &mut DepexStream) {
    match expr {
        // Scheduling directives carry their GUID inline, without PUSH
        Expr::Before(guid) => out.op_with_guid(Opcode::Before, guid),
        Expr::After(guid) => out.op_with_guid(Opcode::After, guid),
        // SOR prefixes its body rather than following it
        Expr::Sor(body) => {
            out.op(Opcode::Sor);
            emit_expr(body, out);
        }
        Expr::And(lhs, rhs) => {
            emit_expr(lhs, out);
            emit_expr(rhs, out);
            out.op(Opcode::And);
        }
        Expr::Or(lhs, rhs) => {
            emit_expr(lhs, out);
            emit_expr(rhs, out);
            out.op(Opcode::Or);
        }
        Expr::Not(inner) => {
            emit_expr(inner, out);
            out.op(Opcode::Not);
        }
        Expr::True => out.op(Opcode::True),
        Expr::False => out.op(Opcode::False),
        Expr::Module(guid) => out.op_with_guid(Opcode::Push, guid),
    }
}
