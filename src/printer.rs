//! Indented tree rendering for expressions.

use std::fmt::{self, Display};

use toyexpr::{Event, Expr};

/// Displays an expression as an indented tree, one node per line, two
/// spaces per level. Operators come before their left then right operand.
///
/// ```
/// use toyfront::{parse, printer::Tree};
///
/// let expr = parse("a + 2").unwrap();
/// assert_eq!(Tree(&expr).to_string(), "BINOP +\n  ID: a\n  NUMBER: 2\n");
/// ```
pub struct Tree<'a>(pub &'a Expr);

impl<'a> Display for Tree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self.0.walk() {
            if let Event::Enter(node, depth) = event {
                write_node(f, node, depth)?;
            }
        }
        Ok(())
    }
}

/// Writes one line for `node`; its operands get their own lines.
fn write_node(f: &mut fmt::Formatter, node: &Expr, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match node {
        Expr::BinaryOp { op, .. } => writeln!(f, "{}BINOP {}", pad, op),
        Expr::NumberLiteral { text } => writeln!(f, "{}NUMBER: {}", pad, text),
        Expr::Identifier { name } => writeln!(f, "{}ID: {}", pad, name),
        other => writeln!(f, "{}UNKNOWN_NODE: {}", pad, other),
    }
}

pub fn render_tree(expr: &Expr) -> String {
    Tree(expr).to_string()
}
