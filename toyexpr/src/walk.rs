//! Depth-first traversal of expression trees with an explicit stack.

use crate::{BinOp, Expr};

/// One step of a left-to-right, depth-first walk. Depths count from 0 at
/// the root.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// A node, before any of its operands.
    Enter(&'a Expr, usize),
    /// Between the left and right operand of a binary op.
    Infix(BinOp, usize),
    /// After the right operand of a binary op.
    Exit(BinOp, usize),
}

/// Iterator returned by [`Expr::walk`].
///
/// Memory grows with the depth of the tree, the call stack does not.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<Event<'a>>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(root: &'a Expr) -> Self {
        Walk {
            stack: vec![Event::Enter(root, 0)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Event<'a>> {
        let event = self.stack.pop()?;
        if let Event::Enter(Expr::BinaryOp { op, left, right }, depth) = event {
            // Pushed in reverse of the order they come out.
            self.stack.push(Event::Exit(*op, depth));
            self.stack.push(Event::Enter(&**right, depth + 1));
            self.stack.push(Event::Infix(*op, depth));
            self.stack.push(Event::Enter(&**left, depth + 1));
        }
        Some(event)
    }
}
