use std::convert::TryFrom;
use std::fmt::{self, Debug, Display};
use std::mem;
use std::str::FromStr;

mod error;
pub use error::Error;
mod lexer;
pub use lexer::{ExprKind, ExprLexer, ExprToken};
mod parser;
pub use parser::{parse, MAX_NESTING};
mod walk;
pub use walk::{Event, Walk};

/// A binary arithmetic operator.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<ExprKind> for BinOp {
    type Error = ExprKind;

    fn try_from(kind: ExprKind) -> Result<Self, Self::Error> {
        match kind {
            ExprKind::Plus => Ok(BinOp::Add),
            ExprKind::Minus => Ok(BinOp::Sub),
            ExprKind::Star => Ok(BinOp::Mul),
            ExprKind::Slash => Ok(BinOp::Div),
            other => Err(other),
        }
    }
}

/// An arithmetic expression tree.
///
/// Every `BinaryOp` owns its operands; trees are built bottom-up and never
/// mutated afterwards. A chain like `1+1+...+1` nests one level per
/// operator, so nothing here recurses over the tree: comparison, cloning,
/// formatting and drop all go through [`Expr::walk`].
#[non_exhaustive]
pub enum Expr {
    /// A numeric literal, kept exactly as written.
    NumberLiteral { text: String },
    Identifier { name: String },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Expr::NumberLiteral { text: text.into() }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Walks the tree depth first, left to right.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Nodes in walk order.
    fn nodes(&self) -> impl Iterator<Item = &Expr> {
        self.walk().filter_map(|event| match event {
            Event::Enter(node, _) => Some(node),
            _ => None,
        })
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Length of the longest root-to-leaf path, counting both ends.
    pub fn depth(&self) -> usize {
        self.walk()
            .filter_map(|event| match event {
                Event::Enter(_, depth) => Some(depth + 1),
                _ => None,
            })
            .fold(0, usize::max)
    }

    /// Compares this node alone, ignoring operands.
    fn same_node(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::NumberLiteral { text: a }, Expr::NumberLiteral { text: b }) => a == b,
            (Expr::Identifier { name: a }, Expr::Identifier { name: b }) => a == b,
            (Expr::BinaryOp { op: a, .. }, Expr::BinaryOp { op: b, .. }) => a == b,
            _ => false,
        }
    }

    /// Moves operands that are themselves binary ops onto `stack`, leaving
    /// empty literals behind.
    fn detach_operands(&mut self, stack: &mut Vec<Expr>) {
        if let Expr::BinaryOp { left, right, .. } = self {
            for operand in [left, right].iter_mut() {
                if let Expr::BinaryOp { .. } = ***operand {
                    stack.push(mem::replace(&mut ***operand, Expr::number(String::new())));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_operands(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_operands(&mut stack);
        }
    }
}

/// Two trees are equal when their walks visit the same nodes in the same
/// order. Each binary op has exactly two operands, so the node sequence
/// fixes the shape.
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        let mut a = self.nodes();
        let mut b = other.nodes();
        loop {
            match (a.next(), b.next()) {
                (None, None) => return true,
                (Some(x), Some(y)) if x.same_node(y) => {}
                _ => return false,
            }
        }
    }
}

impl Eq for Expr {}

impl Clone for Expr {
    fn clone(&self) -> Self {
        // Leaves are pushed as they are reached; each binary op is rebuilt
        // from the top two entries once its right operand is done.
        let mut built: Vec<Expr> = Vec::new();
        for event in self.walk() {
            match event {
                Event::Enter(Expr::NumberLiteral { text }, _) => {
                    built.push(Expr::number(text.as_str()))
                }
                Event::Enter(Expr::Identifier { name }, _) => {
                    built.push(Expr::ident(name.as_str()))
                }
                Event::Exit(op, _) => {
                    let right = built.pop().expect("exit follows both operands");
                    let left = built.pop().expect("exit follows both operands");
                    built.push(Expr::binary(op, left, right));
                }
                Event::Enter(Expr::BinaryOp { .. }, _) | Event::Infix(..) => {}
            }
        }
        built.pop().expect("a walk builds exactly one tree")
    }
}

/// Same text as a derived `Debug`, without the `{:#?}` layout.
impl Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self.walk() {
            match event {
                Event::Enter(Expr::NumberLiteral { text }, _) => {
                    write!(f, "NumberLiteral {{ text: {:?} }}", text)?
                }
                Event::Enter(Expr::Identifier { name }, _) => {
                    write!(f, "Identifier {{ name: {:?} }}", name)?
                }
                Event::Enter(Expr::BinaryOp { op, .. }, _) => {
                    write!(f, "BinaryOp {{ op: {:?}, left: ", op)?
                }
                Event::Infix(..) => f.write_str(", right: ")?,
                Event::Exit(..) => f.write_str(" }")?,
            }
        }
        Ok(())
    }
}

/// Fully parenthesized infix form, e.g. `(1 + (2 * 3))`.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for event in self.walk() {
            match event {
                Event::Enter(Expr::NumberLiteral { text }, _) => f.write_str(text)?,
                Event::Enter(Expr::Identifier { name }, _) => f.write_str(name)?,
                Event::Enter(Expr::BinaryOp { .. }, _) => f.write_str("(")?,
                Event::Infix(op, _) => write!(f, " {} ", op)?,
                Event::Exit(..) => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
