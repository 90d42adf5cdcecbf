use std::convert::TryFrom;

use tracing::{debug, trace};

use crate::error::Error;
use crate::lexer::{ExprKind, ExprLexer};
use crate::{BinOp, Expr};

/// Parses `text` as an arithmetic expression.
///
/// ```text
/// expr   = term , { ( "+" | "-" ) , term } ;
/// term   = factor , { ( "*" | "/" ) , factor } ;
/// factor = NUMBER | ID | "(" , expr , ")" ;
/// ```
///
/// Operators of equal precedence fold to the left. The first violation
/// aborts the parse; no partial tree is returned. Parentheses may nest at
/// most [`MAX_NESTING`] deep.
pub fn parse(text: &str) -> Result<Expr, Error> {
    let parser = Parser {
        lexer: ExprLexer::new(text),
        nesting: 0,
    };
    let result = parser.parse();
    if let Err(ref err) = result {
        debug!(input = text, error = %err, "parse failed");
    }
    result
}

/// How many parentheses may be open at once. Each level costs a few stack
/// frames of `expr`/`term`/`factor`.
pub const MAX_NESTING: usize = 256;

struct Parser {
    lexer: ExprLexer,
    /// Currently open parentheses.
    nesting: usize,
}

impl Parser {
    fn parse(mut self) -> Result<Expr, Error> {
        let expr = self.expr()?;
        let tok = self.lexer.peek();
        if tok.kind != ExprKind::Eof {
            return Err(Error::TrailingInput(tok.clone()));
        }
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        trace!("expr");
        self.fold(&[BinOp::Add, BinOp::Sub], Self::term)
    }

    fn term(&mut self) -> Result<Expr, Error> {
        trace!("term");
        self.fold(&[BinOp::Mul, BinOp::Div], Self::factor)
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        let tok = self.lexer.peek();
        trace!(token = %tok, "factor");
        match tok.kind {
            ExprKind::Number => Ok(Expr::number(self.lexer.next().text)),
            ExprKind::Id => Ok(Expr::ident(self.lexer.next().text)),
            ExprKind::LParen => {
                if self.nesting == MAX_NESTING {
                    return Err(Error::TooDeep(tok.clone()));
                }
                self.lexer.next();
                self.nesting += 1;
                let inner = self.expr()?;
                self.nesting -= 1;
                let close = self.lexer.peek();
                if close.kind != ExprKind::RParen {
                    return Err(Error::UnclosedParen(close.clone()));
                }
                self.lexer.next();
                Ok(inner)
            }
            _ => Err(Error::UnexpectedToken(tok.clone())),
        }
    }

    /// Parses `operand { op operand }` for any `op` in `ops`, nesting to the
    /// left.
    fn fold<F>(&mut self, ops: &[BinOp], operand: F) -> Result<Expr, Error>
    where
        F: Fn(&mut Self) -> Result<Expr, Error>,
    {
        let mut node = operand(&mut *self)?;
        while let Some(op) = self.accept_op(ops) {
            let right = operand(&mut *self)?;
            node = Expr::binary(op, node, right);
        }
        Ok(node)
    }

    /// Consumes the current token if it is one of `ops`.
    fn accept_op(&mut self, ops: &[BinOp]) -> Option<BinOp> {
        let op = BinOp::try_from(self.lexer.peek().kind)
            .ok()
            .filter(|op| ops.contains(op))?;
        self.lexer.next();
        Some(op)
    }
}
