//! A small front-end for a toy language.
//!
//! Two independent pipelines live here. [`tokenize`] turns source text into
//! classified tokens for display, and [`parse`] turns an arithmetic
//! expression into an [`Expr`] tree. They share nothing; the expression
//! parser runs its own lexer.

use anyhow::{Context, Result};
use tracing::debug;

pub mod printer;
pub mod report;

pub use toyexpr::{parse, BinOp, Error as SyntaxError, Expr, ExprKind, ExprLexer, ExprToken};
pub use toylex::{
    is_identifier, tokenize, IdentifierAcceptor, Token, TokenKind, Tokenizer, KEYWORDS,
};

/// Parses `text` and renders the tree the way [`printer::render_tree`]
/// does.
pub fn parse_tree(text: &str) -> Result<String> {
    let expr = parse(text).with_context(|| format!("invalid expression {:?}", text))?;
    debug!(nodes = expr.size(), depth = expr.depth(), "parsed expression");
    Ok(printer::render_tree(&expr))
}

/// Tokenizes `source` with the default reserved words and renders the
/// listing the way [`report::render_tokens`] does.
pub fn token_listing(source: &str) -> String {
    report::render_tokens(&tokenize(source))
}
