//! Lexical analysis for a toy language: a rule-ordered tokenizer and an
//! identifier automaton.

mod ident;
mod position;
mod state;
mod tokenizer;
mod tokens;

pub use ident::{is_identifier, IdentifierAcceptor};
pub use position::Position;
pub use state::{State, StateResult};
pub use tokenizer::{tokenize, Tokenizer, KEYWORDS};
pub use tokens::{Token, TokenKind};
