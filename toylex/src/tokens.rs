use std::fmt::{self, Display};

/// Classes a token can fall into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Float,
    Int,
    Id,
    Keyword,
    /// Comparison, arithmetic and assignment operators.
    Op,
    LParen,
    RParen,
    Semi,
    Comma,
    /// A single character no other rule accepts.
    Error,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Float => "FLOAT",
            TokenKind::Int => "INT",
            TokenKind::Id => "ID",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Op => "OP",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Error => "ERROR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `pad` so width and alignment flags apply.
        f.pad(self.name())
    }
}

/// A token represents a classified, non-empty slice of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte offset of `text` within the source.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, offset: usize) -> Self {
        Token {
            kind,
            text: text.to_owned(),
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.text, self.offset)
    }
}
