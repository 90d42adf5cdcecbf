use std::fmt::{self, Display};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1, anychar, digit1},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};
use tracing::trace;

/// Token classes seen by the expression parser.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ExprKind {
    /// Integer or decimal literal; the two aren't told apart here.
    Number,
    Id,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Eof,
    Error,
}

impl ExprKind {
    fn from_char(c: char) -> ExprKind {
        match c {
            '+' => ExprKind::Plus,
            '-' => ExprKind::Minus,
            '*' => ExprKind::Star,
            '/' => ExprKind::Slash,
            '(' => ExprKind::LParen,
            ')' => ExprKind::RParen,
            _ => ExprKind::Error,
        }
    }
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ExprKind::Number => "NUMBER",
            ExprKind::Id => "ID",
            ExprKind::Plus => "+",
            ExprKind::Minus => "-",
            ExprKind::Star => "*",
            ExprKind::Slash => "/",
            ExprKind::LParen => "(",
            ExprKind::RParen => ")",
            ExprKind::Eof => "EOF",
            ExprKind::Error => "ERROR",
        };
        write!(f, "{}", s)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ExprToken {
    pub kind: ExprKind,
    pub text: String,
}

impl ExprToken {
    pub fn new(kind: ExprKind, text: &str) -> Self {
        ExprToken {
            kind,
            text: text.to_owned(),
        }
    }

    /// A single-char operator, paren or error token.
    fn from_char(c: char) -> Self {
        let mut buf = [0; 4];
        ExprToken::new(ExprKind::from_char(c), c.encode_utf8(&mut buf))
    }

    /// The end-of-input sentinel.
    pub fn eof() -> Self {
        ExprToken::new(ExprKind::Eof, "")
    }
}

impl Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ExprKind::Eof => write!(f, "end of input"),
            ExprKind::Number | ExprKind::Id | ExprKind::Error => {
                write!(f, "{} {:?}", self.kind, self.text)
            }
            _ => write!(f, "'{}'", self.text),
        }
    }
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(tag("."), digit1))))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn token(input: &str) -> IResult<&str, ExprToken> {
    preceded(
        take_while(char::is_whitespace),
        alt((
            map(number, |s| ExprToken::new(ExprKind::Number, s)),
            map(identifier, |s| ExprToken::new(ExprKind::Id, s)),
            map(anychar, ExprToken::from_char),
        )),
    )(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<ExprToken>> {
    terminated(many0(token), take_while(char::is_whitespace))(input)
}

/// Cursor over the tokens of one expression.
///
/// Reading past the end keeps returning an `Eof` sentinel.
#[derive(Debug)]
pub struct ExprLexer {
    tokens: Vec<ExprToken>,
    pos: usize,
    eof: ExprToken,
}

impl ExprLexer {
    /// Lexes all of `text` up front. Chars that start no token become
    /// `Error` tokens for the parser to reject.
    pub fn new(text: &str) -> Self {
        // `token` takes any char, so `many0` only stops at end of input and
        // `rest` is empty. Anything left over is lexed one char at a time.
        let (rest, mut tokens) = tokens(text).unwrap_or((text, Vec::new()));
        tokens.extend(
            rest.chars()
                .filter(|c| !c.is_whitespace())
                .map(ExprToken::from_char),
        );
        trace!(tokens = tokens.len(), "expression lexed");
        ExprLexer {
            tokens,
            pos: 0,
            eof: ExprToken::eof(),
        }
    }

    /// The current token, without advancing.
    pub fn peek(&self) -> &ExprToken {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Returns the current token and advances past it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> ExprToken {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Tokens left before the sentinel.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn tokens(&self) -> &[ExprToken] {
        &self.tokens
    }
}
