use std::error;
use std::fmt::{self, Display};

use crate::lexer::ExprToken;
use crate::parser::MAX_NESTING;

/// Why an expression could not be parsed. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factor was expected but the token can't start one.
    UnexpectedToken(ExprToken),
    /// A parenthesized expression wasn't followed by `)`.
    UnclosedParen(ExprToken),
    /// A complete expression was followed by more input.
    TrailingInput(ExprToken),
    /// A `(` opened past the nesting limit.
    TooDeep(ExprToken),
}

impl Error {
    /// The offending token.
    pub fn token(&self) -> &ExprToken {
        match self {
            Error::UnexpectedToken(tok)
            | Error::UnclosedParen(tok)
            | Error::TrailingInput(tok)
            | Error::TooDeep(tok) => tok,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnexpectedToken(ref tok) => write!(
                f,
                "expected a number, identifier or '(', found {}",
                tok
            ),
            Error::UnclosedParen(ref tok) => write!(f, "expected ')', found {}", tok),
            Error::TrailingInput(ref tok) => {
                write!(f, "unexpected input after expression: {}", tok)
            }
            Error::TooDeep(ref tok) => write!(
                f,
                "parentheses nested deeper than {}: {}",
                MAX_NESTING, tok
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ExprKind;

    #[test]
    fn messages() {
        let tests = vec![
            (
                Error::UnexpectedToken(ExprToken::eof()),
                "expected a number, identifier or '(', found end of input",
            ),
            (
                Error::UnclosedParen(ExprToken::new(ExprKind::Number, "4")),
                "expected ')', found NUMBER \"4\"",
            ),
            (
                Error::TrailingInput(ExprToken::new(ExprKind::RParen, ")")),
                "unexpected input after expression: ')'",
            ),
            (
                Error::TooDeep(ExprToken::new(ExprKind::LParen, "(")),
                "parentheses nested deeper than 256: '('",
            ),
        ];
        for (err, want) in tests {
            assert_eq!(err.message(), want);
            assert_ne!(err.token().kind, ExprKind::Error);
        }
    }
}
