use std::collections::HashSet;

use tracing::debug;

use crate::state::{State, StateResult};
use crate::tokens::{Token, TokenKind};

/// Reserved words recognized by the default tokenizer.
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "return", "int", "float", "for", "break", "continue",
];

/// Splits source text into classified tokens.
///
/// At every position the rules are tried in a fixed order and the first one
/// that matches wins: float, int, identifier/keyword, two-char operator,
/// one-char operator, punctuation, whitespace, then any single char as an
/// error token. Whitespace is consumed but never emitted.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    keywords: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::with_keywords(KEYWORDS.iter().copied())
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tokenizer that reclassifies `keywords` instead of the
    /// default reserved words.
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Tokenizer {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Tokenizes the whole of `source`. Never fails; chars no rule accepts
    /// come back as `TokenKind::Error` tokens.
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut state = State::new(source);
        while !state.is_eof() {
            state = self.scan(state);
        }
        let tokens = state.tokens();
        debug!(
            len = source.len(),
            tokens = tokens.len(),
            errors = tokens.iter().filter(|t| t.is_error()).count(),
            "tokenized"
        );
        tokens
    }

    /// Consumes exactly one token's worth of input.
    fn scan<'a>(&self, state: State<'a>) -> State<'a> {
        float(state)
            .or_else(int)
            .or_else(|s| self.word(s))
            .or_else(double_op)
            .or_else(single_op)
            .or_else(punctuation)
            .or_else(whitespace)
            .unwrap_or_else(unknown)
    }

    fn word<'a>(&self, state: State<'a>) -> StateResult<State<'a>> {
        state.emit_with(
            |text| {
                if self.is_keyword(text) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Id
                }
            },
            |s| {
                s.match_char(is_word_start)
                    .and_then(|s| s.repeat(|s| s.match_char(is_word_continue)))
            },
        )
    }
}

/// Tokenizes `source` with the default reserved words.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::default().tokenize(source)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn digits(state: State) -> StateResult<State> {
    state
        .match_char(is_digit)
        .and_then(|s| s.repeat(|s| s.match_char(is_digit)))
}

fn float(state: State) -> StateResult<State> {
    state.emit(TokenKind::Float, |s| {
        digits(s).and_then(|s| s.match_str(".")).and_then(digits)
    })
}

fn int(state: State) -> StateResult<State> {
    state.emit(TokenKind::Int, digits)
}

fn double_op(state: State) -> StateResult<State> {
    state.emit(TokenKind::Op, |s| {
        s.match_str("==")
            .or_else(|s| s.match_str("!="))
            .or_else(|s| s.match_str("<="))
            .or_else(|s| s.match_str(">="))
    })
}

fn single_op(state: State) -> StateResult<State> {
    state.emit(TokenKind::Op, |s| {
        s.match_char(|c| matches!(c, '+' | '-' | '*' | '/' | '='))
    })
}

fn punctuation(state: State) -> StateResult<State> {
    state
        .emit(TokenKind::LParen, |s| s.match_str("("))
        .or_else(|s| s.emit(TokenKind::RParen, |s| s.match_str(")")))
        .or_else(|s| s.emit(TokenKind::Semi, |s| s.match_str(";")))
        .or_else(|s| s.emit(TokenKind::Comma, |s| s.match_str(",")))
}

fn whitespace(state: State) -> StateResult<State> {
    state.skip(|s| {
        s.match_char(is_space)
            .and_then(|s| s.repeat(|s| s.match_char(is_space)))
    })
}

/// Fallback: one char of any kind. Only called when input remains.
fn unknown(state: State) -> State {
    match state.emit(TokenKind::Error, |s| s.match_char(|_| true)) {
        Ok(state) | Err(state) => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(toks: &[Token]) -> Vec<TokenKind> {
        toks.iter().map(Token::kind).collect()
    }

    fn texts(toks: &[Token]) -> Vec<&str> {
        toks.iter().map(Token::as_str).collect()
    }

    #[test]
    fn empty_source() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn assignment_statement() {
        let toks = tokenize("x1 = 3.14;");
        assert_eq!(
            kinds(&toks),
            vec![TokenKind::Id, TokenKind::Op, TokenKind::Float, TokenKind::Semi]
        );
        assert_eq!(texts(&toks), vec!["x1", "=", "3.14", ";"]);
        assert_eq!(
            toks.iter().map(|t| t.offset).collect::<Vec<_>>(),
            vec![0, 3, 5, 9]
        );
    }

    #[test]
    fn keywords_are_reclassified() {
        let toks = tokenize("if x");
        assert_eq!(kinds(&toks), vec![TokenKind::Keyword, TokenKind::Id]);

        // Only exact matches count.
        let toks = tokenize("iffy returns int_");
        assert_eq!(
            kinds(&toks),
            vec![TokenKind::Id, TokenKind::Id, TokenKind::Id]
        );
    }

    #[test]
    fn unknown_char_is_error_token() {
        let toks = tokenize("@");
        assert_eq!(toks, vec![Token::new(TokenKind::Error, "@", 0)]);
    }

    #[test]
    fn scanning_continues_after_errors() {
        let toks = tokenize("a @ # b");
        assert_eq!(
            kinds(&toks),
            vec![TokenKind::Id, TokenKind::Error, TokenKind::Error, TokenKind::Id]
        );
        assert_eq!(texts(&toks), vec!["a", "@", "#", "b"]);
    }

    #[test]
    fn operators_prefer_two_chars() {
        let toks = tokenize("a==b != c<=d>=e<f");
        assert_eq!(
            texts(&toks),
            vec!["a", "==", "b", "!=", "c", "<=", "d", ">=", "e", "<", "f"]
        );
        // A lone `<` or `!` is not an operator on its own.
        assert_eq!(toks[9].kind, TokenKind::Error);
        assert_eq!(tokenize("!")[0].kind, TokenKind::Error);
        assert_eq!(
            kinds(&tokenize("===")),
            vec![TokenKind::Op, TokenKind::Op]
        );
    }

    #[test]
    fn numbers() {
        let tests = vec![
            ("42", vec![(TokenKind::Int, "42")]),
            ("3.14", vec![(TokenKind::Float, "3.14")]),
            (
                "1.",
                vec![(TokenKind::Int, "1"), (TokenKind::Error, ".")],
            ),
            (
                ".5",
                vec![(TokenKind::Error, "."), (TokenKind::Int, "5")],
            ),
            (
                "1.2.3",
                vec![
                    (TokenKind::Float, "1.2"),
                    (TokenKind::Error, "."),
                    (TokenKind::Int, "3"),
                ],
            ),
            ("12ab", vec![(TokenKind::Int, "12"), (TokenKind::Id, "ab")]),
        ];
        for (input, want) in tests {
            let toks = tokenize(input);
            let got: Vec<_> = toks.iter().map(|t| (t.kind, t.as_str())).collect();
            assert_eq!(got, want, "input: {:?}", input);
        }
    }

    #[test]
    fn punctuation_kinds() {
        assert_eq!(
            kinds(&tokenize("f(a, b);")),
            vec![
                TokenKind::Id,
                TokenKind::LParen,
                TokenKind::Id,
                TokenKind::Comma,
                TokenKind::Id,
                TokenKind::RParen,
                TokenKind::Semi,
            ]
        );
    }

    #[test]
    fn multibyte_chars_keep_byte_offsets() {
        let toks = tokenize("é x");
        assert_eq!(toks[0], Token::new(TokenKind::Error, "é", 0));
        assert_eq!(toks[1], Token::new(TokenKind::Id, "x", 3));
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        // Arabic-Indic one and two, two bytes each.
        let toks = tokenize("\u{661}\u{662} 7");
        assert_eq!(
            toks,
            vec![
                Token::new(TokenKind::Error, "\u{661}", 0),
                Token::new(TokenKind::Error, "\u{662}", 2),
                Token::new(TokenKind::Int, "7", 5),
            ]
        );
    }

    #[test]
    fn custom_keywords() {
        let tokenizer = Tokenizer::with_keywords(vec!["let", "fn"]);
        assert!(tokenizer.is_keyword("let"));
        assert!(!tokenizer.is_keyword("if"));
        assert_eq!(
            kinds(&tokenizer.tokenize("let if")),
            vec![TokenKind::Keyword, TokenKind::Id]
        );
    }

    #[test]
    fn default_keywords() {
        let tokenizer = Tokenizer::new();
        for kw in KEYWORDS {
            assert!(tokenizer.is_keyword(kw), "keyword: {}", kw);
        }
        assert!(!tokenizer.is_keyword("elif"));
    }
}
