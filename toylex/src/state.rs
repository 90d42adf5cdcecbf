use tracing::trace;

use crate::position::Position;
use crate::tokens::{Token, TokenKind};

/// `Ok` carries the state after a successful match, `Err` the state handed
/// back by a failed one.
pub type StateResult<T> = Result<T, T>;

/// Scanner state.
#[derive(Debug)]
pub struct State<'a> {
    /// Tokens emitted so far, in source order.
    tokens: Vec<Token>,
    cursor: Position<'a>,
}

impl<'a> State<'a> {
    pub fn new(input: &'a str) -> Self {
        State {
            tokens: Vec::new(),
            cursor: Position::new(input),
        }
    }

    /// Returns the emitted tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use toylex::{State, StateResult, TokenKind};
    ///
    /// fn ab(state: State) -> StateResult<State> {
    ///     state.emit(TokenKind::Id, |s| s.match_str("a").and_then(|s| s.match_str("b")))
    /// }
    /// fn space(state: State) -> StateResult<State> {
    ///     state.skip(|s| s.match_str(" "))
    /// }
    ///
    /// let state = State::new("ab ab");
    /// let toks = ab(state)
    ///     .and_then(space)
    ///     .and_then(ab)
    ///     .unwrap()
    ///     .tokens();
    /// assert_eq!(toks.len(), 2);
    /// assert_eq!(toks[0].offset, 0);
    /// assert_eq!(toks[1].offset, 3);
    /// ```
    pub fn tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Byte index of the cursor.
    pub fn offset(&self) -> usize {
        self.cursor.idx
    }

    /// Emits a token of `kind` covering whatever `f` consumed.
    pub fn emit<F>(self, kind: TokenKind, f: F) -> StateResult<Self>
    where
        F: FnOnce(Self) -> StateResult<Self>,
    {
        self.emit_with(|_| kind, f)
    }

    /// Like `emit`, but the kind is picked from the matched text.
    ///
    /// A failed or empty match rewinds the cursor to where it started, so
    /// the next rule sees the same input.
    pub fn emit_with<C, F>(self, classify: C, f: F) -> StateResult<Self>
    where
        C: FnOnce(&str) -> TokenKind,
        F: FnOnce(Self) -> StateResult<Self>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(mut state) => {
                let text = &start.input[start.idx..state.cursor.idx];
                if text.is_empty() {
                    return Err(state);
                }
                let kind = classify(text);
                trace!(kind = %kind, text, offset = start.idx, "emit");
                state.tokens.push(Token::new(kind, text, start.idx));
                Ok(state)
            }
            Err(mut state) => {
                state.cursor = start;
                Err(state)
            }
        }
    }

    /// Consumes whatever `f` matches without emitting a token.
    pub fn skip<F>(self, f: F) -> StateResult<Self>
    where
        F: FnOnce(Self) -> StateResult<Self>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(state) if state.cursor.idx > start.idx => Ok(state),
            Ok(mut state) | Err(mut state) => {
                state.cursor = start;
                Err(state)
            }
        }
    }

    /// Repeatedly applies some func to state until the first error. Zero
    /// matches is still a success.
    pub fn repeat<F>(self, f: F) -> StateResult<Self>
    where
        F: Fn(Self) -> StateResult<Self>,
    {
        let mut result = f(self);
        loop {
            match result {
                Ok(state) => result = f(state),
                Err(state) => return Ok(state),
            }
        }
    }

    /// Attempt to match the given string on input. State is updated only if the
    /// string successfully matches.
    pub fn match_str(mut self, s: &str) -> StateResult<Self> {
        if self.cursor.match_str(s) {
            Ok(self)
        } else {
            Err(self)
        }
    }

    /// Attempt to match a single char satisfying `pred`.
    pub fn match_char<F>(mut self, pred: F) -> StateResult<Self>
    where
        F: Fn(char) -> bool,
    {
        if self.cursor.match_char(pred) {
            Ok(self)
        } else {
            Err(self)
        }
    }
}
