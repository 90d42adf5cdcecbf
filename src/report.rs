//! Plain-text reports for token streams and identifier checks.

use toylex::{is_identifier, Token};

/// One line per token: zero-padded byte offset, kind padded to eight
/// columns, then the token text.
pub fn render_tokens(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return "no tokens found\n".to_owned();
    }
    tokens
        .iter()
        .map(|tok| {
            if tok.is_error() {
                format!("{:04}: ERROR -> {}\n", tok.offset, tok.text)
            } else {
                format!("{:04}: {:<8} -> {}\n", tok.offset, tok.kind, tok.text)
            }
        })
        .collect()
}

/// `ACCEPTED` or `REJECTED`, ignoring surrounding whitespace in `input`.
pub fn identifier_verdict(input: &str) -> &'static str {
    if is_identifier(input.trim()) {
        "ACCEPTED"
    } else {
        "REJECTED"
    }
}
