//! Identifier validation with an explicit finite automaton.
//!
//! Accepts the language `[letter _][letter digit _]*`, where letters and
//! digits are taken in the Unicode sense. The automaton is walked one char
//! at a time; no pattern engine is involved.

/// States of the identifier automaton.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Dfa {
    /// Nothing read yet.
    Start,
    /// At least one valid char read. The only accepting state.
    Body,
    /// Dead state.
    Reject,
}

impl Dfa {
    fn step(self, c: char) -> Dfa {
        match self {
            Dfa::Start if c.is_alphabetic() || c == '_' => Dfa::Body,
            Dfa::Body if c.is_alphanumeric() || c == '_' => Dfa::Body,
            _ => Dfa::Reject,
        }
    }

    fn is_accepting(self) -> bool {
        self == Dfa::Body
    }
}

/// Decides whether a string is a valid identifier.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentifierAcceptor;

impl IdentifierAcceptor {
    pub fn accept(&self, s: &str) -> bool {
        let mut state = Dfa::Start;
        for c in s.chars() {
            state = state.step(c);
            if state == Dfa::Reject {
                return false;
            }
        }
        state.is_accepting()
    }
}

/// Shorthand for `IdentifierAcceptor.accept(s)`.
pub fn is_identifier(s: &str) -> bool {
    IdentifierAcceptor.accept(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts() {
        let tests = vec![
            ("x", true),
            ("_", true),
            ("__init__", true),
            ("x1", true),
            ("snake_case_42", true),
            ("CamelCase", true),
            ("ação", true),
            ("変数", true),
            ("", false),
            ("1x", false),
            ("9", false),
            ("a-b", false),
            ("a b", false),
            (" a", false),
            ("a ", false),
            ("$x", false),
            ("x.y", false),
        ];
        for (input, want) in tests {
            assert_eq!(is_identifier(input), want, "input: {:?}", input);
        }
    }

    #[test]
    fn start_state_is_not_accepting() {
        assert!(!Dfa::Start.is_accepting());
        assert_eq!(Dfa::Start.step('7'), Dfa::Reject);
        assert_eq!(Dfa::Body.step('7'), Dfa::Body);
        assert_eq!(Dfa::Reject.step('a'), Dfa::Reject);
    }
}
