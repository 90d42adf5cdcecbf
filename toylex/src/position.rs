/// Keep track of a byte position within a str, updating on successful
/// operations.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    pub input: &'a str,
    pub idx: usize,
}

impl<'a> Position<'a> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Position { input, idx: 0 }
    }

    /// Check if a string matches the current input starting at the current
    /// index. The index will be updated on match.
    pub fn match_str(&mut self, s: &str) -> bool {
        let end = self.idx + s.len();
        if self.input.get(self.idx..end) == Some(s) {
            self.idx = end;
            true
        } else {
            false
        }
    }

    /// Consume the next char if it satisfies `pred`.
    pub fn match_char<F>(&mut self, pred: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self.peek() {
            Some(c) if pred(c) => {
                self.idx += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// The char under the cursor, if any.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Input that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.input[self.idx..]
    }

    pub fn is_eof(&self) -> bool {
        self.idx >= self.input.len()
    }
}
