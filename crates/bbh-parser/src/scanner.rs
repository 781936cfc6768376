/// Scanner on a string.
///
/// Provide convienient APIs on walking through the source by byte offset.
/// All delimiters searched here are ascii, so every offset it hands out is on a
/// char boundary.
pub(crate) struct Scanner<'a> {
    /// Source text.
    source: &'a str,

    /// Current position.
    position: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(source: &'a str) -> Scanner<'a> {
        Self {
            source,
            position: 0,
        }
    }

    /// Check the scanner process reached the end or not.
    pub fn done(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Get character at the current position.
    pub fn curr(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Find the first [ch] at or after the current position, without advancing.
    pub fn find(&self, ch: char) -> Option<usize> {
        self.source[self.position..]
            .find(ch)
            .map(|offset| self.position + offset)
    }

    /// Move the position forward by the length of the current character.
    pub fn bump(&mut self) {
        if let Some(ch) = self.curr() {
            self.position += ch.len_utf8();
        }
    }

    /// Move the position to [position], clamped to the end of source.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.source.len());
    }

    /// Get the text from [start] to [end], excluding end pos.
    ///
    /// The caller must ensure sizes not out of range.
    pub fn get_range(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Get the text from current position to the end, and finish scanning.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = &self.source[self.position..];
        self.position = self.source.len();
        rest
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk() {
        let mut scanner = Scanner::new("ab[c]");
        assert_eq!(scanner.curr(), Some('a'));
        assert_eq!(scanner.find('['), Some(2));
        scanner.bump();
        assert_eq!(scanner.curr(), Some('b'));
        scanner.seek(scanner.find(']').unwrap());
        assert_eq!(scanner.get_range(2, scanner.position() + 1), "[c]");
        scanner.bump();
        assert!(scanner.done());
        assert_eq!(scanner.curr(), None);
    }

    #[test]
    fn test_take_rest() {
        let mut scanner = Scanner::new("x[unterminated");
        scanner.bump();
        assert_eq!(scanner.take_rest(), "[unterminated");
        assert!(scanner.done());
        assert_eq!(scanner.take_rest(), "");
    }

    #[test]
    fn test_multibyte() {
        let mut scanner = Scanner::new("萌[b]");
        scanner.bump();
        assert_eq!(scanner.position(), "萌".len());
        assert_eq!(scanner.curr(), Some('['));
    }
}
