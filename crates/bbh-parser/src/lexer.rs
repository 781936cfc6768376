use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use crate::scanner::Scanner;
use crate::token::{TagHead, TagTail, Token};
use crate::{CLOSE, EQUAL, OPEN, SLASH};

/// Regex matching the text allowed between `[` and `]`.
static TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Check `tag`, the text between `[` and `]`, is a well formed tag or not.
///
/// An optional leading `/`, one or more letters, then an optional `=` with an
/// argument that is either unquoted or double quoted.
fn is_valid_tag(tag: &str) -> bool {
    TAG_RE
        .get_or_init(|| {
            Regex::new(r#"^/?[A-Za-z]+(?:=[^\]]*|="[^"]*")?$"#).expect("invalid tag regex")
        })
        .is_match(tag)
}

/// Lazy tokenizer over bbcode text.
///
/// Yields [Token]s in source order, adjacent text merged into one token. The
/// lexer only walks forward, construct a new one to scan again.
pub struct Lexer<'a> {
    /// Inner scanner.
    source: Scanner<'a>,

    /// Next token to hand out, before merging.
    lookahead: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(data: &'a str) -> Self {
        let mut lexer = Self {
            source: Scanner::new(data),
            lookahead: None,
        };
        lexer.lookahead = lexer.scan_token();
        lexer
    }

    /// Check there is any token left.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// Take the next token.
    ///
    /// # Panics
    ///
    /// When no token left. Callers shall check [Lexer::has_next] first.
    pub fn next_token(&mut self) -> Token {
        match self.next() {
            Some(token) => token,
            None => panic!("no more tokens"),
        }
    }

    /// Scan one token from the current position, text not merged.
    fn scan_token(&mut self) -> Option<Token> {
        if self.source.done() {
            return None;
        }

        let token = match self.source.curr() {
            Some(OPEN) => self.scan_head_or_tail(),
            _ => self.scan_text(),
        };
        Some(token)
    }

    /// Reached the first character of tag head or tail, which is exactly a `[`.
    fn scan_head_or_tail(&mut self) -> Token {
        let start = self.source.position();
        let end = match self.source.find(CLOSE) {
            Some(v) => v,
            // Never closes, the rest is all text.
            None => return Token::text(self.source.take_rest()),
        };

        // The start position + 1 to skip `[`, end position is on `]`.
        let tag = self.source.get_range(start + 1, end);
        if !is_valid_tag(tag) {
            // Only the `[` is consumed, so a later `[` before `]` still has
            // the chance to open a tag.
            trace!("invalid tag {tag:?} at {start}, fallback to text");
            self.source.bump();
            return Token::text(OPEN);
        }

        let raw = self.source.get_range(start, end + 1).to_owned();
        self.source.seek(end + 1);
        Self::collect_tag(tag, raw)
    }

    /// Build a [Token::Head] or [Token::Tail] from a validated tag.
    ///
    /// ```console
    /// [ / n a m e = a t t r ]
    ///   |-------------------|-> tag
    /// |-----------------------|-> raw
    /// ```
    fn collect_tag(tag: &str, raw: String) -> Token {
        let (name, attr) = match tag.split_once(EQUAL) {
            // Quotes around attr are kept as is.
            Some((name, attr)) => (name, Some(attr.to_owned())),
            None => (tag, None),
        };
        let name = name.to_ascii_lowercase();

        match name.strip_prefix(SLASH) {
            Some(name) => Token::Tail(TagTail {
                name: name.to_owned(),
                attr,
                raw,
            }),
            None => Token::Head(TagHead { name, attr, raw }),
        }
    }

    fn scan_text(&mut self) -> Token {
        match self.source.find(OPEN) {
            Some(end) => {
                // Reach the point where may have an open tag ahead.
                let text = self.source.get_range(self.source.position(), end);
                self.source.seek(end);
                Token::text(text)
            }
            None => Token::text(self.source.take_rest()),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut content = match self.lookahead.take()? {
            Token::Text { content } => content,
            token => {
                self.lookahead = self.scan_token();
                return Some(token);
            }
        };

        // Merge following text tokens.
        loop {
            match self.scan_token() {
                Some(Token::Text { content: more }) => content.push_str(&more),
                other => {
                    self.lookahead = other;
                    break;
                }
            }
        }
        Some(Token::Text { content })
    }
}
