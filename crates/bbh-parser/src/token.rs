use serde::Serialize;

/// All types of tokens.
///
/// Tokens are units of of bbcode tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// Tag head.
    Head(TagHead),

    /// Tag tail.
    Tail(TagTail),

    /// Plain text.
    Text { content: String },
}

/// Tag head.
///
/// `[$name=$attr]` or `[$name]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagHead {
    /// Tag name, always lowercase.
    pub name: String,

    /// Optional attribute, case preserved.
    pub attr: Option<String>,

    /// The original bracketed text, used when the tag can not be rendered.
    pub raw: String,
}

/// Tag tail.
///
/// `[/$name]` or `[/$name=$attr]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagTail {
    /// Tag name without the leading `/`, always lowercase.
    pub name: String,

    /// Optional attribute, case preserved.
    pub attr: Option<String>,

    /// The original bracketed text, used when the tag can not be rendered.
    pub raw: String,
}

impl Token {
    pub(crate) fn text(content: impl Into<String>) -> Self {
        Token::Text {
            content: content.into(),
        }
    }

    /// Text that stands for the token when it is not rendered as a tag.
    ///
    /// Plain text for [Token::Text], the original bracketed text for others.
    pub fn as_raw(&self) -> &str {
        match self {
            Token::Head(head) => head.raw.as_str(),
            Token::Tail(tail) => tail.raw.as_str(),
            Token::Text { content } => content.as_str(),
        }
    }
}
