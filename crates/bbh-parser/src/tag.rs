//! Tag behaviors.
//!
//! A [Tag] decides what html a bbcode tag turns into. The transform engine
//! looks tags up by name in a [Registry](crate::Registry) and calls the
//! methods here while walking the token stream.

use bbh_html::{escape_attribute, escape_text};

/// The trait `Tag` defines how one kind of bbcode tag renders into html.
///
/// For a nesting tag the engine calls [Tag::start_tag] on the head, renders
/// the children as usual, then calls [Tag::end_tag] on the matching tail.
///
/// A non-nesting tag captures everything up to its tail as raw text, other
/// tags included, and hands it to [Tag::content]. The output of
/// [Tag::end_tag] is ignored in that case, so [Tag::content] shall produce
/// the complete element.
pub trait Tag: Send + Sync {
    /// Whether subtags inside this tag are parsed.
    fn nests(&self) -> bool {
        true
    }

    /// Html to emit on the tag head, if any.
    fn start_tag(&self, name: &str, attr: Option<&str>) -> Option<String>;

    /// Receive the captured content of a non-nesting tag.
    ///
    /// `text` is raw, not escaped yet. Defaults to the escaped text.
    fn content(&self, text: &str) -> String {
        escape_text(text)
    }

    /// Html to emit on the tag tail, if any.
    fn end_tag(&self, name: &str, attr: Option<&str>) -> Option<String>;
}

/// Tag wrapping its children in a fixed html element.
///
/// `[b]x[/b]` with element `b` renders `<b>x</b>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleTag {
    html_start: String,
    html_end: String,
}

impl SimpleTag {
    /// Construct with the html element name.
    pub fn new(element: &str) -> Self {
        Self {
            html_start: format!("<{element}>"),
            html_end: format!("</{element}>"),
        }
    }
}

impl Tag for SimpleTag {
    fn start_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        Some(self.html_start.clone())
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        Some(self.html_end.clone())
    }
}

/// Tag `[url=$URL]$DATA[/url]`. Url links.
///
/// Without an attribute the link has no `href`.
#[derive(Clone, Debug, Default)]
pub struct LinkTag;

impl Tag for LinkTag {
    fn start_tag(&self, _name: &str, attr: Option<&str>) -> Option<String> {
        let html = match attr {
            Some(url) => format!(r#"<a href="{}" rel="nofollow">"#, escape_attribute(url)),
            None => String::from(r#"<a rel="nofollow">"#),
        };
        Some(html)
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        Some(String::from("</a>"))
    }
}

/// Tag `[img]$URL[/img]`. Image.
#[derive(Clone, Debug, Default)]
pub struct ImageTag;

impl Tag for ImageTag {
    fn nests(&self) -> bool {
        false
    }

    fn start_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }

    fn content(&self, text: &str) -> String {
        format!(r#"<img src="{}">"#, escape_attribute(text))
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }
}

/// Tag `[quote]$DATA[/quote]` or `[quote=$AUTHOR]$DATA[/quote]`. Quoted text.
///
/// The author, if any, renders as an attribution line before the quote.
#[derive(Clone, Debug, Default)]
pub struct QuoteTag;

impl Tag for QuoteTag {
    fn start_tag(&self, _name: &str, attr: Option<&str>) -> Option<String> {
        let quote = r#"<blockquote class="quote">"#;
        let html = match attr {
            Some(author) => format!(
                r#"<div class="quote-attribution">{} wrote:</div>{quote}"#,
                escape_text(author)
            ),
            None => String::from(quote),
        };
        Some(html)
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        Some(String::from("</blockquote>"))
    }
}

/// Tag `[pre]$DATA[/pre]`. Preformatted text, subtags are kept as text.
#[derive(Clone, Debug, Default)]
pub struct PreTag;

impl Tag for PreTag {
    fn nests(&self) -> bool {
        false
    }

    fn start_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }

    fn content(&self, text: &str) -> String {
        format!("<pre>{}</pre>", escape_text(text))
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }
}

/// Tag `[code]$DATA[/code]`. Code block, subtags are kept as text.
#[derive(Clone, Debug, Default)]
pub struct CodeTag;

impl Tag for CodeTag {
    fn nests(&self) -> bool {
        false
    }

    fn start_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }

    fn content(&self, text: &str) -> String {
        format!("<pre><code>{}</code></pre>", escape_text(text))
    }

    fn end_tag(&self, _name: &str, _attr: Option<&str>) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tag() {
        let tag = SimpleTag::new("strike");
        assert!(tag.nests());
        assert_eq!(tag.start_tag("s", None).as_deref(), Some("<strike>"));
        assert_eq!(tag.content("x & <y>"), "x &amp; &lt;y&gt;");
        assert_eq!(tag.end_tag("s", None).as_deref(), Some("</strike>"));
    }

    #[test]
    fn test_link_tag() {
        let tag = LinkTag;
        assert_eq!(
            tag.start_tag("url", Some(r#"http://a.com/?q="x"&y"#)).as_deref(),
            Some(r#"<a href="http://a.com/?q=&quot;x&quot;&amp;y" rel="nofollow">"#)
        );
        assert_eq!(
            tag.start_tag("url", None).as_deref(),
            Some(r#"<a rel="nofollow">"#)
        );
        assert_eq!(tag.end_tag("url", None).as_deref(), Some("</a>"));
    }

    #[test]
    fn test_image_tag() {
        let tag = ImageTag;
        assert!(!tag.nests());
        assert_eq!(tag.start_tag("img", None), None);
        assert_eq!(
            tag.content(r#"http://x/"y".png"#),
            r#"<img src="http://x/&quot;y&quot;.png">"#
        );
        assert_eq!(tag.end_tag("img", None), None);
    }

    #[test]
    fn test_quote_tag() {
        let tag = QuoteTag;
        assert!(tag.nests());
        assert_eq!(
            tag.start_tag("quote", None).as_deref(),
            Some(r#"<blockquote class="quote">"#)
        );
        assert_eq!(
            tag.start_tag("quote", Some("<Bob>")).as_deref(),
            Some(
                r#"<div class="quote-attribution">&lt;Bob&gt; wrote:</div><blockquote class="quote">"#
            )
        );
        assert_eq!(tag.end_tag("quote", None).as_deref(), Some("</blockquote>"));
    }

    #[test]
    fn test_pre_and_code_tag() {
        assert!(!PreTag.nests());
        assert!(!CodeTag.nests());
        assert_eq!(PreTag.content("[b]<x>[/b]"), "<pre>[b]&lt;x&gt;[/b]</pre>");
        assert_eq!(
            CodeTag.content("a && b"),
            "<pre><code>a &amp;&amp; b</code></pre>"
        );
    }
}
