use bbh_html::{escape_text, paragraphize};
use tracing::trace;

use crate::lexer::Lexer;
use crate::registry::Registry;
use crate::tag::{SimpleTag, Tag};
use crate::token::{TagHead, Token};

/// A nesting tag waiting for its tail.
struct OpenTag<'r> {
    name: String,
    tag: &'r dyn Tag,
}

/// Convert bbcode into html with its own set of tags.
///
/// Each parser owns a copy of the default [Registry], changes on one parser
/// never leak into others.
#[derive(Debug, Default, Clone)]
pub struct Parser {
    registry: Registry,
}

impl Parser {
    /// Construct a parser with the default tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a parser using `registry` as tag set.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Render `[b]` and `[i]` as `<strong>` and `<em>` if `enabled`, or as
    /// `<b>` and `<i>` if not.
    ///
    /// Replaces whatever tag was registered on those two names.
    pub fn use_emphasis_tags(&mut self, enabled: bool) {
        let (bold, italic) = if enabled { ("strong", "em") } else { ("b", "i") };
        self.registry.insert_builtin("b", SimpleTag::new(bold));
        self.registry.insert_builtin("i", SimpleTag::new(italic));
    }

    /// Same as [Parser::transform] but an absent input renders the text
    /// `null`.
    pub fn transform_nullable(&self, input: Option<&str>) -> String {
        self.transform(input.unwrap_or("null"))
    }

    /// Convert bbcode `input` into html.
    ///
    /// Never fails. Whatever can not be rendered as a tag stays in the output
    /// as escaped text:
    ///
    /// * Malformed brackets and unknown tags.
    /// * Tails not closing the innermost open tag. No tag is closed
    ///   implicitly.
    ///
    /// Content of a non-nesting tag without tail is dropped.
    pub fn transform(&self, input: &str) -> String {
        let mut lexer = Lexer::new(input);
        let mut html = String::with_capacity(input.len());
        let mut stack: Vec<OpenTag> = vec![];

        while lexer.has_next() {
            match lexer.next_token() {
                Token::Head(head) => {
                    let tag = match self.registry.find(&head.name) {
                        Some(v) => v,
                        None => {
                            trace!("unknown tag {:?}", head.raw);
                            html.push_str(&escape_text(&head.raw));
                            continue;
                        }
                    };

                    if tag.nests() {
                        stack.push(OpenTag {
                            name: head.name.clone(),
                            tag,
                        });
                    }
                    if let Some(v) = tag.start_tag(&head.name, head.attr.as_deref()) {
                        html.push_str(&v);
                    }
                    if !tag.nests() {
                        Self::capture(&mut lexer, &head, tag, &mut html);
                    }
                }
                Token::Tail(tail) => match stack.last() {
                    Some(top) if top.name == tail.name => {
                        if let Some(v) = top.tag.end_tag(&tail.name, tail.attr.as_deref()) {
                            html.push_str(&v);
                        }
                        stack.pop();
                    }
                    _ => {
                        trace!("tail {:?} does not close the innermost tag", tail.raw);
                        html.push_str(&escape_text(&tail.raw));
                    }
                },
                Token::Text { content } => html.push_str(&escape_text(&content)),
            }
        }

        if !stack.is_empty() {
            trace!("{} tag(s) left open", stack.len());
        }

        paragraphize(&html)
    }

    /// Collect everything up to the tail of `head` as raw text and render it
    /// with the non-nesting `tag`.
    ///
    /// Other tags inside are kept as their original text. Nothing is rendered
    /// if the tail never comes.
    fn capture(lexer: &mut Lexer, head: &TagHead, tag: &dyn Tag, html: &mut String) {
        let mut content = String::new();
        while lexer.has_next() {
            match lexer.next_token() {
                Token::Text { content: text } => content.push_str(&text),
                Token::Tail(tail) if tail.name == head.name => {
                    html.push_str(&tag.content(&content));
                    // Non-nesting tags render the whole element in content.
                    let _ = tag.end_tag(&tail.name, tail.attr.as_deref());
                    return;
                }
                token => content.push_str(token.as_raw()),
            }
        }
        trace!("tag {:?} never closed, dropped its content", head.raw);
    }
}
