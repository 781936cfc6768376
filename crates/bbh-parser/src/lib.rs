use std::sync::OnceLock;

mod error;
pub mod lexer;
pub mod parser;
pub mod registry;
mod scanner;
pub mod tag;
pub mod token;

pub use bbh_html::{escape_attribute, escape_text, paragraphize};
pub use error::RegistryError;
pub use parser::Parser;
pub use registry::Registry;
pub use tag::Tag;

const OPEN: char = '[';
const CLOSE: char = ']';
const SLASH: char = '/';
const EQUAL: char = '=';

/// Parser shared by [bbcode_to_html], holding the default tag set.
static DEFAULT_PARSER: OnceLock<Parser> = OnceLock::new();

/// Convert bbcode `data` into html using the default tag set.
///
/// Use a [Parser] instead when custom tags or the emphasis style are needed.
pub fn bbcode_to_html(data: impl AsRef<str>) -> String {
    DEFAULT_PARSER.get_or_init(Parser::new).transform(data.as_ref())
}
