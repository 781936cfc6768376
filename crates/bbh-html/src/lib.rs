//! Html string utilities shared by the bbcode renderer.
//!
//! Everything here works on plain strings and never inspects markup it did
//! not produce itself.

mod escape;
mod paragraph;

pub use escape::{escape_attribute, escape_text};
pub use paragraph::paragraphize;
