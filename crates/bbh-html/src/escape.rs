/// Escape `text` so it can be placed between html tags.
///
/// Replaces `&`, `<` and `>` with their entities in a single pass, so
/// entities introduced here are not escaped a second time.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape `text` so it can be placed inside a quoted html attribute value.
///
/// Same as [escape_text], plus both kinds of quotes. The single quote is
/// written as `&#39;`.
pub fn escape_attribute(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
