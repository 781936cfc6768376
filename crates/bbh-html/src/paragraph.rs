const LINE_BREAK: &str = "<br>\n";
const PARAGRAPH_BREAK: &str = "</p>\n\n<p>";

/// Wrap `text` into paragraphs.
///
/// All line endings (`\r\n`, `\r` and `\n`) are normalized to `\n`, one
/// trailing newline is dropped and every remaining newline becomes a `<br>`.
/// Two consecutive line breaks split the paragraph:
///
/// ```console
/// a\n\nb  ->  <p>a</p>\n\n<p>b</p>
/// ```
///
/// The output is always wrapped in exactly one outer `<p>` and `</p>` pair,
/// an empty input yields `<p></p>`.
pub fn paragraphize(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
    let body = body
        .replace('\n', LINE_BREAK)
        .replace("<br>\n<br>\n", PARAGRAPH_BREAK);
    format!("<p>{body}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(paragraphize(""), "<p></p>");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(paragraphize("hello"), "<p>hello</p>");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(paragraphize("a\nb"), "<p>a<br>\nb</p>");
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(paragraphize("a\n\nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_line_endings_normalized() {
        assert_eq!(paragraphize("a\r\nb\rc"), "<p>a<br>\nb<br>\nc</p>");
        assert_eq!(paragraphize("a\r\n\r\nb"), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_drops_only_one_trailing_newline() {
        assert_eq!(paragraphize("a\n"), "<p>a</p>");
        assert_eq!(paragraphize("a\r\n"), "<p>a</p>");
        assert_eq!(paragraphize("a\n\n"), "<p>a<br>\n</p>");
        assert_eq!(paragraphize("\n"), "<p></p>");
    }

    #[test]
    fn test_three_newlines() {
        assert_eq!(paragraphize("a\n\n\nb"), "<p>a</p>\n\n<p><br>\nb</p>");
    }
}
