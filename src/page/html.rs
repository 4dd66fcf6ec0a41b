//! HTML escaping and small markup helpers shared by the sections.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Make JSON safe to embed inside a `<script>` element.
///
/// Only `</` can end the element early; `<\/` is the same string to a JSON
/// parser.
pub fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// An anchor that opens in a new tab. `inner` is already-escaped markup.
pub fn external_link(href: &str, class: &str, inner: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}">{}</a>"#,
        escape(href),
        class,
        inner
    )
}
