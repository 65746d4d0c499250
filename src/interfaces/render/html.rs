/// Escapes free-form content for interpolation into element text or
/// quoted attribute values, so authored prose can never break document
/// structure. Markdown-capable fields go through the sanitizing pipeline in
/// `utils::markdown` instead.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
