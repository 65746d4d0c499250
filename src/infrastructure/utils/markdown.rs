use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
/// Content fields are authored prose that may carry light markup; plain
/// text comes back as a single paragraph.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_markdown_content(&raw_html)
}

/// Sanitizes rendered Markdown to remove unsafe HTML.
pub fn sanitize_markdown_content(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}
