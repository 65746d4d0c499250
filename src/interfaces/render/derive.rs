//! Small presentational values derived from free-text content fields.

/// First character of each whitespace-separated name token, uppercased,
/// truncated to at most two characters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// How a free-text description should be rendered.
#[derive(Debug, PartialEq, Eq)]
pub enum DescriptionBody<'a> {
    /// No ". " sequence anywhere: the text passes through as one paragraph.
    Paragraph(&'a str),
    /// Ordered clauses split on the exact ". " sequence, empty clauses
    /// dropped, one trailing "." stripped per clause.
    Bullets(Vec<&'a str>),
}

/// Splits punctuated prose into display bullets on the literal ". "
/// sequence. This is a heuristic, not a sentence splitter: abbreviations
/// containing ". " split incorrectly, and that behavior is kept as-is for
/// compatibility with existing content.
pub fn split_description(description: &str) -> DescriptionBody<'_> {
    if !description.contains(". ") {
        return DescriptionBody::Paragraph(description);
    }

    let clauses = description
        .split(". ")
        .filter(|clause| !clause.trim().is_empty())
        .map(|clause| clause.strip_suffix('.').unwrap_or(clause))
        .collect();

    DescriptionBody::Bullets(clauses)
}

/// Strips one leading "•" marker and any whitespace right after it; lines
/// without a marker pass through unchanged.
pub fn strip_detail_marker(line: &str) -> &str {
    line.strip_prefix('•').map(str::trim_start).unwrap_or(line)
}

/// Display rule for timeline emphasis: an entry is current iff its period
/// text contains the literal "Present". Recomputed per render.
pub fn is_current_period(period: &str) -> bool {
    period.contains("Present")
}
