//! Text Normalization
//!
//! Shared lowercase/strip/tokenize helpers used by the classifier and the
//! department matcher.

/// Punctuation removed by [`normalize`].
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '"', '\''];

/// Trim, lowercase and drop the fixed punctuation set.
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Normalize and split on whitespace runs. Never yields empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Remove every whitespace run that starts a line.
///
/// Multi-line templates are written indented; this flattens them. Because a
/// run may span line breaks, blank lines disappear as well, while a trailing
/// newline directly after the last content line is kept.
pub fn strip_line_indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_line_start = true;

    for c in text.chars() {
        if at_line_start && c.is_whitespace() {
            continue;
        }
        out.push(c);
        at_line_start = c == '\n';
    }

    out
}
