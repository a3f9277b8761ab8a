//! Shared text helpers used by the renderers and builders.

use crate::domain::content::SectionContent;

/// Width of the banner comments surrounding section titles in the LaTeX output.
pub(crate) const TITLE_WIDTH: usize = 80;

/// Escapes LaTeX special characters in free text.
///
/// Each character is replaced independently, in a fixed order. None of the
/// replacements introduce characters that a later replacement would match, so
/// a sequential pass cannot double-escape.
pub fn escape_special_chars(text: &str) -> String {
    text.replace('_', "\\_")
        .replace('#', "\\#")
        .replace('%', "\\%")
        .replace('&', "\\&")
        .replace('$', "\\$")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('^', "\\textasciicircum")
        .replace('~', "\\textasciitilde")
}

/// Centers `text` by padding both sides with `pad` up to `width` characters.
pub(crate) fn centered_with(text: &str, pad: char, width: usize) -> String {
    let padding = width.saturating_sub(text.len()) / 2;
    let side: String = std::iter::repeat(pad).take(padding).collect();
    format!("{side}{text}{side}")
}

/// Centers `text` in a dash banner of [`TITLE_WIDTH`] characters.
pub(crate) fn centered(text: &str) -> String {
    centered_with(text, '-', TITLE_WIDTH)
}

/// Inserts `separator` between every adjacent pair of `contents`.
///
/// The separator is never placed before the first or after the last element,
/// and [`SectionContent::Empty`] acts as a no-op sentinel: separating with it
/// returns the input unchanged.
pub fn separate_with(contents: Vec<SectionContent>, separator: SectionContent) -> Vec<SectionContent> {
    if separator == SectionContent::Empty {
        return contents;
    }

    let last = contents.len().saturating_sub(1);
    let mut result = Vec::with_capacity(contents.len() * 2);
    for (index, content) in contents.into_iter().enumerate() {
        result.push(content);
        if index < last {
            result.push(separator.clone());
        }
    }

    result
}
