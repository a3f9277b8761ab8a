//! LaTeX document generation for the two supported templates.
//!
//! Rendering walks the already-built object graph and concatenates each
//! node's `render()` fragment into a fixed document skeleton. Sections are
//! filtered by their `ignored` flag and sorted by `order` here — storage
//! order is never touched.

pub mod altacv;
pub mod awesomecv;

use crate::domain::section::Section;
use crate::utils::{centered, escape_special_chars, TITLE_WIDTH};

/// Renders a run of sections: drops ignored ones, sorts by order, and wraps
/// each in its banner comments.
pub(crate) fn render_sections<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = &'a Section>,
{
    let mut visible: Vec<&Section> = sections.into_iter().filter(|s| !s.ignored).collect();
    visible.sort_by_key(|s| s.position.order());

    visible
        .iter()
        .map(|section| {
            let contents: Vec<String> = section.contents.iter().map(|c| c.render()).collect();
            format!(
                "%{}\n\\cvsection{{{}}}\n\n{}\n%{}",
                centered(&section.title),
                escape_special_chars(&section.title),
                contents.join("\n"),
                "-".repeat(TITLE_WIDTH)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
