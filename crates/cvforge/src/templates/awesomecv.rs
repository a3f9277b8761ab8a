//! The AwesomeCV document: preamble with accent color, header, three-slot
//! footer and a single-column body.

use tracing::debug;

use crate::domain::awesomecv::{AwesomeCVConfig, AwesomeCVHeader, AwesomeCVResume, UserInfoField};
use crate::templates::render_sections;

const AWESOME_CV_COPYRIGHT: &str = r"%!TEX TS-program = xelatex
%!TEX encoding = UTF-8 Unicode
% Awesome CV LaTeX Template for CV/Resume
%
% This template has been downloaded from:
% https://github.com/posquit0/Awesome-CV
%
% Author:
% Claud D. Park <posquit0.bj@gmail.com>
% http://www.posquit0.com
%
% Template license:
% CC BY-SA 4.0 (https://creativecommons.org/licenses/by-sa/4.0/)
%";

impl AwesomeCVResume {
    /// Renders the complete LaTeX document for this resume.
    pub fn to_latex(&self) -> String {
        generate_resume_latex(self)
    }
}

fn generate_resume_latex(resume: &AwesomeCVResume) -> String {
    debug!(sections = resume.sections.len(), "rendering AwesomeCV document");

    format!(
        "{preamble}\n\
         \n\
         {header}\n\
         \n\
         \\begin{{document}}\n\
         \n\
         % Print the header with above personal information\n\
         % Give optional argument to change alignment(C: center, L: left, R: right)\n\
         \\makecvheader[{alignment}]\n\
         \n\
         % Print the footer with 3 arguments(<left>, <center>, <right>)\n\
         % Leave any of these blank if they are not needed\n\
         \\makecvfooter\n\
         \x20\x20{{{footer_left}}}\n\
         \x20\x20{{{footer_center}}}\n\
         \x20\x20{{{footer_right}}}\n\
         \n\
         \n\
         %-------------------------------------------------------------------------------\n\
         %\tCV/RESUME CONTENT\n\
         %-------------------------------------------------------------------------------\n\
         \n\
         {sections}\n\
         \n\
         \\end{{document}}\n",
        preamble = render_preamble(&resume.config),
        header = render_header(&resume.header),
        alignment = resume.header.alignment.as_str(),
        footer_left = resume.footer.left,
        footer_center = resume.footer.center,
        footer_right = resume.footer.right,
        sections = render_sections(&resume.sections),
    )
}

fn render_preamble(config: &AwesomeCVConfig) -> String {
    format!(
        "{copyright}\n\
         %-------------------------------------------------------------------------------\n\
         % CONFIGURATIONS\n\
         %-------------------------------------------------------------------------------\n\
         % A4 paper size by default, use 'letterpaper' for US letter\n\
         \\documentclass[11pt, a4paper]{{awesome-cv}}\n\
         \n\
         % Configure page margins with geometry\n\
         \\geometry{{left=1.4cm, top=.8cm, right=1.4cm, bottom=1.8cm, footskip=.5cm}}\n\
         \n\
         % Color for highlights\n\
         % Awesome Colors: awesome-emerald, awesome-skyblue, awesome-red, awesome-pink, awesome-orange\n\
         %                 awesome-nephritis, awesome-concrete, awesome-darknight\n\
         \\colorlet{{awesome}}{{{theme}}}\n\
         % Uncomment if you would like to specify your own color\n\
         % \\definecolor{{awesome}}{{HTML}}{{3E6D9C}}\n\
         \n\
         % Colors for text\n\
         % Uncomment if you would like to specify your own color\n\
         % \\definecolor{{darktext}}{{HTML}}{{414141}}\n\
         % \\definecolor{{text}}{{HTML}}{{333333}}\n\
         % \\definecolor{{graytext}}{{HTML}}{{5D5D5D}}\n\
         % \\definecolor{{lighttext}}{{HTML}}{{999999}}\n\
         % \\definecolor{{sectiondivider}}{{HTML}}{{5D5D5D}}\n\
         \n\
         % Set false if you don't want to highlight section with awesome color\n\
         \\setbool{{acvSectionColorHighlight}}{{{highlighted}}}\n\
         \n\
         % If you would like to change the social information separator from a pipe (|) to something else\n\
         \\renewcommand{{\\acvHeaderSocialSep}}{{\\quad{separator}\\quad}}",
        copyright = AWESOME_CV_COPYRIGHT,
        theme = config.color_theme.theme(),
        highlighted = config.is_section_highlighted,
        separator = config.header_social_separator,
    )
}

fn render_header(header: &AwesomeCVHeader) -> String {
    let photo = match &header.photo {
        Some(photo) => format!(
            "\\photo[{},{},{}]{{{}}}",
            photo.shape.as_str(),
            photo.edge.as_str(),
            photo.direction.as_str(),
            photo.path
        ),
        None => "%\\photo[rectangle,edge,right]{./profile}".to_owned(),
    };

    let (first_name, last_name, personal_info) = match &header.user_info {
        Some(user) => (
            user.first_name.as_str(),
            user.last_name.as_str(),
            render_personal_info(&user.personal_info),
        ),
        None => ("", "", String::new()),
    };

    let quote = if header.quote.is_empty() {
        String::new()
    } else {
        format!("\\quote{{``{}''}}", header.quote)
    };

    format!(
        "%-------------------------------------------------------------------------------\n\
         %\tPERSONAL INFORMATION\n\
         %\tComment any of the lines below if they are not required\n\
         %-------------------------------------------------------------------------------\n\
         % Available options: circle|rectangle,edge/noedge,left/right\n\
         {photo}\n\
         \n\
         \\name{{{first_name}}}{{{last_name}}}\n\
         {personal_info}\n\
         \n\
         {quote}"
    )
}

/// One markup line per field; the id-carrying fields put their id as the
/// first argument.
fn render_personal_info(personal_info: &[UserInfoField]) -> String {
    personal_info
        .iter()
        .map(|field| {
            let value_id = match field.value_id.as_deref() {
                Some(id) if !id.is_empty() => format!("{{{id}}}"),
                _ => String::new(),
            };
            format!("\\{}{}{{{}}}", field.field_name, value_id, field.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
