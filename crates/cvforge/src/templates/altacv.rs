//! The AltaCV document: preamble with color theme, header with personal
//! info, and a two-column `paracol` body.

use tracing::debug;

use crate::domain::altacv::{AltaCVConfig, AltaCVHeader, AltaCVResume, ColorPalette, PhotoShape, UserInfoField};
use crate::domain::PhotoDirection;
use crate::templates::render_sections;
use crate::utils::escape_special_chars;

const ALTACV_COPYRIGHT: &str = r"%%%%%%%%%%%%%%%%%
% This is an sample CV template created using altacv.cls
% (v1.7, 9 August 2023) written by LianTze Lim (liantze@gmail.com). Compiles with pdfLaTeX, XeLaTeX and LuaLaTeX.
%
%% It may be distributed and/or modified under the
%% conditions of the LaTeX Project Public License, either version 1.3
%% of this license or (at your option) any later version.
%% The latest version of this license is in
%%    http://www.latex-project.org/lppl.txt
%% and version 1.3 or later is part of all distributions of LaTeX
%% version 2003/12/01 or later.
%%%%%%%%%%%%%%%%";

const PREAMBLE_PACKAGES: &str = r#"%% AltaCV uses the fontawesome5 and packages.
%% See http://texdoc.net/pkg/fontawesome5 for full list of symbols.

% Change the page layout if you need to
\geometry{left=1.25cm,right=1.25cm,top=1.5cm,bottom=1.5cm,columnsep=1.2cm}

% The paracol package lets you typeset columns of text in parallel
\usepackage{paracol}
\usepackage{hyperref}

% Change the font if you want to, depending on whether
% you're using pdflatex or xelatex/lualatex
% WHEN COMPILING WITH XELATEX PLEASE USE
% xelatex -shell-escape -output-driver="xdvipdfmx -z 0" sample.tex
\ifxetexorluatex
% If using xelatex or lualatex:
\usepackage{fontspec}
\setmainfont[
    Path = fonts/Roboto_Slab/,
    UprightFont = RobotoSlab-VariableFont_wght.ttf
]{Roboto Slab}
\setsansfont[
    Path = fonts/Lato/,
    UprightFont = Lato-Regular.ttf
]{Lato}
\renewcommand{\familydefault}{\sfdefault}
\else
% If using pdflatex:
\usepackage[rm]{roboto}
\usepackage[defaultsans]{lato}
% \usepackage{sourcesanspro}
\renewcommand{\familydefault}{\sfdefault}
\fi

% Change the colours if you want to
"#;

const PREAMBLE_MARKERS: &str = r"
% Change some fonts, if necessary
\renewcommand{\namefont}{\Huge\rmfamily\bfseries}
\renewcommand{\personalinfofont}{\footnotesize}
\renewcommand{\cvsectionfont}{\LARGE\rmfamily\bfseries}
\renewcommand{\cvsubsectionfont}{\large\bfseries}

% Change the bullets for itemize and rating marker
% for \cvskill if you want to
\renewcommand{\cvItemMarker}{{\small\textbullet}}
\renewcommand{\cvRatingMarker}{\faCircle}
% ...and the markers for the date/location for \cvevent
\renewcommand{\cvDateMarker}{\faCalendar*[regular]}
\renewcommand{\cvLocationMarker}{\faMapMarker*}

% To display language skill fluency as string rather than stars
\newcommand{\cvskillstr}[2]{%
    \textcolor{emphasis}{\textbf{#1}}\hfill
    \textbf{\color{body}#2}\par
}

% If your CV/resume is in a language other than English,
% then you probably want to change these so that when you
% copy-paste from the PDF or run pdftotext, the location
% and date marker icons for \cvevent will paste as correct
% translations. For example Spanish:
% \renewcommand{\locationname}{Ubicacion}
% \renewcommand{\datename}{Fecha}";

const PERSONAL_INFO_NOTES: &str = r"  % Not all of these are required!
  %\email{your_name@email.com}
  %\phone{000-00-0000}
  %\mailaddress{Address, Street, 00000 Country}
  %\location{Location, COUNTRY}
  %\homepage{www.homepage.com}
  %\twitter{@twitterhandle}
  %\linkedin{your_id}
  %\github{your_id}
  %\orcid{0000-0000-0000-0000}

  %% You can add your own arbitrary detail with
  %% \printinfo{symbol}{detail}[optional hyperlink prefix]
  % \printinfo{\faPaw}{Hey ho!}[https://example.com/]
  %% Or you can declare your own field with
  %% \NewInfoField{fieldname}{symbol}[optional hyperlink prefix] and use it:
  % \NewInfoField{gitlab}{\faGitlab}[https://gitlab.com/]
  % \gitlab{your_id}";

impl AltaCVResume {
    /// Renders the complete LaTeX document for this resume.
    pub fn to_latex(&self) -> String {
        generate_resume_latex(self)
    }
}

fn generate_resume_latex(resume: &AltaCVResume) -> String {
    debug!(sections = resume.sections.len(), "rendering AltaCV document");

    let first_column = render_sections(resume.sections.iter().filter(|s| s.position.column() == 1));

    let second_column = if resume.sections.iter().any(|s| s.position.column() == 2) {
        let rendered = render_sections(resume.sections.iter().filter(|s| s.position.column() == 2));
        format!(
            "%% Switch to the right column. This will now automatically move to the second\n\
             %% page if the content is too long.\n\
             \\switchcolumn\n\n\
             {rendered}"
        )
    } else {
        String::new()
    };

    format!(
        "{preamble}\n\
         \n\
         \\begin{{document}}\n\
         \n\
         {header}\n\
         \n\
         \\makecvheader\n\
         %% Depending on your tastes, you may want to make fonts of itemize environments slightly smaller\n\
         % \\AtBeginEnvironment{{itemize}}{{\\small}}\n\
         \n\
         %% Set the left/right column width ratio to 6:4.\n\
         \\columnratio{{{ratio:?}}}\n\
         \n\
         % Start a 2-column paracol. Both the left and right columns will automatically\n\
         % break across pages if things get too long.\n\
         \\begin{{paracol}}{{2}}\n\
         \n\
         {first_column}\n\
         \n\
         {second_column}\n\
         \\end{{paracol}}\n\
         \n\
         \\end{{document}}\n",
        preamble = render_preamble(&resume.config),
        header = render_header(&resume.header),
        ratio = resume.config.column_ratio,
    )
}

/// The `\definecolor` + `\colorlet` block for a palette. Colors reused by
/// several aliases are defined once.
fn render_color_theme(theme: &ColorPalette) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut definitions: Vec<String> = Vec::new();
    for color in theme.values() {
        if !seen.contains(&color.color_name.as_str()) {
            seen.push(&color.color_name);
            definitions.push(format!(
                "\\definecolor{{{}}}{{HTML}}{{{}}}",
                color.color_name, color.color_hex_value
            ));
        }
    }

    let aliases: Vec<String> = theme
        .iter()
        .map(|(alias, color)| format!("\\colorlet{{{}}}{{{}}}", alias.as_str(), color.color_name))
        .collect();

    format!("{}\n\n{}", definitions.join("\n"), aliases.join("\n"))
}

fn render_preamble(config: &AltaCVConfig) -> String {
    let normal_photo = match config.photo_shape {
        PhotoShape::Normal => ",normalphoto",
        PhotoShape::Circle => "",
    };

    let mut preamble = String::new();
    preamble.push_str(ALTACV_COPYRIGHT);
    preamble.push_str("\n\n%% Use the \"normalphoto\" option if you want a normal photo instead of cropped to a circle\n");
    preamble.push_str("% \\documentclass[10pt,a4paper,normalphoto]{altacv}\n\n");
    preamble.push_str(&format!(
        "\\documentclass[10pt,a4paper,ragged2e,withhyper{normal_photo}]{{altacv}}\n"
    ));
    preamble.push_str(PREAMBLE_PACKAGES);
    preamble.push_str(&render_color_theme(&config.theme));
    preamble.push('\n');
    preamble.push_str(PREAMBLE_MARKERS);
    preamble
}

fn render_header(header: &AltaCVHeader) -> String {
    let name = header
        .user_info
        .as_ref()
        .map(|user| escape_special_chars(&user.name))
        .unwrap_or_default();

    let photo = match &header.photo {
        // Kept commented out in the generated document; uncommenting is the
        // caller's editorial decision, as in the upstream sample.
        Some(photo) => {
            let command = match photo.direction {
                PhotoDirection::Left => "\\photoL",
                PhotoDirection::Right => "\\photoR",
            };
            format!("%{}{{{:?}cm}}{{{}}}", command, photo.size, photo.path)
        }
        None => String::new(),
    };

    let personal_info = header
        .user_info
        .as_ref()
        .map(|user| format!("  {}", render_personal_info(&user.personal_info)))
        .unwrap_or_default();

    format!(
        "\\name{{{name}}}\n\
         \\tagline{{{tagline}}}\n\
         %% You can add multiple photos on the left or right\n\
         {photo}\n\
         %\\photoL{{2.5cm}}{{Yacht_High,Suitcase_High}}\n\
         \n\
         \\personalinfo{{%\n\
         {personal_info}\n\
         \n\
         {notes}\n\
         }}",
        tagline = escape_special_chars(&header.tagline),
        notes = PERSONAL_INFO_NOTES,
    )
}

/// One line per field: well-known contact fields use their dedicated macro;
/// anything else declares a new info field first.
fn render_personal_info(personal_info: &[UserInfoField]) -> String {
    personal_info
        .iter()
        .map(|field| {
            if field.is_well_known() {
                format!("\\{}{{{}}}", field.field_name, field.value)
            } else {
                format!(
                    "\\NewInfoField{{{}}}{{{}}}[{}]\n  \\{}{{{}}}",
                    field.field_name, field.symbol, field.prefix, field.field_name, field.value
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::altacv::{theme2, Photo, UserInfo};
    use crate::domain::content::SectionContent;
    use crate::domain::section::{first_column, second_column, Section};

    fn tag_section(title: &str, position: crate::domain::section::SectionPosition) -> Section {
        Section::new(title, position, vec![SectionContent::Tag(title.to_owned())])
    }

    fn sample_resume() -> AltaCVResume {
        AltaCVResume::builder()
            .header(AltaCVHeader::new(
                "Software Engineer",
                Some(UserInfo::new(
                    "Jane Doe",
                    vec![
                        UserInfoField::email("jane@example.com"),
                        UserInfoField::custom("gitlab", "\\faGitlab", "https://gitlab.com/", "jane"),
                    ],
                )),
                Some(Photo::new(2.5, "profile.jpg")),
            ))
            .section(tag_section("Experience", first_column(1)))
            .section(tag_section("Skills", second_column(1)))
            .build()
    }

    #[test]
    fn test_document_skeleton() {
        let latex = sample_resume().to_latex();
        assert!(latex.contains("\\documentclass[10pt,a4paper,ragged2e,withhyper,normalphoto]{altacv}"));
        assert!(latex.contains("\\begin{document}"));
        assert!(latex.contains("\\columnratio{0.6}"));
        assert!(latex.contains("\\begin{paracol}{2}"));
        assert!(latex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_circle_photo_drops_normalphoto_option() {
        let mut resume = sample_resume();
        resume.config.photo_shape = crate::domain::altacv::PhotoShape::Circle;
        assert!(resume.to_latex().contains("\\documentclass[10pt,a4paper,ragged2e,withhyper]{altacv}"));
    }

    #[test]
    fn test_color_theme_dedupes_reused_colors() {
        let rendered = render_color_theme(&theme2());
        // VividPurple backs four aliases but is defined once.
        assert_eq!(rendered.matches("\\definecolor{VividPurple}").count(), 1);
        assert!(rendered.contains("\\colorlet{tagline}{VividPurple}"));
        assert!(rendered.contains("\\colorlet{headingrule}{VividPurple}"));
        assert!(rendered.contains("\\colorlet{body}{LightGrey}"));
    }

    #[test]
    fn test_default_theme_in_preamble() {
        let latex = sample_resume().to_latex();
        assert!(latex.contains("\\definecolor{PastelRed}{HTML}{8F0D0D}"));
        assert!(latex.contains("\\colorlet{heading}{DarkPastelRed}"));
    }

    #[test]
    fn test_header_renders_name_tagline_and_photo() {
        let latex = sample_resume().to_latex();
        assert!(latex.contains("\\name{Jane Doe}"));
        assert!(latex.contains("\\tagline{Software Engineer}"));
        assert!(latex.contains("%\\photoR{2.5cm}{profile.jpg}"));
    }

    #[test]
    fn test_personal_info_well_known_and_custom() {
        let latex = sample_resume().to_latex();
        assert!(latex.contains("\\email{jane@example.com}"));
        assert!(latex.contains("\\NewInfoField{gitlab}{\\faGitlab}[https://gitlab.com/]"));
        assert!(latex.contains("\\gitlab{jane}"));
    }

    #[test]
    fn test_two_column_layout_switches_columns() {
        let latex = sample_resume().to_latex();
        assert!(latex.contains("\\switchcolumn"));
        assert!(latex.contains("\\cvsection{Experience}"));
        assert!(latex.contains("\\cvsection{Skills}"));
    }

    #[test]
    fn test_single_column_layout_never_switches() {
        let resume = AltaCVResume::builder()
            .section(tag_section("Experience", first_column(1)))
            .build();
        assert!(!resume.to_latex().contains("\\switchcolumn"));
    }

    #[test]
    fn test_ignored_sections_stay_out_of_the_document() {
        let mut hidden = tag_section("Hidden", first_column(2));
        hidden.ignored = true;
        let resume = AltaCVResume::builder()
            .section(tag_section("Visible", first_column(1)))
            .section(hidden)
            .build();

        let latex = resume.to_latex();
        assert!(latex.contains("\\cvsection{Visible}"));
        assert!(!latex.contains("Hidden"));
    }
}
