//! Section contents — the closed set of node kinds a resume section can hold
//! and their LaTeX rendering.
//!
//! Every node kind carries a [`ContentType`] discriminant used by the JSON
//! wrapper encoding, and renders through one exhaustive `match` so that
//! adding or removing a kind is a compile-checked change everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::period::EventPeriod;
use crate::errors::{Error, Result};
use crate::utils::escape_special_chars;

// ────────────────────────────────────────────────────────────────────────────
// Discriminant
// ────────────────────────────────────────────────────────────────────────────

/// Wire discriminant of a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Divider,
    NewLine,
    NewPage,
    Empty,
    Tag,
    Quote,
    Generic,
    Achievement,
    Skill,
    Event,
    EventEntry,
    Item,
    WheelChart,
    HonorList,
    Paragraph,
}

impl ContentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::Divider => "DIVIDER",
            ContentType::NewLine => "NEWLINE",
            ContentType::NewPage => "NEWPAGE",
            ContentType::Empty => "EMPTY",
            ContentType::Tag => "TAG",
            ContentType::Quote => "QUOTE",
            ContentType::Generic => "GENERIC",
            ContentType::Achievement => "ACHIEVEMENT",
            ContentType::Skill => "SKILL",
            ContentType::Event => "EVENT",
            ContentType::EventEntry => "EVENT_ENTRY",
            ContentType::Item => "ITEM",
            ContentType::WheelChart => "WHEELCHART",
            ContentType::HonorList => "HONOR_LIST",
            ContentType::Paragraph => "PARAGRAPH",
        }
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DIVIDER" => Ok(ContentType::Divider),
            "NEWLINE" => Ok(ContentType::NewLine),
            "NEWPAGE" => Ok(ContentType::NewPage),
            "EMPTY" => Ok(ContentType::Empty),
            "TAG" => Ok(ContentType::Tag),
            "QUOTE" => Ok(ContentType::Quote),
            "GENERIC" => Ok(ContentType::Generic),
            "ACHIEVEMENT" => Ok(ContentType::Achievement),
            "SKILL" => Ok(ContentType::Skill),
            "EVENT" => Ok(ContentType::Event),
            "EVENT_ENTRY" => Ok(ContentType::EventEntry),
            "ITEM" => Ok(ContentType::Item),
            "WHEELCHART" => Ok(ContentType::WheelChart),
            "HONOR_LIST" => Ok(ContentType::HonorList),
            "PARAGRAPH" => Ok(ContentType::Paragraph),
            other => Err(Error::Decode(format!("unknown content type: {other}"))),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Payload types
// ────────────────────────────────────────────────────────────────────────────

/// A highlighted achievement: an icon command name, a one-line title and a
/// longer detail. The icon name is emitted verbatim as a LaTeX command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub icon_name: String,
    pub achievement: String,
    pub detail: String,
}

impl Achievement {
    pub fn new(
        icon_name: impl Into<String>,
        achievement: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            icon_name: icon_name.into(),
            achievement: achievement.into(),
            detail: detail.into(),
        }
    }
}

/// A skill with a numeric rating.
///
/// The rating is validated on construction and again when decoding, so an
/// out-of-range value can never enter the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    skill: String,
    rating: f64,
}

impl Skill {
    pub fn new(skill: impl Into<String>, rating: f64) -> Result<Self> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(Error::Validation("Skill rating must be between 1 and 5".to_owned()));
        }
        Ok(Self {
            skill: skill.into(),
            rating,
        })
    }

    pub fn skill(&self) -> &str {
        &self.skill
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// A skill with a textual fluency level ("Fluent", "Native") instead of a
/// rating. Shares the `SKILL` discriminant with [`Skill`]; the wire forms are
/// told apart by which of `rating`/`fluency` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStr {
    pub skill: String,
    pub fluency: String,
}

impl SkillStr {
    pub fn new(skill: impl Into<String>, fluency: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            fluency: fluency.into(),
        }
    }
}

/// A single list item, bulleted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub description: String,
    #[serde(rename = "withBullet", default = "default_with_bullet")]
    pub with_bullet: bool,
}

fn default_with_bullet() -> bool {
    true
}

impl Item {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            with_bullet: true,
        }
    }

    pub fn without_bullet(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            with_bullet: false,
        }
    }

    pub fn render(&self) -> String {
        if self.with_bullet {
            format!("\\item {}", escape_special_chars(&self.description))
        } else {
            format!("\\item[] {}", escape_special_chars(&self.description))
        }
    }
}

/// A dated happening — a job, a degree, a project. Used by both the AltaCV
/// (`EVENT`) and AwesomeCV (`EVENT_ENTRY`) node kinds, which render it with
/// different templates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub title: String,
    pub holder: String,
    pub location: String,
    #[serde(skip_serializing_if = "EventPeriod::is_none")]
    pub duration: EventPeriod,
    pub description: Vec<Item>,
}

impl Event {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn builder(title: impl Into<String>) -> crate::builders::EventBuilder {
        crate::builders::EventBuilder::new(title)
    }
}

/// One slice of a wheel chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelChartItem {
    pub value: i32,
    pub text_width: i32,
    pub color: String,
    pub detail: String,
}

impl WheelChartItem {
    pub fn new(value: i32, text_width: i32, color: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            value,
            text_width,
            color: color.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for WheelChartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = escape_special_chars(&self.detail);
        // The wheelchart argument list is comma-delimited; a detail that still
        // holds a comma after escaping must be brace-wrapped to stay one field.
        let detail = if detail.contains(',') {
            format!("{{{detail}}}")
        } else {
            detail
        };
        write!(f, "{}/{}em/{}/{}", self.value, self.text_width, self.color, detail)
    }
}

/// A pie-style chart of how time is spent (AltaCV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelChart {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub items: Vec<WheelChartItem>,
}

impl WheelChart {
    pub fn new(inner_radius: f64, outer_radius: f64, items: Vec<WheelChartItem>) -> Self {
        Self {
            inner_radius,
            outer_radius,
            items,
        }
    }
}

/// One honor or award line (AwesomeCV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HonorItem {
    pub award: String,
    pub event: String,
    pub location: String,
    pub date: String,
}

impl HonorItem {
    pub fn new(
        award: impl Into<String>,
        event: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            award: award.into(),
            event: event.into(),
            location: location.into(),
            date: date.into(),
        }
    }
}

impl fmt::Display for HonorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\\cvhonor\n    {{{}}} % Award\n    {{{}}} % Event\n    {{{}}} % Location\n    {{{}}} % Date(s)",
            self.award, self.event, self.location, self.date
        )
    }
}

/// A titled list of honors (AwesomeCV).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HonorList {
    pub section_title: String,
    pub honor_items: Vec<HonorItem>,
}

impl HonorList {
    pub fn new(section_title: impl Into<String>, honor_items: Vec<HonorItem>) -> Self {
        Self {
            section_title: section_title.into(),
            honor_items,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The content sum type
// ────────────────────────────────────────────────────────────────────────────

/// One element of a section's content list.
///
/// `Empty` is a sentinel: it renders to nothing, serializes to nothing, and
/// is dropped from list encodings. It exists so builders can say "no
/// separator" with a content value.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Divider,
    NewLine,
    NewPage,
    Empty,
    Tag(String),
    Quote(String),
    Paragraph(String),
    /// Raw LaTeX passed through verbatim, no escaping.
    Latex(String),
    Achievement(Achievement),
    Skill(Skill),
    SkillStr(SkillStr),
    Item(Item),
    Event(Event),
    Entry(Event),
    WheelChart(WheelChart),
    HonorList(HonorList),
}

impl SectionContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            SectionContent::Divider => ContentType::Divider,
            SectionContent::NewLine => ContentType::NewLine,
            SectionContent::NewPage => ContentType::NewPage,
            SectionContent::Empty => ContentType::Empty,
            SectionContent::Tag(_) => ContentType::Tag,
            SectionContent::Quote(_) => ContentType::Quote,
            SectionContent::Paragraph(_) => ContentType::Paragraph,
            SectionContent::Latex(_) => ContentType::Generic,
            SectionContent::Achievement(_) => ContentType::Achievement,
            SectionContent::Skill(_) | SectionContent::SkillStr(_) => ContentType::Skill,
            SectionContent::Item(_) => ContentType::Item,
            SectionContent::Event(_) => ContentType::Event,
            SectionContent::Entry(_) => ContentType::EventEntry,
            SectionContent::WheelChart(_) => ContentType::WheelChart,
            SectionContent::HonorList(_) => ContentType::HonorList,
        }
    }

    /// Renders this node as a LaTeX fragment. Pure: depends only on the
    /// node's own fields. Free text goes through the shared escaper; raw
    /// LaTeX and icon command names are emitted verbatim.
    pub fn render(&self) -> String {
        match self {
            SectionContent::Divider => "\n\\divider\n".to_owned(),
            SectionContent::NewLine => "\\\\".to_owned(),
            SectionContent::NewPage => "\\newpage".to_owned(),
            SectionContent::Empty => String::new(),
            SectionContent::Tag(text) => format!("\\cvtag{{{}}}", escape_special_chars(text)),
            SectionContent::Quote(text) => format!(
                "\\begin{{quote}}\n``{}''\n\\end{{quote}}",
                escape_special_chars(text)
            ),
            SectionContent::Paragraph(text) => format!(
                "\\begin{{cvparagraph}}\n{}\n\\end{{cvparagraph}}",
                escape_special_chars(text)
            ),
            SectionContent::Latex(text) => text.clone(),
            SectionContent::Achievement(a) => format!(
                "\\cvachievement{{\\{}}}{{{}}}{{{}}}",
                a.icon_name,
                escape_special_chars(&a.achievement),
                escape_special_chars(&a.detail)
            ),
            SectionContent::Skill(s) => {
                format!("\\cvskill{{{}}}{{{:?}}}", escape_special_chars(&s.skill), s.rating)
            }
            SectionContent::SkillStr(s) => format!(
                "\\cvskillstr{{{}}}{{{}}}",
                escape_special_chars(&s.skill),
                escape_special_chars(&s.fluency)
            ),
            SectionContent::Item(item) => item.render(),
            SectionContent::Event(event) => render_event(event),
            SectionContent::Entry(event) => render_entry(event),
            SectionContent::WheelChart(chart) => render_wheelchart(chart),
            SectionContent::HonorList(honors) => render_honor_list(honors),
        }
    }
}

fn render_event(event: &Event) -> String {
    let mut rendered = format!(
        "\\cvevent{{{}}}{{{}}}{{{}}}{{{}}}",
        escape_special_chars(&event.title),
        escape_special_chars(&event.holder),
        event.duration.render(),
        escape_special_chars(&event.location)
    );

    if !event.description.is_empty() {
        let items: Vec<String> = event.description.iter().map(Item::render).collect();
        rendered.push_str("\n\\begin{itemize}\n");
        rendered.push_str(&items.join("\n"));
        rendered.push_str("\n\\end{itemize}");
    }

    rendered
}

fn render_entry(event: &Event) -> String {
    let description = if event.description.is_empty() {
        "{}".to_owned()
    } else {
        let items: Vec<String> = event.description.iter().map(Item::render).collect();
        format!(
            "{{\n     \\begin{{cvitems}} % Description(s) of tasks/responsibilities\n     {}\n     \\end{{cvitems}}\n   }}",
            items.join("\n     ")
        )
    };

    format!(
        "\\cventry\n   {{{}}} % Job title\n   {{{}}} % Organization\n   {{{}}} % Location\n   {{{}}} % Date(s)\n   {}",
        escape_special_chars(&event.title),
        escape_special_chars(&event.holder),
        escape_special_chars(&event.location),
        event.duration.render(),
        description
    )
}

fn render_wheelchart(chart: &WheelChart) -> String {
    let items: Vec<String> = chart.items.iter().map(ToString::to_string).collect();
    format!(
        "% \\wheelchart{{outer radius}}{{inner radius}}{{\n% comma-separated list of value/text width/color/detail}}\n\\wheelchart{{{:?}cm}}{{{:?}cm}}{{\n  {}\n}}",
        chart.inner_radius,
        chart.outer_radius,
        items.join(",\n  ")
    )
}

fn render_honor_list(honors: &HonorList) -> String {
    let items: Vec<String> = honors.honor_items.iter().map(ToString::to_string).collect();
    format!(
        "\\cvsubsection{{{}}}\n\n\\begin{{cvhonors}}\n\n{}\n\n\\end{{cvhonors}}\n",
        honors.section_title,
        items.join("\n\n")
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
