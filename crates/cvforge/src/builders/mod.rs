//! Chained builders for assembling resumes.
//!
//! Builders stage into local vectors and freeze at `build()`; the values
//! they produce are the same plain data a caller could construct directly.
//! The one piece of behavior beyond staging is separator injection: a
//! section builder given a separator inserts it between every adjacent pair
//! of contents at `build()` time.

use crate::domain::altacv::{AltaCVConfig, AltaCVHeader, AltaCVResume};
use crate::domain::awesomecv::{AwesomeCVConfig, AwesomeCVFooter, AwesomeCVHeader, AwesomeCVResume};
use crate::domain::content::{
    Achievement, Event, HonorItem, HonorList, Item, SectionContent, Skill, SkillStr, WheelChart,
    WheelChartItem,
};
use crate::domain::period::EventPeriod;
use crate::domain::section::{Section, SectionPosition};
use crate::errors::Result;
use crate::utils::separate_with;

// ────────────────────────────────────────────────────────────────────────────
// Resume builders
// ────────────────────────────────────────────────────────────────────────────

/// Builder for [`AltaCVResume`].
#[derive(Debug, Default)]
pub struct AltaCVResumeBuilder {
    config: AltaCVConfig,
    header: AltaCVHeader,
    sections: Vec<Section>,
}

impl AltaCVResumeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AltaCVConfig) -> Self {
        self.config = config;
        self
    }

    pub fn header(mut self, header: AltaCVHeader) -> Self {
        self.header = header;
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn build(self) -> AltaCVResume {
        AltaCVResume::new(self.config, self.header, self.sections)
    }
}

/// Builder for [`AwesomeCVResume`].
#[derive(Debug, Default)]
pub struct AwesomeCVResumeBuilder {
    config: AwesomeCVConfig,
    header: AwesomeCVHeader,
    footer: AwesomeCVFooter,
    sections: Vec<Section>,
}

impl AwesomeCVResumeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AwesomeCVConfig) -> Self {
        self.config = config;
        self
    }

    pub fn header(mut self, header: AwesomeCVHeader) -> Self {
        self.header = header;
        self
    }

    pub fn footer(mut self, footer: AwesomeCVFooter) -> Self {
        self.footer = footer;
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn build(self) -> AwesomeCVResume {
        AwesomeCVResume::new(self.config, self.header, self.footer, self.sections)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section builder
// ────────────────────────────────────────────────────────────────────────────

/// Builder for a [`Section`], with optional separator injection.
#[derive(Debug)]
pub struct SectionBuilder {
    title: String,
    position: SectionPosition,
    separator: SectionContent,
    ignored: bool,
    contents: Vec<SectionContent>,
}

impl SectionBuilder {
    pub fn new(title: impl Into<String>, position: SectionPosition) -> Self {
        Self {
            title: title.into(),
            position,
            separator: SectionContent::Empty,
            ignored: false,
            contents: Vec::new(),
        }
    }

    /// Inserts `separator` between every adjacent pair of contents at
    /// `build()`. The default, [`SectionContent::Empty`], inserts nothing.
    pub fn separator(mut self, separator: SectionContent) -> Self {
        self.separator = separator;
        self
    }

    pub fn ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    pub fn content(mut self, content: SectionContent) -> Self {
        self.contents.push(content);
        self
    }

    pub fn contents(mut self, contents: impl IntoIterator<Item = SectionContent>) -> Self {
        self.contents.extend(contents);
        self
    }

    pub fn tag(self, text: impl Into<String>) -> Self {
        self.content(SectionContent::Tag(text.into()))
    }

    pub fn quote(self, text: impl Into<String>) -> Self {
        self.content(SectionContent::Quote(text.into()))
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.content(SectionContent::Paragraph(text.into()))
    }

    /// Raw LaTeX, passed through verbatim at render time.
    pub fn latex(self, text: impl Into<String>) -> Self {
        self.content(SectionContent::Latex(text.into()))
    }

    pub fn item(self, description: impl Into<String>) -> Self {
        self.content(SectionContent::Item(Item::new(description)))
    }

    pub fn achievement(
        self,
        icon_name: impl Into<String>,
        achievement: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        self.content(SectionContent::Achievement(Achievement::new(icon_name, achievement, detail)))
    }

    /// A rated skill; fails if the rating is outside `[1.0, 5.0]`.
    pub fn skill(self, name: impl Into<String>, rating: f64) -> Result<Self> {
        Ok(self.content(SectionContent::Skill(Skill::new(name, rating)?)))
    }

    pub fn skill_fluency(self, name: impl Into<String>, fluency: impl Into<String>) -> Self {
        self.content(SectionContent::SkillStr(SkillStr::new(name, fluency)))
    }

    pub fn event(self, event: Event) -> Self {
        self.content(SectionContent::Event(event))
    }

    /// An AwesomeCV-style entry (same shape as an event, different markup).
    pub fn entry(self, event: Event) -> Self {
        self.content(SectionContent::Entry(event))
    }

    pub fn wheelchart(self, chart: WheelChart) -> Self {
        self.content(SectionContent::WheelChart(chart))
    }

    pub fn honors(self, honors: HonorList) -> Self {
        self.content(SectionContent::HonorList(honors))
    }

    pub fn build(self) -> Section {
        let contents = separate_with(self.contents, self.separator);
        let mut section = Section::new(self.title, self.position, contents);
        section.ignored = self.ignored;
        section
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Content builders
// ────────────────────────────────────────────────────────────────────────────

/// Builder for an [`Event`] (used by both event and entry nodes).
#[derive(Debug)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            event: Event::new(title),
        }
    }

    pub fn holder(mut self, holder: impl Into<String>) -> Self {
        self.event.holder = holder.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.event.location = location.into();
        self
    }

    pub fn duration(mut self, duration: EventPeriod) -> Self {
        self.event.duration = duration;
        self
    }

    pub fn item(mut self, description: impl Into<String>) -> Self {
        self.event.description.push(Item::new(description));
        self
    }

    pub fn item_without_bullet(mut self, description: impl Into<String>) -> Self {
        self.event.description.push(Item::without_bullet(description));
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.event.description.extend(items);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// Builder for a [`WheelChart`].
#[derive(Debug)]
pub struct WheelChartBuilder {
    inner_radius: f64,
    outer_radius: f64,
    items: Vec<WheelChartItem>,
}

impl WheelChartBuilder {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            items: Vec::new(),
        }
    }

    pub fn item(
        mut self,
        value: i32,
        text_width: i32,
        color: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        self.items.push(WheelChartItem::new(value, text_width, color, detail));
        self
    }

    pub fn build(self) -> WheelChart {
        WheelChart::new(self.inner_radius, self.outer_radius, self.items)
    }
}

/// Builder for a [`HonorList`].
#[derive(Debug)]
pub struct HonorListBuilder {
    section_title: String,
    items: Vec<HonorItem>,
}

impl HonorListBuilder {
    pub fn new(section_title: impl Into<String>) -> Self {
        Self {
            section_title: section_title.into(),
            items: Vec::new(),
        }
    }

    pub fn honor(
        mut self,
        award: impl Into<String>,
        event: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        self.items.push(HonorItem::new(award, event, location, date));
        self
    }

    pub fn build(self) -> HonorList {
        HonorList::new(self.section_title, self.items)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{first_column, second_column};

    #[test]
    fn test_section_builder_injects_separator() {
        let section = Section::builder("Strengths", first_column(2))
            .separator(SectionContent::Divider)
            .tag("Hard-working")
            .tag("Motivator & Leader")
            .build();

        assert_eq!(
            section.contents,
            vec![
                SectionContent::Tag("Hard-working".to_owned()),
                SectionContent::Divider,
                SectionContent::Tag("Motivator & Leader".to_owned()),
            ]
        );
    }

    #[test]
    fn test_section_builder_default_separator_inserts_nothing() {
        let section = Section::builder("Skills", first_column(1))
            .tag("A")
            .tag("B")
            .build();

        assert_eq!(
            section.contents,
            vec![SectionContent::Tag("A".to_owned()), SectionContent::Tag("B".to_owned())]
        );
    }

    #[test]
    fn test_section_builder_carries_ignored_flag() {
        let section = Section::builder("Hidden", second_column(9)).ignored(true).build();
        assert!(section.ignored);
        assert_eq!(section.position, second_column(9));
    }

    #[test]
    fn test_section_builder_rejects_bad_skill_rating() {
        let result = Section::builder("Skills", first_column(1)).skill("Rust", 7.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_event_builder() {
        let event = Event::builder("Job Title 1")
            .holder("Company 1")
            .location("Location")
            .duration(EventPeriod::text("Month XXXX", "Ongoing"))
            .item("Job description 1")
            .item_without_bullet("Job description 2")
            .build();

        assert_eq!(event.title, "Job Title 1");
        assert_eq!(event.holder, "Company 1");
        assert_eq!(event.location, "Location");
        assert_eq!(event.duration, EventPeriod::text("Month XXXX", "Ongoing"));
        assert_eq!(
            event.description,
            vec![Item::new("Job description 1"), Item::without_bullet("Job description 2")]
        );
    }

    #[test]
    fn test_wheelchart_builder() {
        let chart = WheelChartBuilder::new(1.5, 0.5)
            .item(8, 8, "accent!60", "Daytime job")
            .item(2, 10, "accent", "Sports and relaxation")
            .build();

        assert_eq!(chart.inner_radius, 1.5);
        assert_eq!(chart.items.len(), 2);
    }

    #[test]
    fn test_honor_list_builder() {
        let honors = HonorListBuilder::new("Awards")
            .honor("First Place", "Hackathon", "Paris", "2023")
            .build();

        assert_eq!(honors.section_title, "Awards");
        assert_eq!(honors.honor_items, vec![HonorItem::new("First Place", "Hackathon", "Paris", "2023")]);
    }

    #[test]
    fn test_resume_builder_composes_sections_in_order() {
        let resume = AltaCVResume::builder()
            .section(Section::builder("Experience", first_column(1)).build())
            .section(Section::builder("Skills", second_column(1)).build())
            .build();

        assert_eq!(resume.sections.len(), 2);
        assert_eq!(resume.sections[0].title, "Experience");
        assert_eq!(resume.sections[1].title, "Skills");
    }

    #[test]
    fn test_awesomecv_resume_builder_keeps_footer() {
        let resume = AwesomeCVResume::builder()
            .footer(AwesomeCVFooter::new("\\today", "Jane", "\\thepage"))
            .build();

        assert_eq!(resume.footer.center, "Jane");
    }
}
