//! Builds a small AltaCV resume, prints its JSON wire form and the generated
//! LaTeX document.
//!
//! Run with: `cargo run --example altacv`

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvforge::builders::WheelChartBuilder;
use cvforge::domain::altacv::{AltaCVHeader, AltaCVResume, Photo, UserInfo, UserInfoField};
use cvforge::domain::content::{Event, SectionContent};
use cvforge::domain::period::EventPeriod;
use cvforge::domain::section::{first_column, second_column, Section};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let header = AltaCVHeader::new(
        "Software Engineer",
        Some(UserInfo::new(
            "Jane Doe",
            vec![
                UserInfoField::email("jane.doe@example.com"),
                UserInfoField::github("janedoe"),
                UserInfoField::orcid("0000-0000-0000-0000")?,
            ],
        )),
        Some(Photo::new(2.5, "profile.jpg")),
    );

    let experience = Section::builder("Experience", first_column(1))
        .separator(SectionContent::Divider)
        .event(
            Event::builder("Senior Engineer")
                .holder("Acme Corp")
                .location("Remote")
                .duration(EventPeriod::dates("2021-03", "2023-10")?)
                .item("Led the storage team")
                .item("Cut p99 latency by 40%")
                .build(),
        )
        .event(
            Event::builder("Engineer")
                .holder("Initech")
                .location("Austin, TX")
                .duration(EventPeriod::text("Summer 2019", "2021"))
                .item("Maintained the billing pipeline")
                .build(),
        )
        .build();

    let skills = Section::builder("Skills", second_column(1))
        .separator(SectionContent::NewLine)
        .skill("Rust", 4.5)?
        .skill("LaTeX", 3.0)?
        .skill_fluency("French", "Fluent")
        .build();

    let life = Section::builder("A Day of My Life", second_column(2))
        .wheelchart(
            WheelChartBuilder::new(1.5, 0.5)
                .item(8, 8, "accent!60", "Daytime job")
                .item(10, 8, "accent!30", "Sleep,\\beautiful sleep")
                .item(6, 8, "accent", "Everything else")
                .build(),
        )
        .build();

    let resume = AltaCVResume::builder()
        .header(header)
        .sections([experience, skills, life])
        .build();

    let json = resume.to_json()?;
    println!("--- JSON ---\n{json}\n");

    let restored = AltaCVResume::from_json(&json)?;
    assert_eq!(restored, resume);

    println!("--- LaTeX ---\n{}", resume.to_latex());
    Ok(())
}
