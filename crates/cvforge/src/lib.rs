//! cvforge — resume/CV generation.
//!
//! Models resume content as a typed object graph, round-trips it through a
//! JSON (or YAML) wire format, and renders it to LaTeX for the AltaCV and
//! AwesomeCV templates.
//!
//! ```
//! use cvforge::domain::altacv::AltaCVResume;
//! use cvforge::domain::content::SectionContent;
//! use cvforge::domain::section::{first_column, Section};
//!
//! let resume = AltaCVResume::builder()
//!     .section(
//!         Section::builder("Strengths", first_column(1))
//!             .separator(SectionContent::Divider)
//!             .tag("Hard-working")
//!             .tag("Motivator & Leader")
//!             .build(),
//!     )
//!     .build();
//!
//! let json = resume.to_json().unwrap();
//! let restored = AltaCVResume::from_json(&json).unwrap();
//! assert_eq!(restored, resume);
//!
//! let latex = resume.to_latex();
//! assert!(latex.contains("\\cvtag{Hard-working}"));
//! ```

pub mod builders;
pub mod domain;
pub mod errors;
pub mod serialization;
pub mod templates;
pub mod utils;

pub use errors::{Error, Result};
