//! The resume content model: section contents, periods, sections and the
//! per-template (AltaCV / AwesomeCV) aggregates.

pub mod altacv;
pub mod awesomecv;
pub mod content;
pub mod period;
pub mod section;

use serde::{Deserialize, Serialize};

/// Horizontal placement of a photo in a resume header. Shared by both
/// template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoDirection {
    Left,
    #[default]
    Right,
}

impl PhotoDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoDirection::Left => "left",
            PhotoDirection::Right => "right",
        }
    }
}
