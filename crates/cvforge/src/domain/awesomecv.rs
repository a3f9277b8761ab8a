//! AwesomeCV-specific model: color theme, photo, header/footer, user info
//! and the resume root for the single-column AwesomeCV template.

use serde::{Deserialize, Serialize};

use crate::domain::section::Section;
use crate::domain::PhotoDirection;

// ────────────────────────────────────────────────────────────────────────────
// Styling
// ────────────────────────────────────────────────────────────────────────────

/// Accent color presets shipped with the AwesomeCV class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorTheme {
    Emerald,
    Skyblue,
    #[default]
    Red,
    Pink,
    Orange,
    Nephritis,
    Concrete,
    Darknight,
}

impl ColorTheme {
    /// The `\colorlet` name the LaTeX class expects.
    pub fn theme(self) -> &'static str {
        match self {
            ColorTheme::Emerald => "awesome-emerald",
            ColorTheme::Skyblue => "awesome-skyblue",
            ColorTheme::Red => "awesome-red",
            ColorTheme::Pink => "awesome-pink",
            ColorTheme::Orange => "awesome-orange",
            ColorTheme::Nephritis => "awesome-nephritis",
            ColorTheme::Concrete => "awesome-concrete",
            ColorTheme::Darknight => "awesome-darknight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoShape {
    Circle,
    #[default]
    Rectangle,
}

impl PhotoShape {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoShape::Circle => "circle",
            PhotoShape::Rectangle => "rectangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoEdge {
    #[default]
    Edge,
    NoEdge,
}

impl PhotoEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoEdge::Edge => "edge",
            PhotoEdge::NoEdge => "noedge",
        }
    }
}

/// Header alignment of the rendered `\makecvheader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderAlignment {
    #[default]
    Center,
    Left,
    Right,
}

impl HeaderAlignment {
    /// The single-letter option `\makecvheader` takes.
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderAlignment::Center => "C",
            HeaderAlignment::Left => "L",
            HeaderAlignment::Right => "R",
        }
    }
}

/// A header photo for the AwesomeCV template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    pub shape: PhotoShape,
    pub edge: PhotoEdge,
    pub direction: PhotoDirection,
    pub path: String,
}

impl Photo {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// User info
// ────────────────────────────────────────────────────────────────────────────

/// One line of personal information in the AwesomeCV header.
///
/// Unlike the AltaCV variant there is no symbol/prefix pair: the template
/// fixes the markup per field name. A few fields (Stack Overflow, Google
/// Scholar) carry an extra id that becomes the first markup argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserInfoField {
    pub field_name: String,
    pub value: String,
    pub value_id: Option<String>,
}

impl UserInfoField {
    fn known(field_name: &str, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.to_owned(),
            value: value.into(),
            value_id: None,
        }
    }

    pub fn position(value: impl Into<String>) -> Self {
        Self::known("position", value)
    }

    pub fn mail_address(value: impl Into<String>) -> Self {
        Self::known("address", value)
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self::known("mobile", value)
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::known("email", value)
    }

    pub fn home_page(value: impl Into<String>) -> Self {
        Self::known("homepage", value)
    }

    pub fn github(value: impl Into<String>) -> Self {
        Self::known("github", value)
    }

    pub fn linkedin(value: impl Into<String>) -> Self {
        Self::known("linkedin", value)
    }

    pub fn gitlab(value: impl Into<String>) -> Self {
        Self::known("gitlab", value)
    }

    pub fn twitter(value: impl Into<String>) -> Self {
        Self::known("twitter", value)
    }

    pub fn skype(value: impl Into<String>) -> Self {
        Self::known("skype", value)
    }

    pub fn reddit(value: impl Into<String>) -> Self {
        Self::known("reddit", value)
    }

    pub fn medium(value: impl Into<String>) -> Self {
        Self::known("medium", value)
    }

    pub fn extra_info(value: impl Into<String>) -> Self {
        Self::known("extrainfo", value)
    }

    pub fn stack_overflow(value_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: "stackoverflow".to_owned(),
            value: value.into(),
            value_id: Some(value_id.into()),
        }
    }

    pub fn google_scholar(value_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: "googlescholar".to_owned(),
            value: value.into(),
            value_id: Some(value_id.into()),
        }
    }
}

/// The resume owner: split first/last name plus personal info lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwesomeCVUserInfo {
    pub first_name: String,
    pub last_name: String,
    pub personal_info: Vec<UserInfoField>,
}

impl AwesomeCVUserInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        personal_info: Vec<UserInfoField>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            personal_info,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Config / header / footer / resume
// ────────────────────────────────────────────────────────────────────────────

/// Layout and styling knobs of the AwesomeCV template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwesomeCVConfig {
    pub color_theme: ColorTheme,
    pub is_section_highlighted: bool,
    pub header_social_separator: String,
}

impl Default for AwesomeCVConfig {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            is_section_highlighted: true,
            header_social_separator: "\\textbar".to_owned(),
        }
    }
}

/// The AwesomeCV header: alignment, owner info, optional photo and quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AwesomeCVHeader {
    pub alignment: HeaderAlignment,
    pub user_info: Option<AwesomeCVUserInfo>,
    pub photo: Option<Photo>,
    pub quote: String,
}

/// The three-slot page footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AwesomeCVFooter {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl AwesomeCVFooter {
    pub fn new(left: impl Into<String>, center: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            center: center.into(),
            right: right.into(),
        }
    }
}

/// Root aggregate for the AwesomeCV template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AwesomeCVResume {
    pub config: AwesomeCVConfig,
    pub header: AwesomeCVHeader,
    pub footer: AwesomeCVFooter,
    pub sections: Vec<Section>,
}

impl AwesomeCVResume {
    pub fn new(
        config: AwesomeCVConfig,
        header: AwesomeCVHeader,
        footer: AwesomeCVFooter,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            config,
            header,
            footer,
            sections,
        }
    }

    pub fn builder() -> crate::builders::AwesomeCVResumeBuilder {
        crate::builders::AwesomeCVResumeBuilder::new()
    }
}
