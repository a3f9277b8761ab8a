//! AltaCV-specific model: color palettes, photo, user info and the resume
//! root for the two-column AltaCV template.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::section::Section;
use crate::domain::PhotoDirection;
use crate::errors::{Error, Result};

static ORCID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{4}$").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

/// Semantic color roles of the AltaCV theme. A complete palette maps every
/// alias to a color; reusing one color for several aliases is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RColorAlias {
    #[serde(rename = "tagline")]
    Tagline,
    #[serde(rename = "headingrule")]
    HeadingRule,
    #[serde(rename = "heading")]
    Heading,
    #[serde(rename = "accent")]
    Accent,
    #[serde(rename = "emphasis")]
    Emphasis,
    #[serde(rename = "body")]
    Body,
}

impl RColorAlias {
    pub const ALL: [RColorAlias; 6] = [
        RColorAlias::Tagline,
        RColorAlias::HeadingRule,
        RColorAlias::Heading,
        RColorAlias::Accent,
        RColorAlias::Emphasis,
        RColorAlias::Body,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RColorAlias::Tagline => "tagline",
            RColorAlias::HeadingRule => "headingrule",
            RColorAlias::Heading => "heading",
            RColorAlias::Accent => "accent",
            RColorAlias::Emphasis => "emphasis",
            RColorAlias::Body => "body",
        }
    }
}

/// A named color with its hex value (no `#` prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RColor {
    pub color_name: String,
    pub color_hex_value: String,
}

impl RColor {
    pub fn new(color_name: impl Into<String>, color_hex_value: impl Into<String>) -> Self {
        Self {
            color_name: color_name.into(),
            color_hex_value: color_hex_value.into(),
        }
    }

    pub fn pastel_red() -> Self {
        Self::new("PastelRed", "8F0D0D")
    }

    pub fn golden_earth() -> Self {
        Self::new("GoldenEarth", "E7D192")
    }

    pub fn dark_pastel_red() -> Self {
        Self::new("DarkPastelRed", "450808")
    }

    pub fn slate_grey() -> Self {
        Self::new("SlateGrey", "2E2E2E")
    }

    pub fn light_grey() -> Self {
        Self::new("LightGrey", "666666")
    }

    pub fn mulberry() -> Self {
        Self::new("Mulberry", "72243D")
    }

    pub fn vivid_purple() -> Self {
        Self::new("VividPurple", "3E0097")
    }

    pub fn sepia() -> Self {
        Self::new("Sepia", "581C09")
    }
}

/// Mapping from color aliases to concrete colors.
pub type ColorPalette = BTreeMap<RColorAlias, RColor>;

/// The default red/gold palette.
pub fn theme1() -> ColorPalette {
    BTreeMap::from([
        (RColorAlias::Tagline, RColor::pastel_red()),
        (RColorAlias::HeadingRule, RColor::golden_earth()),
        (RColorAlias::Heading, RColor::dark_pastel_red()),
        (RColorAlias::Accent, RColor::pastel_red()),
        (RColorAlias::Emphasis, RColor::slate_grey()),
        (RColorAlias::Body, RColor::light_grey()),
    ])
}

/// A monochrome purple palette.
pub fn theme2() -> ColorPalette {
    BTreeMap::from([
        (RColorAlias::Tagline, RColor::vivid_purple()),
        (RColorAlias::HeadingRule, RColor::vivid_purple()),
        (RColorAlias::Heading, RColor::vivid_purple()),
        (RColorAlias::Accent, RColor::vivid_purple()),
        (RColorAlias::Emphasis, RColor::slate_grey()),
        (RColorAlias::Body, RColor::light_grey()),
    ])
}

/// A warm sepia/mulberry palette.
pub fn theme3() -> ColorPalette {
    BTreeMap::from([
        (RColorAlias::Tagline, RColor::pastel_red()),
        (RColorAlias::HeadingRule, RColor::golden_earth()),
        (RColorAlias::Heading, RColor::sepia()),
        (RColorAlias::Accent, RColor::mulberry()),
        (RColorAlias::Emphasis, RColor::slate_grey()),
        (RColorAlias::Body, RColor::light_grey()),
    ])
}

// ────────────────────────────────────────────────────────────────────────────
// Photo
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoShape {
    Circle,
    #[default]
    Normal,
}

/// A header photo: size in centimeters, file path, and placement side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub size: f64,
    pub path: String,
    #[serde(default)]
    pub direction: PhotoDirection,
}

impl Photo {
    pub fn new(size: f64, path: impl Into<String>) -> Self {
        Self {
            size,
            path: path.into(),
            direction: PhotoDirection::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// User info
// ────────────────────────────────────────────────────────────────────────────

/// Field names whose symbol and prefix are fixed by the template. These
/// serialize without `symbol`/`prefix` and render as `\<fieldName>{value}`.
pub(crate) const USER_CONTACT_FIELDS: [&str; 9] = [
    "email",
    "phone",
    "mailaddress",
    "location",
    "homepage",
    "twitter",
    "linkedin",
    "github",
    "orcid",
];

/// One line of personal information in the AltaCV header.
///
/// Equality and hashing are structural over all four attributes, no matter
/// which constructor produced the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserInfoField {
    pub field_name: String,
    pub symbol: String,
    pub prefix: String,
    pub value: String,
}

impl UserInfoField {
    fn known(field_name: &str, symbol: &str, prefix: &str, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.to_owned(),
            symbol: symbol.to_owned(),
            prefix: prefix.to_owned(),
            value: value.into(),
        }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self::known("email", "\\faAt", "mailto:", value)
    }

    pub fn phone(value: impl Into<String>) -> Self {
        Self::known("phone", "\\faPhone", "tel:", value)
    }

    pub fn mail_address(value: impl Into<String>) -> Self {
        Self::known("mailaddress", "\\faEnvelope", "", value)
    }

    pub fn location(value: impl Into<String>) -> Self {
        Self::known("location", "\\cvLocationMarker", "", value)
    }

    pub fn home_page(value: impl Into<String>) -> Self {
        Self::known("homepage", "\\faGlobe", "https://", value)
    }

    pub fn twitter(value: impl Into<String>) -> Self {
        Self::known("twitter", "\\faTwitter", "https://twitter.com/", value)
    }

    pub fn github(value: impl Into<String>) -> Self {
        Self::known("github", "\\faGithub", "https://github.com/", value)
    }

    pub fn linkedin(value: impl Into<String>) -> Self {
        Self::known("linkedin", "\\faLinkedin", "https://linkedin.com/in/", value)
    }

    /// ORCID identifier; the value must match `dddd-dddd-dddd-dddd`.
    pub fn orcid(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !ORCID.is_match(&value) {
            return Err(Error::Validation(format!(
                "Invalid ORCID: {value}. Expected format: dddd-dddd-dddd-dddd"
            )));
        }
        Ok(Self::known("orcid", "\\faOrcid", "https://orcid.org/", value))
    }

    /// A field outside the fixed contact set; carries its own symbol and
    /// hyperlink prefix and serializes all four attributes.
    pub fn custom(
        field_name: impl Into<String>,
        symbol: impl Into<String>,
        prefix: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            symbol: symbol.into(),
            prefix: prefix.into(),
            value: value.into(),
        }
    }

    pub fn is_well_known(&self) -> bool {
        USER_CONTACT_FIELDS.contains(&self.field_name.as_str())
    }
}

/// The resume owner: display name plus personal info lines, kept in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub personal_info: Vec<UserInfoField>,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, personal_info: Vec<UserInfoField>) -> Self {
        Self {
            name: name.into(),
            personal_info,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Config / header / resume
// ────────────────────────────────────────────────────────────────────────────

/// Layout and styling knobs of the AltaCV template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AltaCVConfig {
    pub column_ratio: f64,
    pub photo_shape: PhotoShape,
    pub theme: ColorPalette,
}

impl Default for AltaCVConfig {
    fn default() -> Self {
        Self {
            column_ratio: 0.6,
            photo_shape: PhotoShape::default(),
            theme: theme1(),
        }
    }
}

/// The AltaCV header: tagline, owner info, optional photo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AltaCVHeader {
    pub tagline: String,
    pub user_info: Option<UserInfo>,
    pub photo: Option<Photo>,
}

impl AltaCVHeader {
    pub fn new(tagline: impl Into<String>, user_info: Option<UserInfo>, photo: Option<Photo>) -> Self {
        Self {
            tagline: tagline.into(),
            user_info,
            photo,
        }
    }
}

/// Root aggregate for the AltaCV template. Built once, immutable afterwards;
/// "modification" means building a new value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AltaCVResume {
    pub config: AltaCVConfig,
    pub header: AltaCVHeader,
    pub sections: Vec<Section>,
}

impl AltaCVResume {
    pub fn new(config: AltaCVConfig, header: AltaCVHeader, sections: Vec<Section>) -> Self {
        Self {
            config,
            header,
            sections,
        }
    }

    pub fn builder() -> crate::builders::AltaCVResumeBuilder {
        crate::builders::AltaCVResumeBuilder::new()
    }
}
