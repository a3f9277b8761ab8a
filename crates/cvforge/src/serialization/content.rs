//! The `{type, content?}` wrapper codec for section contents.
//!
//! Encoding rules:
//! - `type` always carries the discriminant name.
//! - `content` is omitted for the zero-payload kinds (divider, newline,
//!   newpage); `Empty` nodes serialize to nothing at all and are dropped
//!   from list encodings.
//! - Simple-text kinds carry their string directly; everything else carries
//!   its structural object encoding.
//!
//! Decoding reads `type` first (missing or unknown is fatal) and dispatches.
//! Two payload-shape heuristics are load-bearing wire compatibility rules
//! and must not be "fixed": a `SKILL` payload with a `fluency` key is the
//! fluency variant, and a duration whose `start` matches `yyyy-MM` is a date
//! period.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::content::{ContentType, SectionContent, Skill};
use crate::domain::period::{matches_year_month, EventPeriod};
use crate::errors::{Error, Result};

const TYPE: &str = "type";
const CONTENT: &str = "content";
const FLUENCY: &str = "fluency";
const START: &str = "start";
const END: &str = "end";

// ────────────────────────────────────────────────────────────────────────────
// Encoding
// ────────────────────────────────────────────────────────────────────────────

/// Encodes one content node as its wrapper object.
///
/// Returns `None` for [`SectionContent::Empty`]: an empty node has no wire
/// representation and must be left out of whatever carries it.
pub fn encode_content(content: &SectionContent) -> Result<Option<Value>> {
    let payload = match content {
        SectionContent::Empty => return Ok(None),
        SectionContent::Divider | SectionContent::NewLine | SectionContent::NewPage => None,
        SectionContent::Tag(text)
        | SectionContent::Quote(text)
        | SectionContent::Paragraph(text)
        | SectionContent::Latex(text) => Some(Value::String(text.clone())),
        SectionContent::Achievement(a) => Some(serde_json::to_value(a)?),
        SectionContent::Skill(s) => Some(serde_json::to_value(s)?),
        SectionContent::SkillStr(s) => Some(serde_json::to_value(s)?),
        SectionContent::Item(item) => Some(serde_json::to_value(item)?),
        SectionContent::Event(event) | SectionContent::Entry(event) => Some(serde_json::to_value(event)?),
        SectionContent::WheelChart(chart) => Some(serde_json::to_value(chart)?),
        SectionContent::HonorList(honors) => Some(serde_json::to_value(honors)?),
    };

    let mut wrapper = Map::new();
    wrapper.insert(TYPE.to_owned(), Value::String(content.content_type().as_str().to_owned()));
    if let Some(payload) = payload {
        wrapper.insert(CONTENT.to_owned(), payload);
    }

    Ok(Some(Value::Object(wrapper)))
}

/// Encodes a content list as a JSON array of wrappers, in stored order, with
/// `Empty` members dropped.
pub fn encode_contents(contents: &[SectionContent]) -> Result<Value> {
    let mut items = Vec::with_capacity(contents.len());
    for content in contents {
        if let Some(value) = encode_content(content)? {
            items.push(value);
        }
    }
    Ok(Value::Array(items))
}

// ────────────────────────────────────────────────────────────────────────────
// Decoding
// ────────────────────────────────────────────────────────────────────────────

/// Decodes one wrapper object back into a content node.
pub fn decode_content(value: &Value) -> Result<SectionContent> {
    let type_name = value
        .get(TYPE)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Decode("content wrapper is missing its \"type\" discriminant".to_owned()))?;
    let content_type: ContentType = type_name.parse()?;
    let content = value.get(CONTENT);

    match content_type {
        ContentType::Divider => Ok(SectionContent::Divider),
        ContentType::NewLine => Ok(SectionContent::NewLine),
        ContentType::NewPage => Ok(SectionContent::NewPage),
        ContentType::Empty => Ok(SectionContent::Empty),
        ContentType::Tag => Ok(SectionContent::Tag(text_payload(content, content_type)?)),
        ContentType::Quote => Ok(SectionContent::Quote(text_payload(content, content_type)?)),
        ContentType::Paragraph => Ok(SectionContent::Paragraph(text_payload(content, content_type)?)),
        ContentType::Generic => Ok(SectionContent::Latex(text_payload(content, content_type)?)),
        ContentType::Achievement => Ok(SectionContent::Achievement(object_payload(content, content_type)?)),
        ContentType::Skill => {
            let payload = content
                .filter(|v| v.is_object())
                .ok_or_else(|| Error::Decode(format!("{content_type} content must be an object")))?;
            // Which skill kind this is has no sub-discriminant on the wire;
            // the presence of a `fluency` key decides.
            if payload.get(FLUENCY).is_some() {
                Ok(SectionContent::SkillStr(serde_json::from_value(payload.clone())?))
            } else {
                Ok(SectionContent::Skill(serde_json::from_value(payload.clone())?))
            }
        }
        ContentType::Event => Ok(SectionContent::Event(object_payload(content, content_type)?)),
        ContentType::EventEntry => Ok(SectionContent::Entry(object_payload(content, content_type)?)),
        ContentType::Item => Ok(SectionContent::Item(object_payload(content, content_type)?)),
        ContentType::WheelChart => Ok(SectionContent::WheelChart(object_payload(content, content_type)?)),
        ContentType::HonorList => Ok(SectionContent::HonorList(object_payload(content, content_type)?)),
    }
}

/// Decodes a JSON array of wrappers, preserving array order.
pub fn decode_contents(value: &Value) -> Result<Vec<SectionContent>> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::Decode("expected a JSON array of content wrappers".to_owned()))?;
    items.iter().map(decode_content).collect()
}

fn text_payload(content: Option<&Value>, content_type: ContentType) -> Result<String> {
    content
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::Decode(format!("{content_type} content must be a string")))
}

fn object_payload<T: DeserializeOwned>(content: Option<&Value>, content_type: ContentType) -> Result<T> {
    let value = content.ok_or_else(|| Error::Decode(format!("{content_type} content is missing")))?;
    Ok(serde_json::from_value(value.clone())?)
}

// ────────────────────────────────────────────────────────────────────────────
// serde glue
// ────────────────────────────────────────────────────────────────────────────

/// `serialize_with` hook for `Vec<SectionContent>` fields.
pub fn serialize_contents<S>(contents: &[SectionContent], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let encoded = encode_contents(contents).map_err(serde::ser::Error::custom)?;
    encoded.serialize(serializer)
}

/// `deserialize_with` hook for `Vec<SectionContent>` fields.
pub fn deserialize_contents<'de, D>(deserializer: D) -> std::result::Result<Vec<SectionContent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    decode_contents(&value).map_err(serde::de::Error::custom)
}

impl SectionContent {
    /// Serializes this node as a standalone wrapper document. An `Empty`
    /// node yields the empty string.
    pub fn to_json(&self) -> Result<String> {
        match encode_content(self)? {
            Some(value) => Ok(serde_json::to_string(&value)?),
            None => Ok(String::new()),
        }
    }

    /// Decodes a standalone wrapper document.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        decode_content(&value)
    }
}

impl Serialize for EventPeriod {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Only reachable when serialized outside an event; an absent
            // duration has no fields of its own.
            EventPeriod::NoPeriod => serializer.serialize_map(Some(0))?.end(),
            EventPeriod::StringPeriod { start, end } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(START, start)?;
                map.serialize_entry(END, end)?;
                map.end()
            }
            EventPeriod::DatePeriod { start, end } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry(START, &start.format("%Y-%m").to_string())?;
                map.serialize_entry(END, &end.format("%Y-%m").to_string())?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for EventPeriod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawPeriod {
            start: String,
            #[serde(default)]
            end: String,
        }

        let raw = RawPeriod::deserialize(deserializer)?;
        if matches_year_month(&raw.start) {
            EventPeriod::dates(&raw.start, &raw.end).map_err(serde::de::Error::custom)
        } else {
            Ok(EventPeriod::text(raw.start, raw.end))
        }
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSkill {
            skill: String,
            rating: f64,
        }

        let raw = RawSkill::deserialize(deserializer)?;
        Skill::new(raw.skill, raw.rating).map_err(serde::de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
