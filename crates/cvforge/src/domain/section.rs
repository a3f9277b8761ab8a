//! Sections: ordered containers of content nodes with column/order placement.

use serde::{Deserialize, Serialize};

use crate::domain::content::SectionContent;
use crate::errors::{Error, Result};

/// Placement of a section: which column it lives in (1 or 2) and its
/// vertical order within that column.
///
/// The column constraint is enforced on every construction path, including
/// decoding, so an out-of-range column cannot exist in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionPosition {
    column: u8,
    order: i32,
}

impl SectionPosition {
    pub fn new(column: u8, order: i32) -> Result<Self> {
        if !(1..=2).contains(&column) {
            return Err(Error::Validation("column position: should be 1 or 2".to_owned()));
        }
        Ok(Self { column, order })
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn order(&self) -> i32 {
        self.order
    }
}

impl<'de> Deserialize<'de> for SectionPosition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawPosition {
            column: u8,
            order: i32,
        }

        let raw = RawPosition::deserialize(deserializer)?;
        SectionPosition::new(raw.column, raw.order).map_err(serde::de::Error::custom)
    }
}

/// Placement in the first column at the given order.
pub fn first_column(order: i32) -> SectionPosition {
    SectionPosition { column: 1, order }
}

/// Placement in the second column at the given order.
pub fn second_column(order: i32) -> SectionPosition {
    SectionPosition { column: 2, order }
}

/// A titled, positioned run of content nodes.
///
/// `contents` keeps insertion order; sorting by `order` and dropping
/// `ignored` sections happens at render time only. `ignored` is an in-memory
/// switch and is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub position: SectionPosition,
    #[serde(
        serialize_with = "crate::serialization::content::serialize_contents",
        deserialize_with = "crate::serialization::content::deserialize_contents",
        default
    )]
    pub contents: Vec<SectionContent>,
    #[serde(skip)]
    pub ignored: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, position: SectionPosition, contents: Vec<SectionContent>) -> Self {
        Self {
            title: title.into(),
            position,
            contents,
            ignored: false,
        }
    }

    pub fn builder(title: impl Into<String>, position: SectionPosition) -> crate::builders::SectionBuilder {
        crate::builders::SectionBuilder::new(title, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Item;

    #[test]
    fn test_position_helpers() {
        let p1 = first_column(2);
        assert_eq!(p1.column(), 1);
        assert_eq!(p1.order(), 2);
        assert_eq!(p1, SectionPosition::new(1, 2).unwrap());

        let p2 = second_column(5);
        assert_eq!(p2.column(), 2);
        assert_eq!(p2.order(), 5);
        assert_eq!(p2, SectionPosition::new(2, 5).unwrap());
    }

    #[test]
    fn test_position_rejects_other_columns() {
        for column in [0, 3, 5] {
            let err = SectionPosition::new(column, 6).unwrap_err();
            assert_eq!(err.to_string(), "column position: should be 1 or 2");
        }
    }

    #[test]
    fn test_section_without_contents() {
        let section = Section::new("Experience", first_column(3), Vec::new());
        assert_eq!(section.title, "Experience");
        assert_eq!(section.position.column(), 1);
        assert_eq!(section.position.order(), 3);
        assert!(!section.ignored);
        assert!(section.contents.is_empty());
    }

    #[test]
    fn test_section_keeps_insertion_order() {
        let contents = vec![
            SectionContent::Item(Item::new("This is an item")),
            SectionContent::Latex("\\medskip".to_owned()),
            SectionContent::Tag("This is a tag".to_owned()),
        ];
        let section = Section::new("Example", second_column(3), contents.clone());
        assert_eq!(section.contents, contents);
    }
}
