//! Event durations: either free text ("Summer 2021 -- Ongoing") or calendar
//! month-year ranges parsed from `yyyy-MM` strings.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::{Error, Result};

static YEAR_MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());

/// The duration attached to an event or entry.
///
/// The wire form of both the text and date variants is a `{start, end}`
/// object of strings; which variant a document decodes to is decided by
/// whether `start` matches the `yyyy-MM` pattern (see the serialization
/// module). A missing duration is [`EventPeriod::NoPeriod`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventPeriod {
    #[default]
    NoPeriod,
    StringPeriod {
        start: String,
        end: String,
    },
    DatePeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl EventPeriod {
    /// A free-text period. `end` may be empty, in which case only the start
    /// is rendered.
    pub fn text(start: impl Into<String>, end: impl Into<String>) -> Self {
        EventPeriod::StringPeriod {
            start: start.into(),
            end: end.into(),
        }
    }

    /// A month-year period. Both bounds must match `yyyy-MM`; they are
    /// checked in order (start, then end) and parsed as the first day of
    /// their month.
    pub fn dates(start: &str, end: &str) -> Result<Self> {
        Ok(EventPeriod::DatePeriod {
            start: parse_year_month(start)?,
            end: parse_year_month(end)?,
        })
    }

    /// A month-year period that is still running: the end bound defaults to
    /// today.
    pub fn dates_from(start: &str) -> Result<Self> {
        Ok(EventPeriod::DatePeriod {
            start: parse_year_month(start)?,
            end: chrono::Local::now().date_naive(),
        })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EventPeriod::NoPeriod)
    }

    /// Renders the period for the duration slot of an event.
    pub fn render(&self) -> String {
        match self {
            EventPeriod::NoPeriod => String::new(),
            EventPeriod::StringPeriod { start, end } => {
                if end.is_empty() {
                    start.clone()
                } else {
                    format!("{start} -- {end}")
                }
            }
            EventPeriod::DatePeriod { start, end } => {
                format!("{} -- {}", start.format("%b %Y"), end.format("%b %Y"))
            }
        }
    }
}

/// True if `value` has the `yyyy-MM` shape the date variant is built from.
pub(crate) fn matches_year_month(value: &str) -> bool {
    YEAR_MONTH.is_match(value)
}

fn parse_year_month(value: &str) -> Result<NaiveDate> {
    let invalid = || Error::Validation(format!("Invalid date format: {value}. Expected format: yyyy-MM"));

    if !matches_year_month(value) {
        return Err(invalid());
    }

    // The pattern admits impossible months like "2023-13"; the parse rejects them.
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_text_period_keeps_both_bounds() {
        let period = EventPeriod::text("Month XXXX", "Ongoing");
        assert_eq!(
            period,
            EventPeriod::StringPeriod {
                start: "Month XXXX".to_owned(),
                end: "Ongoing".to_owned(),
            }
        );
    }

    #[test]
    fn test_text_period_without_end() {
        let period = EventPeriod::text("Project Duration", "");
        assert_eq!(period.render(), "Project Duration");
    }

    #[test]
    fn test_date_period_parses_first_of_month() {
        let period = EventPeriod::dates("2023-09", "2023-11").unwrap();
        assert_eq!(
            period,
            EventPeriod::DatePeriod {
                start: ymd(2023, 9, 1),
                end: ymd(2023, 11, 1),
            }
        );
    }

    #[test]
    fn test_date_period_rejects_free_text_start() {
        let err = EventPeriod::dates("Month XXXX", "Ongoing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: Month XXXX. Expected format: yyyy-MM"
        );
    }

    #[test]
    fn test_date_period_checks_start_before_end() {
        let err = EventPeriod::dates("2023-09", "Ongoing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: Ongoing. Expected format: yyyy-MM"
        );
    }

    #[test]
    fn test_date_period_rejects_impossible_month() {
        let err = EventPeriod::dates("2023-13", "2023-12").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: 2023-13. Expected format: yyyy-MM"
        );
    }

    #[test]
    fn test_dates_from_ends_today() {
        let period = EventPeriod::dates_from("2023-10").unwrap();
        match period {
            EventPeriod::DatePeriod { start, end } => {
                assert_eq!(start, ymd(2023, 10, 1));
                assert!(end >= start);
            }
            other => panic!("expected a date period, got {other:?}"),
        }
    }

    #[test]
    fn test_render_no_period_is_empty() {
        assert_eq!(EventPeriod::NoPeriod.render(), "");
        assert!(EventPeriod::NoPeriod.is_none());
    }

    #[test]
    fn test_render_text_period_joins_with_dashes() {
        assert_eq!(EventPeriod::text("Oct 23", "Nov 23").render(), "Oct 23 -- Nov 23");
    }

    #[test]
    fn test_render_date_period_abbreviates_months() {
        let period = EventPeriod::dates("2023-10", "2023-11").unwrap();
        assert_eq!(period.render(), "Oct 2023 -- Nov 2023");
    }

    #[test]
    fn test_matches_year_month() {
        assert!(matches_year_month("2023-10"));
        assert!(!matches_year_month("2023-10-01"));
        assert!(!matches_year_month("Oct 23"));
        assert!(!matches_year_month(""));
    }
}
