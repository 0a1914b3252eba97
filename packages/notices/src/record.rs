//! Persistence-ready notice records.
//!
//! Storage assigns identifiers and owns the schema; this module prepares what
//! it stores: a canonical date, the operational zone and a composite display
//! text built from the narrative sections.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{NoticeError, Result};
use crate::types::Notice;
use crate::zone::{classify_zone, Zone};

/// Timestamp layout produced by the parser.
const NOTICE_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Timestamp layout expected by storage.
const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Width of the separator between the header and the narrative.
const SEPARATOR_WIDTH: usize = 40;

/// A notice in the shape storage expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeRecord {
    /// `YYYY-MM-DD HH:MM`, the raw timestamp if it did not convert, or empty.
    pub date: String,
    pub zone: Zone,
    pub title: String,
    pub display_text: String,
    pub classification_code: u32,
    pub location_code: String,
    pub location_description: String,
}

impl NoticeRecord {
    /// Build a record from a parsed notice.
    ///
    /// A timestamp that fails to convert is kept as is and logged.
    #[must_use]
    pub fn from_notice(notice: &Notice) -> Self {
        let date = match notice.timestamp.as_deref() {
            Some(raw) => canonical_timestamp(raw).unwrap_or_else(|e| {
                tracing::warn!(
                    location = %notice.location_code,
                    error = %e,
                    "Keeping unconverted timestamp"
                );
                raw.to_string()
            }),
            None => String::new(),
        };

        Self {
            date,
            zone: classify_zone(&notice.location_code),
            title: notice.title.clone(),
            display_text: render_display_text(notice),
            classification_code: notice.classification_code,
            location_code: notice.location_code.clone(),
            location_description: notice.location_description.clone().unwrap_or_default(),
        }
    }
}

/// Convert a `dd.mm.yyyy hh:mm` timestamp to `YYYY-MM-DD HH:MM`.
///
/// # Examples
/// ```
/// use notice_parser::record::canonical_timestamp;
///
/// assert_eq!(canonical_timestamp("27.12.2025 13:25").unwrap(), "2025-12-27 13:25");
/// assert!(canonical_timestamp("31.02.2025 10:00").is_err());
/// ```
pub fn canonical_timestamp(timestamp: &str) -> Result<String> {
    NaiveDateTime::parse_from_str(timestamp.trim(), NOTICE_TIMESTAMP_FORMAT)
        .map(|dt| dt.format(CANONICAL_TIMESTAMP_FORMAT).to_string())
        .map_err(|_| NoticeError::MalformedTimestamp(timestamp.to_string()))
}

/// Render the composite text shown for a stored notice.
///
/// A header of labelled fields, a separator, then the present sections under
/// their long names, or the full narrative when no section is present.
#[must_use]
pub fn render_display_text(notice: &Notice) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    let mut text = String::new();
    text.push_str(&format!(
        "TYPE: {} - {}\n",
        notice.classification_code,
        field(&notice.classification_description)
    ));
    text.push_str(&format!("LOCATION: {}\n", notice.location_code));
    text.push_str(&format!(
        "LOCATION DESCRIPTION: {}\n",
        field(&notice.location_description)
    ));
    text.push_str(&format!("NOTICE NO: {}\n", field(&notice.notice_number)));
    text.push_str(&format!("ORDER NO: {}\n", field(&notice.order_number)));
    text.push_str(&format!("STATE: {}\n", field(&notice.state)));
    text.push_str(&format!("PERSON: {}\n", field(&notice.person)));
    text.push_str(&format!("FULL DATE: {}\n", field(&notice.raw_timestamp)));
    text.push_str(&"-".repeat(SEPARATOR_WIDTH));
    text.push_str("\n\n");

    let narrative = &notice.narrative;
    if narrative.has_sections() {
        for (letter, section) in narrative.sections() {
            if let Some(section) = section {
                text.push_str(&format!("{} ({}):\n{section}\n\n", letter, section_name(letter)));
            }
        }
    } else {
        text.push_str(&format!("DESCRIPTION:\n{}\n", narrative.full_text));
    }

    text
}

fn section_name(letter: char) -> &'static str {
    match letter {
        'S' => "Situation",
        'O' => "Observation",
        'R' => "Resolution",
        _ => "Action",
    }
}

/// Prepare records for a batch of notices, preserving order.
///
/// A notice whose date fails to convert still yields a record.
#[must_use]
pub fn prepare_records(notices: &[Notice]) -> Vec<NoticeRecord> {
    notices.iter().map(NoticeRecord::from_notice).collect()
}
