//! Document parser that ties segmentation and extraction together.

use crate::fields::extract_fields;
use crate::sections::extract_sections;
use crate::segment::segment;
use crate::title::TitleResolver;
use crate::types::{Notice, ParsedDocument};

/// Parse report text into notices.
///
/// Blocks without a location code are dropped. Empty text yields an empty
/// vector.
///
/// # Examples
/// ```
/// use notice_parser::parse_notices;
///
/// let notices = parse_notices("Ub.Tec.: ABC-1 Sala de bombas\nS: Fuga");
/// assert_eq!(notices.len(), 1);
/// assert_eq!(notices[0].title, "Sala de bombas");
/// ```
#[must_use]
pub fn parse_notices(text: &str) -> Vec<Notice> {
    parse_document(text).notices
}

/// Parse report text into notices, collecting non-fatal warnings.
///
/// Returns the same notices as [`parse_notices`]. Warnings describe dropped
/// blocks and notices whose timestamp could not be found.
#[must_use]
pub fn parse_document(text: &str) -> ParsedDocument {
    let resolver = TitleResolver::default();
    let mut document = ParsedDocument::default();

    for (index, block) in segment(text).enumerate() {
        let fields = extract_fields(block);

        if fields.location_code.is_empty() {
            tracing::debug!(block = index + 1, "Block has no location code, skipping");
            document
                .warnings
                .push(format!("Block {}: no location code, block dropped", index + 1));
            continue;
        }

        if fields.timestamp.is_none() {
            document.warnings.push(format!(
                "Notice {}: no timestamp found",
                fields.location_code
            ));
        }

        let title = resolver.resolve(block, &fields);
        let narrative = extract_sections(block, fields.timestamp.as_ref());
        let (timestamp, raw_timestamp) = match fields.timestamp {
            Some(ts) => (Some(ts.truncated), Some(ts.full)),
            None => (None, None),
        };

        document.notices.push(Notice {
            location_code: fields.location_code,
            location_description: fields.location_description,
            notice_number: fields.notice_number,
            order_number: fields.order_number,
            classification_code: fields.classification_code,
            classification_description: fields.classification_description,
            state: fields.state,
            title: title.text,
            title_source: title.source,
            timestamp,
            raw_timestamp,
            person: fields.person,
            narrative,
        });
    }

    tracing::debug!(
        notices = document.notices.len(),
        warnings = document.warnings.len(),
        "Parsed document"
    );

    document
}
