//! Extraction of the S/O/R/A narrative sections of a notice block.

use crate::config::{
    LINKED_NOTIFICATION_LABEL, NOTIFICATION_NUMBER_LINE, SECTION_MARKER, TIMESTAMP_LINE,
    WORK_REFERENCE_LABEL,
};
use crate::fields::TimestampMatch;
use crate::types::Narrative;

/// A section marker found in the cleaned text.
#[derive(Debug, Clone, Copy)]
struct Marker {
    letter: char,
    start: usize,
    end: usize,
}

/// Extract the narrative sections of a block.
///
/// The narrative starts on the line after the block's timestamp, or at the
/// block start when there is none. Bookkeeping lines (notification numbers,
/// linked notifications, work references, restated timestamps) are dropped
/// before sections are located.
#[must_use]
pub fn extract_sections(block: &str, timestamp: Option<&TimestampMatch>) -> Narrative {
    let cleaned = clean_lines(narrative_text(block, timestamp));

    let markers: Vec<Marker> = SECTION_MARKER
        .captures_iter(&cleaned)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps[1].chars().next()?.to_ascii_uppercase();
            Some(Marker {
                letter,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    if markers.is_empty() {
        return Narrative {
            full_text: cleaned,
            ..Narrative::default()
        };
    }

    let mut narrative = Narrative {
        situation: section_text(&cleaned, &markers, 'S'),
        observation: section_text(&cleaned, &markers, 'O'),
        resolution: section_text(&cleaned, &markers, 'R'),
        action: section_text(&cleaned, &markers, 'A'),
        full_text: String::new(),
    };
    narrative.full_text = compose(&narrative);
    narrative
}

/// Slice of the block where the narrative begins.
fn narrative_text<'a>(block: &'a str, timestamp: Option<&TimestampMatch>) -> &'a str {
    let Some(timestamp) = timestamp else {
        return block;
    };
    let after = block.get(timestamp.end..).unwrap_or_default();
    match after.find('\n') {
        Some(newline) => &after[newline + 1..],
        None => "",
    }
}

/// Trim every line and drop bookkeeping lines.
fn clean_lines(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !is_bookkeeping_line(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_bookkeeping_line(line: &str) -> bool {
    NOTIFICATION_NUMBER_LINE.is_match(line)
        || line.starts_with(LINKED_NOTIFICATION_LABEL)
        || line.starts_with(WORK_REFERENCE_LABEL)
        || TIMESTAMP_LINE.is_match(line)
}

/// Text from the first marker of `letter` up to the next marker of another letter.
fn section_text(text: &str, markers: &[Marker], letter: char) -> Option<String> {
    let index = markers.iter().position(|m| m.letter == letter)?;
    let start = markers[index].end;
    let end = markers[index + 1..]
        .iter()
        .find(|m| m.letter != letter)
        .map_or(text.len(), |m| m.start);

    let content = text[start..end].trim();
    (!content.is_empty()).then(|| content.to_string())
}

/// Present sections as `X: text` lines in S, O, R, A order.
fn compose(narrative: &Narrative) -> String {
    narrative
        .sections()
        .filter_map(|(letter, text)| text.map(|t| format!("{letter}: {t}")))
        .collect::<Vec<_>>()
        .join("\n")
}
