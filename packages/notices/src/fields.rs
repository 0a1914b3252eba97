//! Extraction of the atomic fields of a notice block.
//!
//! Each field is an independent first-match search over the whole block.
//! A field whose pattern does not match is left empty; extraction never fails.

use regex::Regex;

use crate::config::{
    CLASSIFICATION_CODE, CLASSIFICATION_DESCRIPTION, KNOWN_LABEL, LOCATION_CODE, LOCATION_LINE,
    NOTICE_NUMBER, ORDER_NUMBER, PERSON, STATE, TIMESTAMP,
};

/// A located `dd.mm.yyyy hh:mm:ss` timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampMatch {
    /// Timestamp truncated to minutes, `dd.mm.yyyy hh:mm`.
    pub truncated: String,

    /// The matched text, `dd.mm.yyyy hh:mm:ss`.
    pub full: String,

    /// Byte offset just past the match within the block.
    pub end: usize,
}

/// Atomic fields of one notice block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub location_code: String,
    pub location_description: Option<String>,
    pub notice_number: Option<String>,
    pub order_number: Option<String>,
    pub classification_code: u32,
    pub classification_description: Option<String>,
    pub state: Option<String>,
    pub timestamp: Option<TimestampMatch>,
    pub person: Option<String>,
}

/// Extract every atomic field from a block.
///
/// # Examples
/// ```
/// use notice_parser::fields::extract_fields;
///
/// let fields = extract_fields("Ub.Tec.: ABC-1 Pump room\nClase Aviso: 30 X - Y - Leak");
/// assert_eq!(fields.location_code, "ABC-1");
/// assert_eq!(fields.classification_code, 30);
/// ```
#[must_use]
pub fn extract_fields(block: &str) -> Fields {
    Fields {
        location_code: first_capture(&LOCATION_CODE, block).unwrap_or_default(),
        location_description: extract_location_description(block),
        notice_number: first_capture(&NOTICE_NUMBER, block),
        order_number: first_capture(&ORDER_NUMBER, block),
        classification_code: extract_classification_code(block),
        classification_description: first_capture(&CLASSIFICATION_DESCRIPTION, block),
        state: first_capture(&STATE, block),
        timestamp: find_timestamp(block),
        person: first_capture(&PERSON, block),
    }
}

/// Trimmed first capture group of the first match, if non-empty.
fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Remainder of the anchor line, cut at the first label that follows it.
fn extract_location_description(block: &str) -> Option<String> {
    let line = LOCATION_LINE.captures(block)?.get(1)?.as_str();
    let line = match KNOWN_LABEL.find(line) {
        Some(label) => &line[..label.start()],
        None => line,
    };
    let description = line.trim();
    (!description.is_empty()).then(|| description.to_string())
}

/// Numeric notice class; 0 when missing or out of range.
fn extract_classification_code(block: &str) -> u32 {
    first_capture(&CLASSIFICATION_CODE, block)
        .and_then(|code| code.parse().ok())
        .unwrap_or(0)
}

/// Locate the first full timestamp in a block.
#[must_use]
pub fn find_timestamp(block: &str) -> Option<TimestampMatch> {
    let caps = TIMESTAMP.captures(block)?;
    let whole = caps.get(0)?;
    Some(TimestampMatch {
        truncated: format!("{} {}:{}", &caps[1], &caps[2], &caps[3]),
        full: whole.as_str().to_string(),
        end: whole.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "Ub.Tec.: SE-ST-EAF1-02-ED-EA-01-03 CELDA DE SALIDA Gr. Plan.: AE2\n\
Nº Aviso: 1209696498 Clase Aviso: 30 MttoCorr - Avería Urgente / Inmediato Seccionador HEA2 no entra\n\
Nº Orden: 119818332 Estado: PLAN CNF PNR Seccionador HEA2 no entra\n\
27.12.2025 13:25:50 CET LEONTI ALEXANDRU MATEAS (893618)\n\
S:Nos dicen que tienen time out\n";

    #[test]
    fn test_extract_fields_full_block() {
        let fields = extract_fields(SAMPLE);

        assert_eq!(fields.location_code, "SE-ST-EAF1-02-ED-EA-01-03");
        assert_eq!(fields.location_description.as_deref(), Some("CELDA DE SALIDA"));
        assert_eq!(fields.notice_number.as_deref(), Some("1209696498"));
        assert_eq!(fields.order_number.as_deref(), Some("119818332"));
        assert_eq!(fields.classification_code, 30);
        assert_eq!(
            fields.classification_description.as_deref(),
            Some("MttoCorr - Avería Urgente / Inmediato Seccionador HEA2 no entra")
        );
        assert_eq!(fields.state.as_deref(), Some("PLAN CNF PNR"));
        assert_eq!(fields.person.as_deref(), Some("LEONTI ALEXANDRU MATEAS"));

        let timestamp = fields.timestamp.unwrap();
        assert_eq!(timestamp.truncated, "27.12.2025 13:25");
        assert_eq!(timestamp.full, "27.12.2025 13:25:50");
        assert_eq!(&SAMPLE[timestamp.end..timestamp.end + 4], " CET");
    }

    #[test]
    fn test_extract_fields_location_only() {
        let fields = extract_fields("Ub.Tec.: ABC-1");
        assert_eq!(
            fields,
            Fields {
                location_code: "ABC-1".to_string(),
                ..Fields::default()
            }
        );
    }

    #[test]
    fn test_location_description_without_planner_group() {
        let fields = extract_fields("Ub.Tec.: ABC-1 DESC\nClase Aviso: 30 X - Y - Title");
        assert_eq!(fields.location_description.as_deref(), Some("DESC"));
    }

    #[test]
    fn test_location_description_stays_on_anchor_line() {
        let fields = extract_fields("Ub.Tec.: ABC-1\nClase Aviso: 30 X - Y - Title");
        assert_eq!(fields.location_description, None);
    }

    #[test]
    fn test_location_code_missing() {
        let fields = extract_fields("Ub.Tec.: \nClase Aviso: 20");
        assert_eq!(fields.location_code, "");
        assert_eq!(fields.classification_code, 20);
    }

    #[test]
    fn test_classification_description_two_segments() {
        let fields = extract_fields("Clase Aviso: 30 X - Y - Some Title");
        assert_eq!(fields.classification_description.as_deref(), Some("X - Y"));
    }

    #[test]
    fn test_classification_code_overflow_defaults_to_zero() {
        let fields = extract_fields("Clase Aviso: 99999999999999999999");
        assert_eq!(fields.classification_code, 0);
    }

    #[test]
    fn test_state_plain() {
        let fields = extract_fields("Estado: PLAN\n27.12.2025 13:25:50 CET NAME (123)");
        assert_eq!(fields.state.as_deref(), Some("PLAN"));
        assert_eq!(fields.person.as_deref(), Some("NAME"));
    }

    #[test]
    fn test_person_at_end_of_line_without_id() {
        let fields = extract_fields("01.02.2025 08:00:00 CEST MARIA LOPEZ\nS: x");
        assert_eq!(fields.person.as_deref(), Some("MARIA LOPEZ"));
    }

    #[test]
    fn test_person_at_end_of_crlf_line() {
        let fields = extract_fields("01.02.2025 08:00:00 CEST MARIA LOPEZ\r\nS: x");
        assert_eq!(fields.person.as_deref(), Some("MARIA LOPEZ"));
    }

    #[test]
    fn test_timestamp_needs_seconds() {
        assert_eq!(find_timestamp("27.12.2025 13:25"), None);
    }
}
