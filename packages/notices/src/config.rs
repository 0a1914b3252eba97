//! Labels, prefix lists and compiled patterns for maintenance report text.
//!
//! Everything here is immutable process-wide data. Patterns are compiled once
//! on first use and shared by every parse call.

use regex::Regex;
use std::sync::LazyLock;

/// Label that opens every notice block ("ubicación técnica").
pub const ANCHOR: &str = "Ub.Tec.:";

/// Planner group label that trails the location description.
pub const PLANNER_GROUP_LABEL: &str = "Gr. Plan.:";

/// Classification label, followed by the numeric notice class.
pub const CLASSIFICATION_LABEL: &str = "Clase Aviso:";

/// State label, followed by uppercase status codes.
pub const STATE_LABEL: &str = "Estado:";

/// Linked-notification label; such lines are dropped from narratives.
pub const LINKED_NOTIFICATION_LABEL: &str = "L.Notif:";

/// Work-reference label; such lines are dropped from narratives.
pub const WORK_REFERENCE_LABEL: &str = "Trabajo:";

/// Title used when no strategy produces text.
pub const GENERIC_TITLE: &str = "generic technical notice";

/// Result of normalizing a blank title.
pub const UNTITLED: &str = "untitled";

/// Number of trailing characters of a short location code used as a title.
pub const LOCATION_CODE_TAIL_CHARS: usize = 15;

/// Organizational prefixes removed by [`crate::title::normalize_title`].
///
/// Order matters: the first entry that matches is the only one stripped.
pub const TITLE_PREFIXES: [&str; 10] = [
    "SCE CNF ",
    "PLAN CNF ",
    "SCE PNR CNF ",
    "SCE ",
    "PLAN ",
    "CNF ",
    "PNR ",
    "SCE CNF",
    "PLAN CNF",
    "SCE PNR CNF",
];

/// Status codes still left on the state line once the state run is removed.
///
/// Longest combinations first; at most one is stripped.
pub const STATE_PREFIXES: [&str; 5] = ["PLAN CNF PNR", "PLAN CNF", "SCE CNF", "CNF", "PNR"];

/// Number mark as it comes out of text extraction: "Nº", "N°", "No" or "No.".
const NUMBER_MARK: &str = r"N(?:º|°|o\.?)";

#[allow(clippy::expect_used)] // Only called with the static patterns below
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

/// Location code right after the anchor.
pub static LOCATION_CODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Ub\.Tec\.:[ \t]*([A-Za-z0-9-]+)"));

/// Remainder of the anchor line after the location code.
pub static LOCATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Ub\.Tec\.:[ \t]*[A-Za-z0-9-]+[ \t]+([^\n]*)"));

/// Any label that can follow free text on the same line.
pub static KNOWN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"Gr\. Plan\.:|{NUMBER_MARK}[ \t]*(?:Aviso|Orden):|Clase Aviso:|Estado:"
    ))
});

/// Notice number.
pub static NOTICE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER_MARK}[ \t]*Aviso:\s*(\d+)")));

/// Order number.
pub static ORDER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER_MARK}[ \t]*Orden:\s*(\d+)")));

/// Order-number label alone, used to bound the classification-line title.
pub static ORDER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"{NUMBER_MARK}[ \t]*Orden:")));

/// Numeric notice class.
pub static CLASSIFICATION_CODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Clase Aviso:\s*(\d+)"));

/// First two hyphen-delimited segments after the notice class.
pub static CLASSIFICATION_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"Clase Aviso:[ \t]*\d+[ \t]+([^\n-]+-[ \t]*[^\n-]+)")
});

/// Line text after the notice class and both category segments.
pub static CLASSIFICATION_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"Clase Aviso:[ \t]*\d+[ \t]+[^\n-]+-[ \t]*[^\n-]+-[ \t]*([^\n]*)")
});

/// Run of uppercase whole words after the state label.
pub static STATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Estado:[ \t]*(\p{Lu}+\b(?:[ \t]+\p{Lu}+\b)*)"));

/// Everything after the state label on its line.
pub static STATE_LINE: LazyLock<Regex> = LazyLock::new(|| compile(r"Estado:[ \t]*([^\n]*)"));

/// `dd.mm.yyyy hh:mm:ss` with date, hour and minute captured.
pub static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d{2}\.\d{2}\.\d{4})[ \t]+(\d{2}):(\d{2}):\d{2}"));

/// A line that starts with a full timestamp.
pub static TIMESTAMP_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d{2}\.\d{2}\.\d{4}\s+\d{2}:\d{2}:\d{2}"));

/// Uppercase name after the time zone marker, ending at `(id)` or end of line.
pub static PERSON: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?m)\bCES?T[ \t]+(\p{Lu}+(?:[ \t]+\p{Lu}+)*)[ \t]*(?:\(\d+\)|\r?$)")
});

/// Notification-number line label.
pub static NOTIFICATION_NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"^{NUMBER_MARK}[ \t]*Notificaci[oó]n")));

/// Leading numeric ordinal such as "1." or "02 ".
pub static LEADING_ORDINAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+\.?\s*"));

/// Leading characters that are not letters.
pub static LEADING_NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[^\p{Alphabetic}]+"));

/// Narrative section marker at the start of a word.
pub static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b([SORA]):"));
