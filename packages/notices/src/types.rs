//! Core data types for parsed notices.

use serde::Serialize;

/// Which title strategy produced a notice's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// Text after the classification line's category segments.
    ClassificationLine,

    /// Text after the state label.
    StateLine,

    /// The location description.
    LocationDescription,

    /// Derived from the location code.
    LocationCode,

    /// No strategy matched; the generic placeholder was used.
    Placeholder,
}

impl TitleSource {
    /// Get the string value used in logs and output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClassificationLine => "classification_line",
            Self::StateLine => "state_line",
            Self::LocationDescription => "location_description",
            Self::LocationCode => "location_code",
            Self::Placeholder => "placeholder",
        }
    }
}

/// The four narrative subsections of a notice plus the composed text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Narrative {
    /// S: situation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,

    /// O: observation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,

    /// R: resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// A: action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Present sections as labelled lines, or the cleaned text when the
    /// block has no section markers.
    pub full_text: String,
}

impl Narrative {
    /// Whether any of the four sections has content.
    #[must_use]
    pub fn has_sections(&self) -> bool {
        self.sections().any(|(_, text)| text.is_some())
    }

    /// Sections in display order, paired with their marker letter.
    pub fn sections(&self) -> impl Iterator<Item = (char, Option<&str>)> {
        [
            ('S', self.situation.as_deref()),
            ('O', self.observation.as_deref()),
            ('R', self.resolution.as_deref()),
            ('A', self.action.as_deref()),
        ]
        .into_iter()
    }
}

/// One structured maintenance notice.
///
/// Optional fields are `None` when their pattern did not match; they are
/// never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Technical location code (e.g., "SE-ST-EAF1-02-ED-EA-01-03").
    pub location_code: String,

    /// Human description of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,

    /// Notice number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_number: Option<String>,

    /// Work order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    /// Notice class (e.g., 20, 30, 60); 0 when absent.
    pub classification_code: u32,

    /// Class category segments (e.g., "MttoCorr - Avería Urgente").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification_description: Option<String>,

    /// Status codes (e.g., "PLAN CNF PNR").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Title, never empty.
    pub title: String,

    /// Strategy that produced the title.
    pub title_source: TitleSource,

    /// Timestamp truncated to minutes, `dd.mm.yyyy hh:mm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Timestamp as it appeared, `dd.mm.yyyy hh:mm:ss`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_timestamp: Option<String>,

    /// Person who filed the notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,

    /// Narrative sections.
    pub narrative: Narrative,
}

/// Notices parsed from one document, with non-fatal diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Notices in source order.
    pub notices: Vec<Notice>,

    /// Dropped blocks and recovered fields worth reporting.
    pub warnings: Vec<String>,
}
