//! Title strategies, tried in order by the resolver.

use crate::config::{
    CLASSIFICATION_TITLE, LEADING_NON_ALPHA, LEADING_ORDINAL, LOCATION_CODE_TAIL_CHARS,
    ORDER_LABEL, STATE_LINE, STATE_PREFIXES, TIMESTAMP,
};
use crate::fields::Fields;
use crate::types::TitleSource;

/// Trait for title strategies.
///
/// A strategy is a pure function of the block text and its extracted fields.
/// Returning `None` (or blank text) hands over to the next strategy.
pub trait TitleStrategy: Send + Sync {
    /// Identify this strategy in the resolved title.
    fn source(&self) -> TitleSource;

    /// Produce a candidate title.
    fn title(&self, block: &str, fields: &Fields) -> Option<String>;
}

/// Text after the classification line's two category segments.
///
/// `Clase Aviso: 30 MttoCorr - Avería - 1. Motor parado` gives "Motor parado".
pub struct ClassificationLineTitle;

impl TitleStrategy for ClassificationLineTitle {
    fn source(&self) -> TitleSource {
        TitleSource::ClassificationLine
    }

    fn title(&self, block: &str, _fields: &Fields) -> Option<String> {
        let rest = CLASSIFICATION_TITLE.captures(block)?.get(1)?.as_str();
        let rest = cut_at(rest, ORDER_LABEL.find(rest).map(|m| m.start()));

        let rest = LEADING_ORDINAL.replace(rest.trim(), "");
        let rest = LEADING_NON_ALPHA.replace(&rest, "");
        non_blank(&rest)
    }
}

/// Text after the state label, minus the extracted state run and any
/// status code left behind.
///
/// `Estado: LIBE Bomba rota` gives "Bomba rota" whatever the code is.
pub struct StateLineTitle;

impl TitleStrategy for StateLineTitle {
    fn source(&self) -> TitleSource {
        TitleSource::StateLine
    }

    fn title(&self, block: &str, fields: &Fields) -> Option<String> {
        let rest = STATE_LINE.captures(block)?.get(1)?.as_str();
        let rest = cut_at(rest, TIMESTAMP.find(rest).map(|m| m.start())).trim();
        let rest = fields
            .state
            .as_deref()
            .and_then(|state| strip_word_prefix(rest, state))
            .unwrap_or(rest);
        non_blank(strip_state_prefix(rest.trim()))
    }
}

/// The location description as is.
pub struct LocationDescriptionTitle;

impl TitleStrategy for LocationDescriptionTitle {
    fn source(&self) -> TitleSource {
        TitleSource::LocationDescription
    }

    fn title(&self, _block: &str, fields: &Fields) -> Option<String> {
        fields.location_description.as_deref().and_then(non_blank)
    }
}

/// Tail of the location code.
///
/// Long codes give their last two segments (`SE-ST-EAF1-02` gives
/// `EAF1-02`); short codes give their last characters.
pub struct LocationCodeTitle;

impl TitleStrategy for LocationCodeTitle {
    fn source(&self) -> TitleSource {
        TitleSource::LocationCode
    }

    fn title(&self, _block: &str, fields: &Fields) -> Option<String> {
        let code = fields.location_code.trim();
        let segments: Vec<&str> = code.split('-').collect();

        let title = match segments[..] {
            [_, .., second_last, last] => format!("{second_last}-{last}"),
            _ => tail_chars(code, LOCATION_CODE_TAIL_CHARS),
        };
        non_blank(&title)
    }
}

/// Strip the first status code prefix that matches a whole word.
fn strip_state_prefix(text: &str) -> &str {
    STATE_PREFIXES
        .iter()
        .find_map(|prefix| strip_word_prefix(text, prefix))
        .unwrap_or(text)
}

/// Remainder of `text` after `prefix`, if the prefix ends on a word boundary.
fn strip_word_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

fn cut_at(text: &str, end: Option<usize>) -> &str {
    end.map_or(text, |end| &text[..end])
}

fn tail_chars(text: &str, count: usize) -> String {
    let skip = text.chars().count().saturating_sub(count);
    text.chars().skip(skip).collect()
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
