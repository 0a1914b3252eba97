//! Title resolution for notice blocks.
//!
//! A notice title comes from an ordered chain of strategies; the first one
//! that yields non-blank text wins, and a fixed placeholder covers the case
//! where none does. [`normalize_title`] is a separate utility for cleaning
//! titles that come from elsewhere.

mod normalize;
mod strategy;

pub use normalize::normalize_title;
pub use strategy::{
    ClassificationLineTitle, LocationCodeTitle, LocationDescriptionTitle, StateLineTitle,
    TitleStrategy,
};

use crate::config::GENERIC_TITLE;
use crate::fields::Fields;
use crate::types::TitleSource;

/// A title together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub text: String,
    pub source: TitleSource,
}

/// Ordered chain of title strategies.
pub struct TitleResolver {
    strategies: Vec<Box<dyn TitleStrategy>>,
}

impl TitleResolver {
    /// Create a resolver with a custom strategy order.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn TitleStrategy>>) -> Self {
        Self { strategies }
    }

    /// Resolve the title of a block.
    ///
    /// Never returns an empty title.
    #[must_use]
    pub fn resolve(&self, block: &str, fields: &Fields) -> ResolvedTitle {
        for strategy in &self.strategies {
            if let Some(text) = strategy.title(block, fields) {
                if !text.trim().is_empty() {
                    tracing::trace!(
                        strategy = strategy.source().as_str(),
                        title = %text,
                        "Resolved notice title"
                    );
                    return ResolvedTitle {
                        text,
                        source: strategy.source(),
                    };
                }
            }
        }

        tracing::trace!(location = %fields.location_code, "No title strategy matched");
        ResolvedTitle {
            text: GENERIC_TITLE.to_string(),
            source: TitleSource::Placeholder,
        }
    }
}

impl Default for TitleResolver {
    /// Classification line, state line, location description, location code.
    fn default() -> Self {
        Self::new(vec![
            Box::new(ClassificationLineTitle),
            Box::new(StateLineTitle),
            Box::new(LocationDescriptionTitle),
            Box::new(LocationCodeTitle),
        ])
    }
}
