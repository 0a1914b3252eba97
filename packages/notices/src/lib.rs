//! Notice Parser - Structured notices from maintenance report text.
//!
//! This crate takes the text extracted from a maintenance-notice report and
//! splits it into notices. Each notice carries its location, classification,
//! state, timestamp, reporting person and the S/O/R/A narrative
//! (Situation, Observation, Resolution, Action), plus a best-effort title.
//!
//! # Example
//!
//! ```
//! use notice_parser::{parse_notices, TitleSource};
//!
//! let text = "Ub.Tec.: ABC-1 DESC\nClase Aviso: 30 X - Y - Some Title\n\
//!             27.12.2025 13:25:50 CET NAME (123)\nS:text";
//! let notices = parse_notices(text);
//!
//! assert_eq!(notices[0].title, "Some Title");
//! assert_eq!(notices[0].title_source, TitleSource::ClassificationLine);
//! assert_eq!(notices[0].narrative.situation.as_deref(), Some("text"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Labels, prefix lists and compiled patterns
//! - [`types`]: Core data types (Notice, Narrative, ParsedDocument)
//! - [`error`]: Error types and Result alias
//! - [`segment`]: Splitting text into notice blocks
//! - [`fields`]: Atomic field extraction
//! - [`title`]: Title strategies and title normalization
//! - [`sections`]: S/O/R/A narrative extraction
//! - [`parser`]: Document parser
//! - [`zone`]: Operational zone classification
//! - [`record`]: Storage-ready records
//! - [`output`]: YAML and JSON rendering
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod output;
pub mod parser;
pub mod record;
pub mod sections;
pub mod segment;
pub mod title;
pub mod types;
pub mod zone;

// Re-export main functions
pub use parser::{parse_document, parse_notices};

// Re-export commonly used items
pub use error::{NoticeError, Result};
pub use record::{prepare_records, NoticeRecord};
pub use title::normalize_title;
pub use types::{Narrative, Notice, ParsedDocument, TitleSource};
pub use zone::{classify_zone, Zone};
