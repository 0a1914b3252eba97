//! Splitting report text into one candidate block per notice.
//!
//! A block starts at an anchor and runs up to the next anchor or the end of
//! the text. Text before the first anchor is discarded. An anchor that occurs
//! inside narrative text is indistinguishable from a real boundary and starts
//! a new block.

use crate::config::ANCHOR;

/// Lazy iterator over candidate notice blocks.
///
/// Created by [`segment`]. Each item is a slice of the input that begins with
/// the anchor and is non-blank.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.rest.find(ANCHOR)?;
            let from_anchor = &self.rest[start..];

            let end = from_anchor[ANCHOR.len()..]
                .find(ANCHOR)
                .map_or(from_anchor.len(), |pos| pos + ANCHOR.len());

            let block = &from_anchor[..end];
            self.rest = &from_anchor[end..];

            if !block.trim().is_empty() {
                return Some(block);
            }
        }
    }
}

/// Split text into candidate blocks at every anchor.
///
/// # Examples
/// ```
/// use notice_parser::segment::segment;
///
/// let text = "header\nUb.Tec.: A-1 first\nUb.Tec.: B-2 second\n";
/// let blocks: Vec<&str> = segment(text).collect();
/// assert_eq!(blocks, vec!["Ub.Tec.: A-1 first\n", "Ub.Tec.: B-2 second\n"]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Blocks<'_> {
    Blocks { rest: text }
}
