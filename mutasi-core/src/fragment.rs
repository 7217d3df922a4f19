//! Positioned text runs as handed over by the PDF text extractor.

use serde::{Deserialize, Serialize};

/// One run of text with its rounded baseline position on the page.
///
/// PDF user space puts the origin at the bottom-left corner, so a larger
/// `y` is higher on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedFragment {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

impl PositionedFragment {
    pub fn new(text: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Build a fragment from raw (unrounded) baseline coordinates.
    pub fn from_baseline(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(text, x.round() as i32, y.round() as i32)
    }

    /// Whitespace-only runs carry no layout signal.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
