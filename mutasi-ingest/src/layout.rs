//! Line reconstruction from positioned fragments, and document assembly.
//!
//! Fragments that share the same rounded baseline `y` are treated as one
//! visual line. This holds for digitally generated statements; rotated or
//! skewed text is not handled.

use mutasi_core::PositionedFragment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Newline-joined text of every page, the sole input of the statement parsers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rebuild one page's lines: top of page first, left to right within a line.
pub fn reconstruct_page(fragments: &[PositionedFragment]) -> Vec<String> {
    let mut rows: BTreeMap<i32, Vec<&PositionedFragment>> = BTreeMap::new();
    for fragment in fragments.iter().filter(|f| !f.is_blank()) {
        rows.entry(fragment.y).or_default().push(fragment);
    }

    rows.into_values()
        .rev()
        .map(|mut row| {
            // stable: equal x keeps extractor order
            row.sort_by_key(|f| f.x);
            row.iter()
                .map(|f| f.text.trim())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Concatenate per-page lines in page order, each page terminated by a newline.
pub fn assemble_document(pages: &[Vec<String>]) -> DocumentText {
    let mut text = String::new();
    for lines in pages.iter().filter(|lines| !lines.is_empty()) {
        text.push_str(&lines.join("\n"));
        text.push('\n');
    }
    DocumentText(text)
}

pub fn reconstruct_document(pages: &[Vec<PositionedFragment>]) -> DocumentText {
    let lines: Vec<Vec<String>> = pages.iter().map(|page| reconstruct_page(page)).collect();
    assemble_document(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: i32, y: i32) -> PositionedFragment {
        PositionedFragment::new(text, x, y)
    }

    #[test]
    fn test_same_y_sorted_by_x() {
        let page = vec![
            frag("4,500.00", 500, 700),
            frag("01/02/24", 20, 700),
            frag("PAYMENT", 90, 700),
            frag("500.00", 300, 700),
            frag("0.00", 400, 700),
        ];
        assert_eq!(reconstruct_page(&page), vec!["01/02/24 PAYMENT 500.00 0.00 4,500.00"]);
    }

    #[test]
    fn test_lines_top_to_bottom() {
        let page = vec![
            frag("Bottom", 0, 100),
            frag("Top", 0, 700),
            frag("Middle", 0, 400),
        ];
        assert_eq!(reconstruct_page(&page), vec!["Top", "Middle", "Bottom"]);
    }

    #[test]
    fn test_one_unit_apart_are_separate_lines() {
        let page = vec![frag("A", 0, 700), frag("B", 50, 699)];
        assert_eq!(reconstruct_page(&page), vec!["A", "B"]);
    }

    #[test]
    fn test_blank_fragments_dropped() {
        let page = vec![frag("  ", 0, 650), frag("Saldo", 0, 700), frag("", 10, 700)];
        assert_eq!(reconstruct_page(&page), vec!["Saldo"]);
    }

    #[test]
    fn test_equal_x_keeps_input_order() {
        let page = vec![frag("first", 10, 700), frag("second", 10, 700)];
        assert_eq!(reconstruct_page(&page), vec!["first second"]);
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        let doc = reconstruct_document(&[
            vec![frag("page one", 0, 700)],
            vec![],
            vec![frag("   ", 0, 700)],
            vec![frag("page four", 0, 700)],
        ]);
        assert_eq!(doc.as_str(), "page one\npage four\n");
    }

    #[test]
    fn test_each_page_terminated() {
        let doc = assemble_document(&[
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);
        assert_eq!(doc.as_str(), "a\nb\nc\n");
        assert_eq!(doc.lines().count(), 3);
    }
}
