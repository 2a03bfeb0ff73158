//! Text primitives shared by the diary buffer: line measurement and word splitting.
//!
//! The buffer only ever breaks lines at single ASCII spaces, so the word helpers
//! here are deliberately byte-oriented on `' '`. Length decisions go through
//! [`line_len`] so the wrap policy can count grapheme clusters (what a user
//! perceives as characters) or terminal columns without the caller caring.

use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

pub mod width;
pub mod words;

pub use width::egc_width;
pub use words::{pop_grapheme, split_last_word};

/// How the length of a line is counted against the wrap width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// One unit per extended grapheme cluster.
    #[default]
    Graphemes,
    /// Terminal display columns (wide CJK / emoji count as 2).
    Columns,
}

/// Length of `line` under the given measure.
pub fn line_len(line: &str, measure: Measure) -> usize {
    match measure {
        Measure::Graphemes => line.graphemes(true).count(),
        Measure::Columns => line.graphemes(true).map(|g| egc_width(g) as usize).sum(),
    }
}
