//! Per-frame snapshot handed to renderers.

use crate::{FadeTable, LineBuffer};

#[derive(Debug, Clone, PartialEq)]
pub struct FadedLine {
    pub text: String,
    pub opacity: f32,
}

/// Visible committed lines (oldest first, with opacity) and the active line.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryView {
    pub lines: Vec<FadedLine>,
    pub active: String,
}

impl DiaryView {
    pub fn capture(buffer: &LineBuffer, fade: &FadeTable) -> Self {
        let shown = fade.visible(buffer.lines());
        let lines = shown
            .iter()
            .enumerate()
            .map(|(i, text)| FadedLine {
                text: text.clone(),
                opacity: fade.opacity(shown.len(), i),
            })
            .collect();
        Self {
            lines,
            active: buffer.text().to_string(),
        }
    }
}
