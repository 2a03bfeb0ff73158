use core_text::{Measure, line_len, split_last_word};
use tracing::{debug, trace};

/// Maximum active line length before a wrap is triggered.
pub const DEFAULT_WRAP_WIDTH: usize = 39;

/// Separator between lines in [`LineBuffer::full_text`] and [`LineBuffer::init`].
pub const LINE_SEPARATOR: &str = "\n";

/// Wrap policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapSettings {
    pub width: usize,
    pub measure: Measure,
}

impl Default for WrapSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WRAP_WIDTH,
            measure: Measure::Graphemes,
        }
    }
}

/// What a [`LineBuffer::set_text`] call did to the committed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapOutcome {
    Unchanged,
    /// A line was committed; `committed_len` is its measured length.
    Wrapped { committed_len: usize },
}

/// Active line plus committed lines, oldest first.
///
/// Invariants:
/// - The active line is always the last logical line of the document.
/// - After `set_text` returns, the active line fits the wrap width or holds no
///   space at all (a single word longer than the width cannot be broken).
/// - The word being typed is never committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    current: String,
    committed: Vec<String>,
    settings: WrapSettings,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_width(width: usize) -> Self {
        Self::from_settings(WrapSettings {
            width,
            ..WrapSettings::default()
        })
    }

    pub fn from_settings(settings: WrapSettings) -> Self {
        Self {
            current: String::new(),
            committed: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> WrapSettings {
        self.settings
    }

    pub fn wrap_width(&self) -> usize {
        self.settings.width
    }

    pub fn measure(&self) -> Measure {
        self.settings.measure
    }

    /// Replace the active line with `text`, wrapping once if it is now too long.
    ///
    /// This is a replace, not an append: input fields hand over their whole
    /// content on every change.
    pub fn set_text(&mut self, text: impl Into<String>) -> WrapOutcome {
        self.current = text.into();
        if line_len(&self.current, self.settings.measure) > self.settings.width {
            self.wrap()
        } else {
            WrapOutcome::Unchanged
        }
    }

    // Commits everything before the last word. A line without spaces commits an
    // empty string and stays active as is; no retry happens.
    fn wrap(&mut self) -> WrapOutcome {
        let line = std::mem::take(&mut self.current);
        let (remainder, last_word) = split_last_word(&line);
        let committed_len = line_len(remainder, self.settings.measure);
        self.committed.push(remainder.to_string());
        self.current = last_word.to_string();
        debug!(
            target: "state.diary",
            committed_len,
            active_len = line_len(&self.current, self.settings.measure),
            committed_lines = self.committed.len(),
            width = self.settings.width,
            "wrap"
        );
        WrapOutcome::Wrapped { committed_len }
    }

    /// Merge the last committed line back into editing.
    ///
    /// Only acts when the active line is empty and a committed line exists.
    /// Returns whether a merge happened.
    pub fn remove_line(&mut self) -> bool {
        if !self.current.is_empty() {
            return false;
        }
        match self.committed.pop() {
            Some(previous) => {
                self.current = previous;
                debug!(
                    target: "state.diary",
                    committed_lines = self.committed.len(),
                    active_len = line_len(&self.current, self.settings.measure),
                    "merge"
                );
                true
            }
            None => {
                trace!(target: "state.diary", "merge_noop_empty");
                false
            }
        }
    }

    /// Restore state from a blob previously produced by [`LineBuffer::full_text`].
    ///
    /// The last line becomes active, the rest are committed in order. Loaded
    /// lines are not re-wrapped.
    pub fn init(&mut self, full_text: &str) {
        let mut lines: Vec<String> = full_text
            .split(LINE_SEPARATOR)
            .map(str::to_owned)
            .collect();
        let Some(current) = lines.pop() else {
            return;
        };
        self.current = current;
        self.committed = lines;
        debug!(
            target: "state.diary",
            committed_lines = self.committed.len(),
            bytes = full_text.len(),
            "init"
        );
    }

    /// Start a new entry.
    pub fn reset(&mut self) {
        self.current.clear();
        self.committed.clear();
        debug!(target: "state.diary", "reset");
    }

    /// The active line.
    pub fn text(&self) -> &str {
        &self.current
    }

    /// Committed lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.committed
    }

    /// Committed lines and the active line joined by [`LINE_SEPARATOR`].
    pub fn full_text(&self) -> String {
        let cap = self
            .committed
            .iter()
            .map(|l| l.len() + LINE_SEPARATOR.len())
            .sum::<usize>()
            + self.current.len();
        let mut out = String::with_capacity(cap);
        for line in &self.committed {
            out.push_str(line);
            out.push_str(LINE_SEPARATOR);
        }
        out.push_str(&self.current);
        out
    }

    /// Committed lines plus the active line.
    pub fn line_count(&self) -> usize {
        self.committed.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.current.is_empty()
    }
}
