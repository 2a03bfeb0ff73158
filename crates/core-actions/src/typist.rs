//! Keystroke replay: feeds characters through `translate_char` + `dispatch`.

use crate::{DispatchResult, dispatch, translate_char};
use core_state::LineBuffer;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    pub keystrokes: usize,
    pub dropped: usize,
    pub wraps: usize,
    pub merges: usize,
}

/// Types into a borrowed buffer one character at a time.
pub struct Typist<'a> {
    buffer: &'a mut LineBuffer,
    stats: ReplayStats,
}

impl<'a> Typist<'a> {
    pub fn new(buffer: &'a mut LineBuffer) -> Self {
        Self {
            buffer,
            stats: ReplayStats::default(),
        }
    }

    pub fn key(&mut self, c: char) -> DispatchResult {
        self.stats.keystrokes += 1;
        let Some(action) = translate_char(c) else {
            self.stats.dropped += 1;
            return DispatchResult::clean();
        };
        let result = dispatch(action, self.buffer);
        if result.wrapped {
            self.stats.wraps += 1;
        }
        if result.merged {
            self.stats.merges += 1;
        }
        result
    }

    pub fn type_str(&mut self, keys: &str) {
        for c in keys.chars() {
            self.key(c);
        }
    }

    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    pub fn finish(self) -> ReplayStats {
        debug!(
            target: "actions.replay",
            keystrokes = self.stats.keystrokes,
            dropped = self.stats.dropped,
            wraps = self.stats.wraps,
            merges = self.stats.merges,
            "replay_finished"
        );
        self.stats
    }
}
