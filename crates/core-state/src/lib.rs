//! Diary state: the line-wrapping buffer behind a typewriter-style journal entry.
//!
//! One [`LineBuffer`] exists per editing session. It keeps a single active line
//! (the one receiving keystrokes) and an ordered list of committed lines. The
//! active line is replaced wholesale on every input change; once it grows past
//! the wrap width everything before its last word is committed and the last
//! word stays active. Backspacing on an empty active line merges the last
//! committed line back into editing.
//!
//! Presentation helpers live alongside the buffer but never mutate it:
//! - [`fade::FadeTable`] maps the most recent committed lines to opacities.
//! - [`view::DiaryView`] snapshots what a renderer needs for one frame.
//! - [`line_ending::normalize_line_endings`] prepares saved blobs for `init`.
//!
//! Telemetry: buffer transitions emit `tracing` events under the
//! `state.diary` target. Events carry lengths and counts, never user text.

pub mod diary;
pub mod fade;
pub mod line_ending;
pub mod view;

pub use diary::{DEFAULT_WRAP_WIDTH, LINE_SEPARATOR, LineBuffer, WrapOutcome, WrapSettings};
pub use fade::{DEFAULT_MIN_OPACITY, DEFAULT_VISIBLE_LINES, FadeTable};
pub use line_ending::{LineEnding, NormalizedText, normalize_line_endings};
pub use view::{DiaryView, FadedLine};
