//! Input actions for the diary buffer.
//!
//! The buffer itself only understands whole-line replacement and the
//! merge-on-empty backspace. Everything a keyboard produces is translated
//! into an [`Action`] here and applied by [`dispatcher::dispatch`], which owns
//! the upstream half of backspace (deleting within the active line).

pub mod dispatcher;
pub mod typist;

pub use dispatcher::{DispatchResult, dispatch};
pub use typist::{ReplayStats, Typist};

/// A single mutation request against a [`core_state::LineBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append text to the active line.
    Insert(String),
    /// Delete the last grapheme of the active line, or merge when it is empty.
    Backspace,
    /// Replace the active line (an input field change event).
    SetText(String),
    /// Restore a previously submitted entry.
    Load(String),
    /// Start a new entry.
    Reset,
}

/// Translate one typed character into an action.
///
/// DEL and BS become [`Action::Backspace`]. The active line is a single-line
/// field, so line breaks and tabs type a space. Other control characters are
/// dropped.
pub fn translate_char(c: char) -> Option<Action> {
    match c {
        '\u{8}' | '\u{7f}' => Some(Action::Backspace),
        '\n' | '\r' | '\t' => Some(Action::Insert(" ".to_string())),
        c if c.is_control() => None,
        c => Some(Action::Insert(c.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_keys() {
        assert_eq!(translate_char('\u{7f}'), Some(Action::Backspace));
        assert_eq!(translate_char('\u{8}'), Some(Action::Backspace));
    }

    #[test]
    fn whitespace_controls_type_a_space() {
        for c in ['\n', '\r', '\t'] {
            assert_eq!(translate_char(c), Some(Action::Insert(" ".into())));
        }
    }

    #[test]
    fn other_controls_dropped() {
        assert_eq!(translate_char('\u{1b}'), None);
        assert_eq!(translate_char('\0'), None);
    }

    #[test]
    fn printable_inserts_itself() {
        assert_eq!(translate_char('é'), Some(Action::Insert("é".into())));
    }
}
