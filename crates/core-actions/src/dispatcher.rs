//! Dispatcher applying `Action` to a `LineBuffer`.

use crate::Action;
use core_state::{LineBuffer, WrapOutcome};
use core_text::pop_grapheme;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Something visible changed and a redraw is needed.
    pub dirty: bool,
    /// The active line overflowed and a line was committed.
    pub wrapped: bool,
    /// The last committed line moved back into editing.
    pub merged: bool,
    /// The whole buffer was replaced (load / reset); cached line layouts are stale.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            ..Self::default()
        }
    }
    pub fn clean() -> Self {
        Self::default()
    }
    pub fn wrapped() -> Self {
        Self {
            dirty: true,
            wrapped: true,
            ..Self::default()
        }
    }
    pub fn merged() -> Self {
        Self {
            dirty: true,
            merged: true,
            ..Self::default()
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            buffer_replaced: true,
            ..Self::default()
        }
    }

    fn from_wrap(outcome: WrapOutcome) -> Self {
        match outcome {
            WrapOutcome::Unchanged => Self::dirty(),
            WrapOutcome::Wrapped { .. } => Self::wrapped(),
        }
    }
}

/// Apply an action to the buffer.
pub fn dispatch(action: Action, buffer: &mut LineBuffer) -> DispatchResult {
    match action {
        Action::Insert(s) => {
            if s.is_empty() {
                return DispatchResult::clean();
            }
            let mut next = buffer.text().to_string();
            next.push_str(&s);
            tracing::trace!(target: "actions.dispatch", op = "insert", bytes = s.len(), "edit");
            DispatchResult::from_wrap(buffer.set_text(next))
        }
        Action::Backspace => {
            if buffer.text().is_empty() {
                let merged = buffer.remove_line();
                tracing::trace!(target: "actions.dispatch", op = "backspace_merge", merged, "edit");
                if merged {
                    DispatchResult::merged()
                } else {
                    DispatchResult::clean()
                }
            } else {
                let mut next = buffer.text().to_string();
                pop_grapheme(&mut next);
                tracing::trace!(target: "actions.dispatch", op = "backspace", "edit");
                DispatchResult::from_wrap(buffer.set_text(next))
            }
        }
        Action::SetText(s) => DispatchResult::from_wrap(buffer.set_text(s)),
        Action::Load(blob) => {
            buffer.init(&blob);
            DispatchResult::buffer_replaced()
        }
        Action::Reset => {
            buffer.reset();
            DispatchResult::buffer_replaced()
        }
    }
}
