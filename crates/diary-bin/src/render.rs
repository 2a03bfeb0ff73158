//! Plain-text rendering of a `DiaryView`.
//!
//! Each committed line is prefixed with its opacity so the fade is visible
//! without a graphical surface; the active line is marked with `>`.

use core_state::DiaryView;
use std::fmt::Write;

pub(crate) fn view_text(view: &DiaryView) -> String {
    let mut out = String::new();
    for line in &view.lines {
        let _ = writeln!(out, "{:.2}  {}", line.opacity, line.text);
    }
    let _ = writeln!(out, ">     {}", view.active);
    out
}
