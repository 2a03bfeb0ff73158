//! Display width of a single grapheme cluster (EGC).
//!
//! Baseline widths come from `unicode_width`. The crate under-measures a few
//! emoji compositions (flags, ZWJ families, VS16 presentation), so any cluster
//! carrying a pictographic or regional indicator signal is widened to 2.
//! Over-estimation only costs a blank cell; under-estimation makes a wrapped
//! line overflow its column budget.

use unicode_width::UnicodeWidthStr;

const VS16: char = '\u{FE0F}';

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

// Rough Extended Pictographic heuristic (main emoji blocks + misc symbols / dingbats)
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

/// Return the display column width for a single grapheme cluster.
///
/// Precondition: `egc` is one grapheme cluster; callers segment first.
/// Empty input returns 0, control-only clusters count as 1.
pub fn egc_width(egc: &str) -> u16 {
    if egc.is_empty() {
        return 0;
    }
    let base = UnicodeWidthStr::width(egc).clamp(1, 2) as u16;
    if base == 2 {
        return 2;
    }
    let widen = egc
        .chars()
        .any(|c| c == VS16 || is_extended_pictographic(c) || is_regional_indicator(c));
    if widen { 2 } else { base }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(egc_width("a"), 1);
    }

    #[test]
    fn wide_cjk() {
        assert_eq!(egc_width("界"), 2);
    }

    #[test]
    fn emoji_basic() {
        assert_eq!(egc_width("😀"), 2);
    }

    #[test]
    fn combining_acute() {
        assert_eq!(egc_width("e\u{0301}"), 1);
    }

    #[test]
    fn flag_pair_is_wide() {
        assert_eq!(egc_width("🇺🇸"), 2);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(egc_width(""), 0);
    }
}
