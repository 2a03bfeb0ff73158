//! Line-ending normalization for saved entries.
//!
//! Entries are stored with `\n` separators, but a blob that went through another
//! platform's editor may come back with CRLF or bare CR. Loading it unmodified
//! would leave a stray `\r` at the end of every committed line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Cr,
}

/// Result of [`normalize_line_endings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub normalized: String,   // LF-only content
    pub original: LineEnding, // dominant style in the input
    pub mixed: bool,          // more than one style seen
}

/// Rewrite CRLF and lone CR to LF.
///
/// The reported style is the most frequent one; ties resolve CRLF > LF > CR,
/// and input without any line break reports LF.
pub fn normalize_line_endings(input: &str) -> NormalizedText {
    let mut crlf = 0usize;
    let mut lf = 0usize;
    let mut cr = 0usize;
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                crlf += 1;
                out.push('\n');
            }
            '\r' => {
                cr += 1;
                out.push('\n');
            }
            '\n' => {
                lf += 1;
                out.push('\n');
            }
            other => out.push(other),
        }
    }

    let mut original = LineEnding::Lf;
    let mut max = 0usize;
    for (style, count) in [
        (LineEnding::Crlf, crlf),
        (LineEnding::Lf, lf),
        (LineEnding::Cr, cr),
    ] {
        if count > max {
            max = count;
            original = style;
        }
    }
    let mixed = [crlf, lf, cr].iter().filter(|c| **c > 0).count() > 1;

    NormalizedText {
        normalized: out,
        original,
        mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lf_passthrough() {
        let n = normalize_line_endings("a\nb");
        assert_eq!(n.normalized, "a\nb");
        assert_eq!(n.original, LineEnding::Lf);
        assert!(!n.mixed);
    }

    #[test]
    fn crlf_rewritten() {
        let n = normalize_line_endings("a\r\nb\r\n");
        assert_eq!(n.normalized, "a\nb\n");
        assert_eq!(n.original, LineEnding::Crlf);
    }

    #[test]
    fn lone_cr_rewritten() {
        let n = normalize_line_endings("a\rb");
        assert_eq!(n.normalized, "a\nb");
        assert_eq!(n.original, LineEnding::Cr);
    }

    #[test]
    fn mixed_reports_majority() {
        let n = normalize_line_endings("a\r\nb\r\nc\nd");
        assert_eq!(n.normalized, "a\nb\nc\nd");
        assert_eq!(n.original, LineEnding::Crlf);
        assert!(n.mixed);
    }

    #[test]
    fn multibyte_text_survives() {
        let n = normalize_line_endings("grüße\r\n日記");
        assert_eq!(n.normalized, "grüße\n日記");
    }
}
