/// Characters that end a line on their own (`\r\n` is handled separately)
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// Breaks on the full Unicode line boundary set rather than just `\n`,
/// so text extracted from pages using `\r` or U+2028 still diffs per line.
/// A trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }

        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(split_lines("A\nB\nC"), vec!["A", "B", "C"]);
        assert_eq!(split_lines("A\nB\nC\n"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_lines_kept() {
        assert_eq!(split_lines("A\n\nB"), vec!["A", "", "B"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_mixed_terminators() {
        assert_eq!(split_lines("A\r\nB\rC\u{2028}D\x0cE"), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(split_lines("A\r\r\nB"), vec!["A", "", "B"]);
    }
}
