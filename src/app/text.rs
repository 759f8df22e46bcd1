use unicode_width::UnicodeWidthChar;

/// Strip escape sequences and control characters from pasted text. The
/// composer is single-line, so line breaks and tabs become spaces.
pub(super) fn sanitize_input_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_escape = false;
    let mut in_csi = false;

    for ch in text.chars() {
        if in_escape {
            if in_csi {
                // CSI sequence terminates at bytes in range 0x40..0x7E.
                if ('@'..='~').contains(&ch) {
                    in_escape = false;
                    in_csi = false;
                }
                continue;
            }
            if ch == '[' {
                in_csi = true;
                continue;
            }
            in_escape = false;
            continue;
        }

        if ch == '\u{1b}' {
            in_escape = true;
            continue;
        }

        if matches!(ch, '\r' | '\n' | '\t') {
            if !out.ends_with(' ') {
                out.push(' ');
            }
            continue;
        }

        if ch.is_control() {
            continue;
        }

        out.push(ch);
    }

    out
}

/// Slice of `input` visible in a composer `width` columns wide, plus the caret
/// column inside that slice. Scrolls horizontally so the caret stays visible.
pub(super) fn visible_input(input: &str, cursor: usize, width: u16) -> (&str, u16) {
    let width = width.max(1) as usize;
    let cursor = cursor.min(input.len());

    let mut start = 0usize;
    let mut caret = 0usize;
    for ch in input[..cursor].chars() {
        caret += UnicodeWidthChar::width(ch).unwrap_or(1).max(1);
    }
    // Leave one cell for the caret itself.
    let mut chars = input.char_indices();
    while caret >= width {
        let Some((_, ch)) = chars.next() else {
            break;
        };
        caret = caret.saturating_sub(UnicodeWidthChar::width(ch).unwrap_or(1).max(1));
        start += ch.len_utf8();
    }

    let mut end = start;
    let mut used = 0usize;
    for ch in input[start..].chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(1).max(1);
        if used + cw > width {
            break;
        }
        used += cw;
        end += ch.len_utf8();
    }

    (&input[start..end], caret as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_folds_newlines_and_strips_escapes() {
        assert_eq!(sanitize_input_text("about\r\nskills"), "about skills");
        assert_eq!(sanitize_input_text("\u{1b}[31mhelp\u{1b}[0m"), "help");
        assert_eq!(sanitize_input_text("a\u{7}b"), "ab");
    }

    #[test]
    fn short_input_is_fully_visible() {
        assert_eq!(visible_input("help", 2, 20), ("help", 2));
        assert_eq!(visible_input("", 0, 20), ("", 0));
    }

    #[test]
    fn long_input_scrolls_to_keep_caret_visible() {
        let input = "abcdefghij";
        let (shown, caret) = visible_input(input, input.len(), 4);
        assert_eq!(shown, "hij");
        assert_eq!(caret, 3);

        let (shown, caret) = visible_input(input, 0, 4);
        assert_eq!(shown, "abcd");
        assert_eq!(caret, 0);
    }
}
