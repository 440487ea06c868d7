use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string (CJK and emoji count double).
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Clip a string to at most `width` display columns, marking the cut
/// with "..". Cuts on character boundaries so CJK text stays valid.
pub(crate) fn clip(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        // No room for the marker; take whatever fits
        let mut used = 0;
        let mut out = String::new();
        for ch in s.chars() {
            let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + cw > width {
                break;
            }
            used += cw;
            out.push(ch);
        }
        return out;
    }
    let budget = width.saturating_sub(2);
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        out.push(ch);
    }
    out.push_str("..");
    out
}

/// Pad a string with spaces to exactly `width` display columns,
/// clipping first if it is too long.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let clipped = clip(s, width);
    let remainder = width.saturating_sub(display_width(&clipped));
    format!("{}{}", clipped, " ".repeat(remainder))
}
