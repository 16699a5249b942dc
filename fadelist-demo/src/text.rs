use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Keep the leading characters of `s` that fit in `max_width` columns.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Pad `s` with spaces up to `width` columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut result = s.to_string();
    result.extend(std::iter::repeat_n(' ', width.saturating_sub(current)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip_to_width("Gertrude", 3), "Ger");
        assert_eq!(clip_to_width("Ella", 10), "Ella");
        assert_eq!(clip_to_width("Ella", 0), "");
    }

    #[test]
    fn test_clip_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(clip_to_width("日本語", 3), "日");
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }
}
