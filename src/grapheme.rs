//! Grapheme cluster helpers.
//!
//! Transforms that reorder or decorate "characters" must operate on
//! user-perceived characters, not codepoints: a family emoji or a
//! letter with combining marks is several codepoints that have to move
//! together. Everything here wraps `unicode-segmentation`.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into extended grapheme clusters, in order.
pub fn split(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Counts the user-perceived characters in the text.
pub fn count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Reverses the text by grapheme cluster, keeping each cluster intact.
pub fn reverse(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ascii() {
        assert_eq!(split("abc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_emoji_together() {
        // Family emoji: four codepoints joined by ZWJ, one grapheme
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        let text = format!("a{}b", family);
        assert_eq!(split(&text), vec!["a", family, "b"]);
    }

    #[test]
    fn test_count_combining_sequence() {
        // 'e' + combining acute is one user-perceived character
        assert_eq!(count("e\u{0301}"), 1);
        assert_eq!(count("cafe\u{0301}"), 4);
    }

    #[test]
    fn test_reverse_is_self_inverse() {
        let text = "He\u{0301}llo \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}!";
        assert_eq!(reverse(&reverse(text)), text);
    }

    #[test]
    fn test_reverse_empty() {
        assert_eq!(reverse(""), "");
    }
}
