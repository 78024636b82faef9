//! Suspicion analyzer.
//!
//! Scores the likelihood that a text carries a hidden payload by
//! counting the codepoint classes invisible-text encodings use. This
//! is a heuristic, not a proof: ordinary emoji text legitimately
//! contains variation selectors and will score as suspicious.

use serde::Serialize;

use crate::grapheme;

/// Result of scanning a text for steganographic markers.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// True when any reserved codepoint was found.
    pub suspicious: bool,
    /// `min(total / 10, 1.0)` - saturates at ten findings.
    pub confidence: f64,
    /// Zero-width characters (U+200B..U+200D, U+FEFF).
    pub zero_width: usize,
    /// Variation selectors (U+FE00..U+FE0F).
    pub variation_selectors: usize,
    /// Tag block codepoints (U+E0000..U+E007F).
    pub tag_block: usize,
    /// Sum of all counted classes.
    pub total: usize,
    /// Grapheme count of the text with counted codepoints removed.
    pub visible_len: usize,
}

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}')
}

fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{FE00}'..='\u{FE0F}')
}

fn is_tag_block(c: char) -> bool {
    matches!(c, '\u{E0000}'..='\u{E007F}')
}

/// Scans `text` and counts each reserved codepoint class.
pub fn analyze(text: &str) -> Analysis {
    let mut zero_width = 0;
    let mut variation_selectors = 0;
    let mut tag_block = 0;

    for c in text.chars() {
        if is_zero_width(c) {
            zero_width += 1;
        } else if is_variation_selector(c) {
            variation_selectors += 1;
        } else if is_tag_block(c) {
            tag_block += 1;
        }
    }

    let total = zero_width + variation_selectors + tag_block;
    let visible: String = text
        .chars()
        .filter(|&c| !is_zero_width(c) && !is_variation_selector(c) && !is_tag_block(c))
        .collect();

    Analysis {
        suspicious: total > 0,
        confidence: (total as f64 / 10.0).min(1.0),
        zero_width,
        variation_selectors,
        tag_block,
        total,
        visible_len: grapheme::count(&visible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego;

    #[test]
    fn test_clean_text_not_suspicious() {
        let result = analyze("perfectly ordinary text");
        assert!(!result.suspicious);
        assert_eq!(result.total, 0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_detects_stego_output() {
        let encoded = stego::hide("secret", "cover").unwrap();
        let result = analyze(&encoded);
        assert!(result.suspicious);
        assert_eq!(result.variation_selectors, 48);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.visible_len, 5);
    }

    #[test]
    fn test_counts_each_class() {
        let text = "a\u{200B}b\u{FE0F}c\u{E0041}";
        let result = analyze(text);
        assert_eq!(result.zero_width, 1);
        assert_eq!(result.variation_selectors, 1);
        assert_eq!(result.tag_block, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.visible_len, 3);
    }

    #[test]
    fn test_confidence_scales_and_saturates() {
        let five = "\u{200B}".repeat(5);
        assert_eq!(analyze(&five).confidence, 0.5);
        let twenty = "\u{200B}".repeat(20);
        assert_eq!(analyze(&twenty).confidence, 1.0);
    }

    #[test]
    fn test_appending_marker_never_decreases_total() {
        let base = "some text \u{FE0F}";
        let before = analyze(base).total;
        for marker in ['\u{200B}', '\u{FE0E}', '\u{E0001}'] {
            let extended = format!("{}{}", base, marker);
            assert!(analyze(&extended).total > before - 1);
            assert_eq!(analyze(&extended).total, before + 1);
        }
    }
}
