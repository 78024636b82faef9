//! Word-order and case transforms.

use super::Transform;
use crate::grapheme;

/// Reverses the text by grapheme cluster, so emoji and combining
/// sequences survive intact. Self-inverse.
pub struct ReverseText;

impl Transform for ReverseText {
    fn id(&self) -> &'static str {
        "reverse"
    }
    fn display_name(&self) -> &'static str {
        "Reverse Text"
    }
    fn encode(&self, text: &str) -> String {
        grapheme::reverse(text)
    }
    fn decode(&self, text: &str) -> String {
        grapheme::reverse(text)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// Reverses word order. Self-inverse over single-spaced text, which is
/// its declared domain; runs of whitespace collapse.
pub struct ReverseWords;

impl Transform for ReverseWords {
    fn id(&self) -> &'static str {
        "reverse-words"
    }
    fn display_name(&self) -> &'static str {
        "Reverse Words"
    }
    fn encode(&self, text: &str) -> String {
        text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
    }
    fn decode(&self, text: &str) -> String {
        self.encode(text)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Swaps upper and lower case. Self-inverse over characters whose case
/// mappings are one-to-one.
pub struct SwapCase;

impl Transform for SwapCase {
    fn id(&self) -> &'static str {
        "swap-case"
    }
    fn display_name(&self) -> &'static str {
        "Swap Case"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .flat_map(|c| {
                if c.is_lowercase() {
                    c.to_uppercase().collect::<Vec<_>>()
                } else if c.is_uppercase() {
                    c.to_lowercase().collect::<Vec<_>>()
                } else {
                    vec![c]
                }
            })
            .collect()
    }
    fn decode(&self, text: &str) -> String {
        self.encode(text)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// aLtErNaTiNg case, counting letters only. Encode-only.
pub struct AlternatingCase;

impl Transform for AlternatingCase {
    fn id(&self) -> &'static str {
        "alternating-case"
    }
    fn display_name(&self) -> &'static str {
        "Alternating Case"
    }
    fn encode(&self, text: &str) -> String {
        let mut letter_index = 0usize;
        text.chars()
            .flat_map(|c| {
                if c.is_alphabetic() {
                    let mapped = if letter_index % 2 == 0 {
                        c.to_lowercase().collect::<Vec<_>>()
                    } else {
                        c.to_uppercase().collect::<Vec<_>>()
                    };
                    letter_index += 1;
                    mapped
                } else {
                    vec![c]
                }
            })
            .collect()
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Vaporwave: a space between every grapheme. Encode-only, since real
/// spaces become indistinguishable from inserted ones.
pub struct Vaporwave;

impl Transform for Vaporwave {
    fn id(&self) -> &'static str {
        "vaporwave"
    }
    fn display_name(&self) -> &'static str {
        "Vaporwave"
    }
    fn encode(&self, text: &str) -> String {
        grapheme::split(text).join(" ")
    }
}

/// Strips ASCII vowels. Encode-only, obviously.
pub struct Disemvowel;

impl Transform for Disemvowel {
    fn id(&self) -> &'static str {
        "disemvowel"
    }
    fn display_name(&self) -> &'static str {
        "Disemvowel"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .collect()
    }
}
