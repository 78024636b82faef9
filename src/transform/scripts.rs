//! Script and alphabet mapping codecs.
//!
//! One-to-one maps (bubble, fullwidth, upside-down) declare a decode.
//! Maps with duplicate targets or case folding (leetspeak, small caps,
//! NATO, braille) are encode-only: inverse-mapping an ambiguous target
//! would guess, and the contract forbids guessing.

use super::Transform;

/// Morse code. Letters are case-folded, digits map directly, a space
/// becomes `/`. Declared domain for round-trips: lowercase letters,
/// digits and single spaces.
pub struct Morse;

fn morse_code(c: char) -> Option<&'static str> {
    Some(match c {
        'a' => ".-",
        'b' => "-...",
        'c' => "-.-.",
        'd' => "-..",
        'e' => ".",
        'f' => "..-.",
        'g' => "--.",
        'h' => "....",
        'i' => "..",
        'j' => ".---",
        'k' => "-.-",
        'l' => ".-..",
        'm' => "--",
        'n' => "-.",
        'o' => "---",
        'p' => ".--.",
        'q' => "--.-",
        'r' => ".-.",
        's' => "...",
        't' => "-",
        'u' => "..-",
        'v' => "...-",
        'w' => ".--",
        'x' => "-..-",
        'y' => "-.--",
        'z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        _ => return None,
    })
}

fn morse_char(code: &str) -> Option<char> {
    "abcdefghijklmnopqrstuvwxyz0123456789"
        .chars()
        .find(|&c| morse_code(c) == Some(code))
}

impl Transform for Morse {
    fn id(&self) -> &'static str {
        "morse"
    }
    fn display_name(&self) -> &'static str {
        "Morse Code"
    }
    fn encode(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| match c {
                ' ' => "/".to_string(),
                _ => morse_code(c)
                    .map(str::to_string)
                    .unwrap_or_else(|| c.to_string()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
    fn decode(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| match token {
                "/" => " ".to_string(),
                _ => morse_char(token)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| token.to_string()),
            })
            .collect()
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// NATO phonetic alphabet. Encode-only: "India" could be 'i' or the
/// literal word.
pub struct Nato;

fn nato_word(c: char) -> Option<&'static str> {
    Some(match c {
        'a' => "Alpha",
        'b' => "Bravo",
        'c' => "Charlie",
        'd' => "Delta",
        'e' => "Echo",
        'f' => "Foxtrot",
        'g' => "Golf",
        'h' => "Hotel",
        'i' => "India",
        'j' => "Juliett",
        'k' => "Kilo",
        'l' => "Lima",
        'm' => "Mike",
        'n' => "November",
        'o' => "Oscar",
        'p' => "Papa",
        'q' => "Quebec",
        'r' => "Romeo",
        's' => "Sierra",
        't' => "Tango",
        'u' => "Uniform",
        'v' => "Victor",
        'w' => "Whiskey",
        'x' => "X-ray",
        'y' => "Yankee",
        'z' => "Zulu",
        '0' => "Zero",
        '1' => "One",
        '2' => "Two",
        '3' => "Three",
        '4' => "Four",
        '5' => "Five",
        '6' => "Six",
        '7' => "Seven",
        '8' => "Eight",
        '9' => "Nine",
        _ => return None,
    })
}

impl Transform for Nato {
    fn id(&self) -> &'static str {
        "nato"
    }
    fn display_name(&self) -> &'static str {
        "NATO Phonetic"
    }
    fn encode(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                nato_word(c)
                    .map(str::to_string)
                    .unwrap_or_else(|| c.to_string())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Leetspeak. Encode-only: '1' came from 'i' or 'l', nobody knows.
pub struct Leetspeak;

impl Transform for Leetspeak {
    fn id(&self) -> &'static str {
        "leetspeak"
    }
    fn display_name(&self) -> &'static str {
        "Leetspeak"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c.to_ascii_lowercase() {
                'a' => '4',
                'e' => '3',
                'i' => '1',
                'o' => '0',
                's' => '5',
                't' => '7',
                'l' => '1',
                _ => c,
            })
            .collect()
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Small caps. Encode-only: input is case-folded first.
pub struct SmallCaps;

fn small_cap(c: char) -> Option<char> {
    Some(match c {
        'a' => 'ᴀ',
        'b' => 'ʙ',
        'c' => 'ᴄ',
        'd' => 'ᴅ',
        'e' => 'ᴇ',
        'f' => 'ꜰ',
        'g' => 'ɢ',
        'h' => 'ʜ',
        'i' => 'ɪ',
        'j' => 'ᴊ',
        'k' => 'ᴋ',
        'l' => 'ʟ',
        'm' => 'ᴍ',
        'n' => 'ɴ',
        'o' => 'ᴏ',
        'p' => 'ᴘ',
        'q' => 'ǫ',
        'r' => 'ʀ',
        's' => 's',
        't' => 'ᴛ',
        'u' => 'ᴜ',
        'v' => 'ᴠ',
        'w' => 'ᴡ',
        'x' => 'x',
        'y' => 'ʏ',
        'z' => 'ᴢ',
        _ => return None,
    })
}

impl Transform for SmallCaps {
    fn id(&self) -> &'static str {
        "small-caps"
    }
    fn display_name(&self) -> &'static str {
        "Small Caps"
    }
    fn encode(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| small_cap(c).unwrap_or(c))
            .collect()
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Enclosed alphanumerics: a -> ⓐ, A -> Ⓐ. One-to-one, reversible.
pub struct Bubble;

impl Transform for Bubble {
    fn id(&self) -> &'static str {
        "bubble"
    }
    fn display_name(&self) -> &'static str {
        "Bubble"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'a'..='z' => char::from_u32(0x24D0 + (c as u32 - 'a' as u32)).unwrap_or(c),
                'A'..='Z' => char::from_u32(0x24B6 + (c as u32 - 'A' as u32)).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
    fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c as u32 {
                cp @ 0x24D0..=0x24E9 => char::from_u32('a' as u32 + cp - 0x24D0).unwrap_or(c),
                cp @ 0x24B6..=0x24CF => char::from_u32('A' as u32 + cp - 0x24B6).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Fullwidth forms: printable ASCII shifted into U+FF01..U+FF5E, space
/// to the ideographic space. One-to-one, reversible.
pub struct Fullwidth;

impl Transform for Fullwidth {
    fn id(&self) -> &'static str {
        "fullwidth"
    }
    fn display_name(&self) -> &'static str {
        "Fullwidth"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                ' ' => '\u{3000}',
                '!'..='~' => char::from_u32(0xFF01 + (c as u32 - 0x21)).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
    fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c as u32 {
                0x3000 => ' ',
                cp @ 0xFF01..=0xFF5E => char::from_u32(0x21 + cp - 0xFF01).unwrap_or(c),
                _ => c,
            })
            .collect()
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Flipped-letter targets for upside-down rendering. Involutive pairs
/// (b/q, d/p, n/u, m/w, 6/9) and self-images share one table.
const FLIP_TABLE: &[(char, char)] = &[
    ('a', 'ɐ'),
    ('b', 'q'),
    ('c', 'ɔ'),
    ('d', 'p'),
    ('e', 'ǝ'),
    ('f', 'ɟ'),
    ('g', 'ƃ'),
    ('h', 'ɥ'),
    ('i', 'ᴉ'),
    ('j', 'ɾ'),
    ('k', 'ʞ'),
    ('l', 'l'),
    ('m', 'ɯ'),
    ('n', 'u'),
    ('o', 'o'),
    ('p', 'd'),
    ('q', 'b'),
    ('r', 'ɹ'),
    ('s', 's'),
    ('t', 'ʇ'),
    ('u', 'n'),
    ('v', 'ʌ'),
    ('w', 'ʍ'),
    ('x', 'x'),
    ('y', 'ʎ'),
    ('z', 'z'),
    ('A', '∀'),
    ('B', 'B'),
    ('C', 'Ɔ'),
    ('D', 'D'),
    ('E', 'Ǝ'),
    ('F', 'Ⅎ'),
    ('G', 'פ'),
    ('H', 'H'),
    ('I', 'I'),
    ('J', 'ſ'),
    ('K', 'K'),
    ('L', '˥'),
    ('M', 'W'),
    ('N', 'N'),
    ('O', 'O'),
    ('P', 'Ԁ'),
    ('Q', 'Q'),
    ('R', 'R'),
    ('S', 'S'),
    ('T', '┴'),
    ('U', '∩'),
    ('V', 'Λ'),
    ('W', 'M'),
    ('X', 'X'),
    ('Y', '⅄'),
    ('Z', 'Z'),
    ('0', '0'),
    ('1', 'Ɩ'),
    ('2', 'ᄅ'),
    ('3', 'Ɛ'),
    ('4', 'ㄣ'),
    ('5', 'ϛ'),
    ('6', '9'),
    ('7', 'ㄥ'),
    ('8', '8'),
    ('9', '6'),
    ('.', '˙'),
    (',', '\''),
    ('?', '¿'),
    ('!', '¡'),
    ('\'', ','),
    ('(', ')'),
    (')', '('),
    ('[', ']'),
    (']', '['),
    ('{', '}'),
    ('}', '{'),
    ('<', '>'),
    ('>', '<'),
    ('&', '⅋'),
    ('_', '‾'),
];

/// Upside-down text: maps each character to its flipped form and
/// reverses the order.
pub struct UpsideDown;

impl Transform for UpsideDown {
    fn id(&self) -> &'static str {
        "upside-down"
    }
    fn display_name(&self) -> &'static str {
        "Upside Down"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                FLIP_TABLE
                    .iter()
                    .find(|&&(from, _)| from == c)
                    .map(|&(_, to)| to)
                    .unwrap_or(c)
            })
            .rev()
            .collect()
    }
    fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                FLIP_TABLE
                    .iter()
                    .find(|&&(_, to)| to == c)
                    .map(|&(from, _)| from)
                    .unwrap_or(c)
            })
            .rev()
            .collect()
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Braille patterns. Encode-only: digits need the two-cell number
/// prefix and case is folded.
pub struct Braille;

fn braille_cell(c: char) -> Option<&'static str> {
    Some(match c {
        'a' => "⠁",
        'b' => "⠃",
        'c' => "⠉",
        'd' => "⠙",
        'e' => "⠑",
        'f' => "⠋",
        'g' => "⠛",
        'h' => "⠓",
        'i' => "⠊",
        'j' => "⠚",
        'k' => "⠅",
        'l' => "⠇",
        'm' => "⠍",
        'n' => "⠝",
        'o' => "⠕",
        'p' => "⠏",
        'q' => "⠟",
        'r' => "⠗",
        's' => "⠎",
        't' => "⠞",
        'u' => "⠥",
        'v' => "⠧",
        'w' => "⠺",
        'x' => "⠭",
        'y' => "⠽",
        'z' => "⠵",
        '0' => "⠼⠚",
        '1' => "⠼⠁",
        '2' => "⠼⠃",
        '3' => "⠼⠉",
        '4' => "⠼⠙",
        '5' => "⠼⠑",
        '6' => "⠼⠋",
        '7' => "⠼⠛",
        '8' => "⠼⠓",
        '9' => "⠼⠊",
        _ => return None,
    })
}

impl Transform for Braille {
    fn id(&self) -> &'static str {
        "braille"
    }
    fn display_name(&self) -> &'static str {
        "Braille"
    }
    fn encode(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                braille_cell(c)
                    .map(str::to_string)
                    .unwrap_or_else(|| c.to_string())
            })
            .collect()
    }
}

/// Invisible text: each UTF-8 byte becomes a codepoint in the Unicode
/// tag block (U+E0000 + byte). The output renders as nothing at all.
pub struct Invisible;

impl Transform for Invisible {
    fn id(&self) -> &'static str {
        "invisible"
    }
    fn display_name(&self) -> &'static str {
        "Invisible Text"
    }
    fn encode(&self, text: &str) -> String {
        text.bytes()
            .filter_map(|b| char::from_u32(0xE0000 + b as u32))
            .collect()
    }
    fn decode(&self, text: &str) -> String {
        let bytes: Vec<u8> = text
            .chars()
            .filter_map(|c| {
                let cp = c as u32;
                (0xE0000..=0xE00FF)
                    .contains(&cp)
                    .then(|| (cp - 0xE0000) as u8)
            })
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn preview(&self, _text: &str) -> String {
        "[invisible]".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morse_roundtrip() {
        let morse = Morse;
        assert_eq!(morse.encode("sos"), "... --- ...");
        assert_eq!(morse.decode("... --- ..."), "sos");
        assert_eq!(morse.decode(&morse.encode("attack at dawn")), "attack at dawn");
    }

    #[test]
    fn test_morse_decode_unknown_token_passes_through() {
        assert_eq!(Morse.decode("... xyz ..."), "sxyzs");
    }

    #[test]
    fn test_nato_encode_only() {
        assert_eq!(Nato.encode("abc"), "Alpha Bravo Charlie");
        assert!(!Nato.is_reversible());
    }

    #[test]
    fn test_leetspeak() {
        assert_eq!(Leetspeak.encode("Elite Hacker"), "31173 H4ck3r");
        assert!(!Leetspeak.is_reversible());
    }

    #[test]
    fn test_small_caps_folds_case() {
        assert_eq!(SmallCaps.encode("Hello"), "ʜᴇʟʟᴏ");
        assert!(!SmallCaps.is_reversible());
    }

    #[test]
    fn test_bubble_roundtrip() {
        let bubble = Bubble;
        assert_eq!(bubble.encode("Hi"), "Ⓗⓘ");
        assert_eq!(bubble.decode(&bubble.encode("Hello, World!")), "Hello, World!");
    }

    #[test]
    fn test_fullwidth_roundtrip() {
        let fw = Fullwidth;
        assert_eq!(fw.encode("A1 b"), "Ａ１\u{3000}ｂ");
        assert_eq!(fw.decode(&fw.encode("Hello, World! 123")), "Hello, World! 123");
    }

    #[test]
    fn test_upside_down_roundtrip() {
        let flip = UpsideDown;
        assert_eq!(flip.encode("hello"), "ollǝɥ");
        assert_eq!(flip.decode(&flip.encode("Attack at Dawn!")), "Attack at Dawn!");
    }

    #[test]
    fn test_braille_encode() {
        assert_eq!(Braille.encode("ab1"), "⠁⠃⠼⠁");
        assert!(!Braille.is_reversible());
    }

    #[test]
    fn test_invisible_roundtrip_multibyte() {
        let inv = Invisible;
        let encoded = inv.encode("hi 世界");
        assert!(encoded.chars().all(|c| (0xE0000..=0xE00FF).contains(&(c as u32))));
        assert_eq!(inv.decode(&encoded), "hi 世界");
    }

    #[test]
    fn test_invisible_decode_ignores_visible_text() {
        let inv = Invisible;
        let mixed = format!("visible{}", inv.encode("hidden"));
        assert_eq!(inv.decode(&mixed), "hidden");
    }
}
