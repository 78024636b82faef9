//! Numeric-base codecs.
//!
//! All of these operate on the UTF-8 byte sequence of the input, never
//! on code units, so multi-byte characters round-trip correctly.
//! Decode is fails-safe across the board: invalid digits are skipped,
//! truncated trailing groups are dropped, and byte runs that are not
//! valid UTF-8 are decoded lossily with U+FFFD.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use super::Transform;

/// Decodes recovered bytes as text, substituting U+FFFD per invalid unit.
fn bytes_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Big-number base conversion: bytes (big-endian base 256) to digits of
/// `alphabet`. Used by the alphabets without a power-of-two radix.
fn radix_encode(bytes: &[u8], alphabet: &[char]) -> String {
    let radix = alphabet.len() as u32;
    let mut num: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    let mut out = Vec::new();

    while !num.is_empty() {
        let mut rem: u32 = 0;
        let mut next = Vec::with_capacity(num.len());
        for &b in &num {
            let acc = rem * 256 + b as u32;
            let q = acc / radix;
            rem = acc % radix;
            if !next.is_empty() || q != 0 {
                next.push(q as u8);
            }
        }
        out.push(alphabet[rem as usize]);
        num = next;
    }

    out.reverse();
    out.into_iter().collect()
}

/// Inverse of `radix_encode`. Characters outside the alphabet are
/// skipped rather than rejected.
fn radix_decode(text: &str, alphabet: &[char]) -> Vec<u8> {
    let radix = alphabet.len() as u32;
    let mut num: Vec<u8> = Vec::new();

    for ch in text.chars() {
        let Some(digit) = alphabet.iter().position(|&a| a == ch) else {
            continue;
        };
        let mut carry = digit as u32;
        for b in num.iter_mut().rev() {
            let acc = *b as u32 * radix + carry;
            *b = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }
        while carry > 0 {
            num.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    num
}

/// Base64 (RFC 4648, standard alphabet with padding).
pub struct Base64;

impl Transform for Base64 {
    fn id(&self) -> &'static str {
        "base64"
    }
    fn display_name(&self) -> &'static str {
        "Base64"
    }
    fn encode(&self, text: &str) -> String {
        STANDARD.encode(text.as_bytes())
    }
    fn decode(&self, text: &str) -> String {
        match STANDARD.decode(text) {
            Ok(bytes) => bytes_to_text(&bytes),
            Err(_) => text.to_string(),
        }
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Base64 with the URL-safe alphabet, unpadded.
pub struct Base64Url;

impl Transform for Base64Url {
    fn id(&self) -> &'static str {
        "base64url"
    }
    fn display_name(&self) -> &'static str {
        "Base64 URL"
    }
    fn encode(&self, text: &str) -> String {
        URL_SAFE_NO_PAD.encode(text.as_bytes())
    }
    fn decode(&self, text: &str) -> String {
        match URL_SAFE_NO_PAD.decode(text.trim_end_matches('=')) {
            Ok(bytes) => bytes_to_text(&bytes),
            Err(_) => text.to_string(),
        }
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

const BASE32_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Base32 (RFC 4648), padded to 8-character blocks.
pub struct Base32;

impl Transform for Base32 {
    fn id(&self) -> &'static str {
        "base32"
    }
    fn display_name(&self) -> &'static str {
        "Base32"
    }
    fn encode(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::new();
        let mut buffer: u32 = 0;
        let mut bits = 0;

        for &b in bytes {
            buffer = (buffer << 8) | b as u32;
            bits += 8;
            while bits >= 5 {
                bits -= 5;
                out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
            }
        }
        if bits > 0 {
            out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
        }
        while !out.is_empty() && out.len() % 8 != 0 {
            out.push('=');
        }
        out
    }
    fn decode(&self, text: &str) -> String {
        let mut bytes = Vec::new();
        let mut buffer: u32 = 0;
        let mut bits = 0;

        for ch in text.chars() {
            let upper = ch.to_ascii_uppercase();
            let Some(value) = BASE32_ALPHABET.iter().position(|&a| a as char == upper) else {
                continue;
            };
            buffer = (buffer << 5) | value as u32;
            bits += 5;
            if bits >= 8 {
                bits -= 8;
                bytes.push(((buffer >> bits) & 0xFF) as u8);
            }
        }

        bytes_to_text(&bytes)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Base45 (RFC 9285), the QR-alphanumeric-friendly encoding.
pub struct Base45;

impl Transform for Base45 {
    fn id(&self) -> &'static str {
        "base45"
    }
    fn display_name(&self) -> &'static str {
        "Base45"
    }
    fn encode(&self, text: &str) -> String {
        base45::encode(text.as_bytes())
    }
    fn decode(&self, text: &str) -> String {
        match base45::decode(text) {
            Ok(bytes) => bytes_to_text(&bytes),
            Err(_) => text.to_string(),
        }
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

const BASE58_ALPHABET: [char; 58] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K',
    'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e',
    'f', 'g', 'h', 'i', 'j', 'k', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y',
    'z',
];

/// Base58 (Bitcoin alphabet). Leading zero bytes map to leading '1's.
pub struct Base58;

impl Transform for Base58 {
    fn id(&self) -> &'static str {
        "base58"
    }
    fn display_name(&self) -> &'static str {
        "Base58"
    }
    fn encode(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let zeros = bytes.iter().take_while(|&&b| b == 0).count();
        let body = radix_encode(bytes, &BASE58_ALPHABET);
        format!("{}{}", "1".repeat(zeros), body)
    }
    fn decode(&self, text: &str) -> String {
        let zeros = text.chars().take_while(|&c| c == '1').count();
        let mut bytes = vec![0u8; zeros];
        bytes.extend(radix_decode(&text[zeros..], &BASE58_ALPHABET));
        bytes_to_text(&bytes)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

const BASE62_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b',
    'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u',
    'v', 'w', 'x', 'y', 'z',
];

/// Base62 (0-9A-Za-z), plain radix conversion.
pub struct Base62;

impl Transform for Base62 {
    fn id(&self) -> &'static str {
        "base62"
    }
    fn display_name(&self) -> &'static str {
        "Base62"
    }
    fn encode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let body = radix_encode(text.as_bytes(), &BASE62_ALPHABET);
        if body.is_empty() {
            "0".to_string()
        } else {
            body
        }
    }
    fn decode(&self, text: &str) -> String {
        bytes_to_text(&radix_decode(text, &BASE62_ALPHABET))
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

const Z85_ALPHABET: [char; 85] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', '.', '-', ':', '+', '=', '^', '!', '/', '*', '?', '&', '<', '>', '(',
    ')', '[', ']', '{', '}', '@', '%', '$', '#',
];

/// Base85, Z85 variant (ZeroMQ). Input is zero-padded to a 4-byte
/// boundary; decode trims the padding back off, so the declared domain
/// is text without trailing NUL bytes.
pub struct Z85;

impl Transform for Z85 {
    fn id(&self) -> &'static str {
        "z85"
    }
    fn display_name(&self) -> &'static str {
        "Base85 (Z85)"
    }
    fn encode(&self, text: &str) -> String {
        let mut bytes = text.as_bytes().to_vec();
        while bytes.len() % 4 != 0 {
            bytes.push(0);
        }

        let mut out = String::with_capacity(bytes.len() / 4 * 5);
        for chunk in bytes.chunks_exact(4) {
            let mut value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let mut block = ['0'; 5];
            for slot in block.iter_mut().rev() {
                *slot = Z85_ALPHABET[(value % 85) as usize];
                value /= 85;
            }
            out.extend(block);
        }
        out
    }
    fn decode(&self, text: &str) -> String {
        let digits: Vec<u32> = text
            .chars()
            .filter_map(|c| Z85_ALPHABET.iter().position(|&a| a == c).map(|i| i as u32))
            .collect();

        let mut bytes = Vec::with_capacity(digits.len() / 5 * 4);
        for chunk in digits.chunks_exact(5) {
            let value = chunk.iter().fold(0u32, |acc, &d| acc.wrapping_mul(85).wrapping_add(d));
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes_to_text(&bytes)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// Hexadecimal, lowercase byte pairs separated by spaces.
pub struct Hex;

impl Transform for Hex {
    fn id(&self) -> &'static str {
        "hex"
    }
    fn display_name(&self) -> &'static str {
        "Hexadecimal"
    }
    fn encode(&self, text: &str) -> String {
        text.as_bytes()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
    fn decode(&self, text: &str) -> String {
        let digits: Vec<u8> = text
            .chars()
            .filter_map(|c| c.to_digit(16).map(|d| d as u8))
            .collect();
        let bytes: Vec<u8> = digits
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();
        bytes_to_text(&bytes)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Binary, 8-bit groups separated by spaces.
pub struct Binary;

impl Transform for Binary {
    fn id(&self) -> &'static str {
        "binary"
    }
    fn display_name(&self) -> &'static str {
        "Binary"
    }
    fn encode(&self, text: &str) -> String {
        text.as_bytes()
            .iter()
            .map(|b| format!("{:08b}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
    fn decode(&self, text: &str) -> String {
        let bits: Vec<u8> = text
            .chars()
            .filter_map(|c| match c {
                '0' => Some(0),
                '1' => Some(1),
                _ => None,
            })
            .collect();
        let bytes: Vec<u8> = bits
            .chunks_exact(8)
            .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
            .collect();
        bytes_to_text(&bytes)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(t: &dyn Transform, input: &str) {
        let encoded = t.encode(input);
        assert_eq!(t.decode(&encoded), input, "transform '{}'", t.id());
    }

    #[test]
    fn test_base64_roundtrip_multibyte() {
        roundtrip(&Base64, "hello, 世界");
        assert_eq!(Base64.encode("hello"), "aGVsbG8=");
    }

    #[test]
    fn test_base64_decode_garbage_returns_input() {
        assert_eq!(Base64.decode("???"), "???");
    }

    #[test]
    fn test_base64url_roundtrip() {
        roundtrip(&Base64Url, "data?with/special+chars");
        let encoded = Base64Url.encode("data?with/special+chars");
        assert!(!encoded.contains('+') && !encoded.contains('/') && !encoded.contains('='));
    }

    #[test]
    fn test_base32_roundtrip_and_padding() {
        roundtrip(&Base32, "hello, 世界");
        assert_eq!(Base32.encode("foo"), "MZXW6===");
        // Lowercase and stray separators are tolerated
        assert_eq!(Base32.decode("mzxw 6==="), "foo");
    }

    #[test]
    fn test_base45_roundtrip() {
        roundtrip(&Base45, "Hello!!");
    }

    #[test]
    fn test_base58_roundtrip_with_leading_zero() {
        roundtrip(&Base58, "hello, 世界");
        roundtrip(&Base58, "\0\0abc");
    }

    #[test]
    fn test_base58_decode_skips_invalid_chars() {
        let encoded = Base58.encode("hi");
        // '0', 'O', 'I', 'l' are not in the alphabet
        let noisy = format!("0{}O", encoded);
        assert_eq!(Base58.decode(&noisy), "hi");
    }

    #[test]
    fn test_base62_roundtrip() {
        roundtrip(&Base62, "hello, 世界");
        assert_eq!(Base62.encode(""), "");
    }

    #[test]
    fn test_z85_roundtrip() {
        roundtrip(&Z85, "hell");
        roundtrip(&Z85, "hello, 世界");
    }

    #[test]
    fn test_hex_roundtrip_and_safety() {
        roundtrip(&Hex, "hello, 世界");
        assert_eq!(Hex.encode("hi"), "68 69");
        // Garbage decode must not panic; invalid chars are skipped
        let _ = Hex.decode("not-valid-hex!!");
        // Odd trailing digit is dropped
        assert_eq!(Hex.decode("68 69 6"), "hi");
    }

    #[test]
    fn test_binary_roundtrip_and_truncation() {
        roundtrip(&Binary, "hello, 世界");
        assert_eq!(Binary.decode("01101000 0110100"), "h");
    }
}
