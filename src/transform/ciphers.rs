//! Shift- and key-based ciphers.
//!
//! Obfuscation, not confidentiality. Every parameter (shift, key, rail
//! count) is an immutable field fixed at construction, and the cores
//! are exposed as free functions taking the parameters explicitly -
//! nothing here stores a "current shift" that gets flipped for
//! decoding, so instances are safe to share across concurrent callers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::Transform;

/// Shifts ASCII letters forward by `shift` positions, wrapping within
/// each case. Non-letters pass through unchanged.
pub fn shift_letters(text: &str, shift: u32) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (b'A' + ((c as u8 - b'A') as u32 + shift) as u8 % 26) as char,
            'a'..='z' => (b'a' + ((c as u8 - b'a') as u32 + shift) as u8 % 26) as char,
            _ => c,
        })
        .collect()
}

/// Shifts ASCII digits forward by `shift` positions, wrapping.
pub fn shift_digits(text: &str, shift: u32) -> String {
    let shift = shift % 10;
    text.chars()
        .map(|c| match c {
            '0'..='9' => (b'0' + ((c as u8 - b'0') as u32 + shift) as u8 % 10) as char,
            _ => c,
        })
        .collect()
}

/// Caesar cipher with an explicit shift.
pub struct Caesar {
    shift: u32,
}

impl Caesar {
    pub fn new(shift: u32) -> Self {
        Self { shift: shift % 26 }
    }
}

impl Transform for Caesar {
    fn id(&self) -> &'static str {
        "caesar"
    }
    fn display_name(&self) -> &'static str {
        "Caesar Cipher"
    }
    fn encode(&self, text: &str) -> String {
        shift_letters(text, self.shift)
    }
    fn decode(&self, text: &str) -> String {
        shift_letters(text, 26 - self.shift)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// ROT13. Self-inverse.
pub struct Rot13;

impl Transform for Rot13 {
    fn id(&self) -> &'static str {
        "rot13"
    }
    fn display_name(&self) -> &'static str {
        "ROT13"
    }
    fn encode(&self, text: &str) -> String {
        shift_letters(text, 13)
    }
    fn decode(&self, text: &str) -> String {
        shift_letters(text, 13)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// ROT5 on digits. Self-inverse.
pub struct Rot5;

impl Transform for Rot5 {
    fn id(&self) -> &'static str {
        "rot5"
    }
    fn display_name(&self) -> &'static str {
        "ROT5"
    }
    fn encode(&self, text: &str) -> String {
        shift_digits(text, 5)
    }
    fn decode(&self, text: &str) -> String {
        shift_digits(text, 5)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// ROT18: ROT13 on letters plus ROT5 on digits. Self-inverse.
pub struct Rot18;

impl Transform for Rot18 {
    fn id(&self) -> &'static str {
        "rot18"
    }
    fn display_name(&self) -> &'static str {
        "ROT18"
    }
    fn encode(&self, text: &str) -> String {
        shift_digits(&shift_letters(text, 13), 5)
    }
    fn decode(&self, text: &str) -> String {
        self.encode(text)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// Rotation over the printable ASCII range 33..=126.
///
/// The rotation offset is 14, not the textbook 47, so this variant is
/// not self-inverse; decode applies the complementary offset.
pub struct Rot47;

fn rotate_printable(text: &str, offset: u32) -> String {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if (33..=126).contains(&code) {
                char::from_u32(33 + ((code - 33 + offset) % 94)).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

impl Transform for Rot47 {
    fn id(&self) -> &'static str {
        "rot47"
    }
    fn display_name(&self) -> &'static str {
        "ROT47"
    }
    fn encode(&self, text: &str) -> String {
        rotate_printable(text, 14)
    }
    fn decode(&self, text: &str) -> String {
        rotate_printable(text, 94 - 14)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// Atbash: mirrors the alphabet (a<->z). Self-inverse.
pub struct Atbash;

impl Transform for Atbash {
    fn id(&self) -> &'static str {
        "atbash"
    }
    fn display_name(&self) -> &'static str {
        "Atbash"
    }
    fn encode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                'A'..='Z' => (b'Z' - (c as u8 - b'A')) as char,
                'a'..='z' => (b'z' - (c as u8 - b'a')) as char,
                _ => c,
            })
            .collect()
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

/// Applies the Vigenère tableau. The key index advances only on
/// letters, so punctuation does not desynchronize the stream.
fn vigenere_apply(text: &str, key: &str, decrypt: bool) -> String {
    let key_shifts: Vec<u32> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as u32)
        .collect();
    if key_shifts.is_empty() {
        return text.to_string();
    }

    let mut j = 0;
    text.chars()
        .map(|c| {
            let k = key_shifts[j % key_shifts.len()];
            let shift = if decrypt { 26 - k } else { k };
            match c {
                'A'..='Z' => {
                    j += 1;
                    (b'A' + ((c as u8 - b'A') as u32 + shift) as u8 % 26) as char
                }
                'a'..='z' => {
                    j += 1;
                    (b'a' + ((c as u8 - b'a') as u32 + shift) as u8 % 26) as char
                }
                _ => c,
            }
        })
        .collect()
}

/// Encrypts with a Vigenère key (letters of `key`; empty key is a no-op).
pub fn vigenere_encrypt(text: &str, key: &str) -> String {
    vigenere_apply(text, key, false)
}

/// Decrypts with a Vigenère key.
pub fn vigenere_decrypt(text: &str, key: &str) -> String {
    vigenere_apply(text, key, true)
}

/// Vigenère cipher with a fixed key.
pub struct Vigenere {
    key: String,
}

impl Vigenere {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl Transform for Vigenere {
    fn id(&self) -> &'static str {
        "vigenere"
    }
    fn display_name(&self) -> &'static str {
        "Vigenère Cipher"
    }
    fn encode(&self, text: &str) -> String {
        vigenere_encrypt(text, &self.key)
    }
    fn decode(&self, text: &str) -> String {
        vigenere_decrypt(text, &self.key)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        true
    }
}

/// Modular inverse of `a` mod `m`, if `a` and `m` are coprime.
fn mod_inverse(a: u32, m: u32) -> Option<u32> {
    (1..m).find(|&x| (a * x) % m == 1)
}

/// Affine cipher: `x -> a*x + b (mod 26)` on letters.
pub struct Affine {
    a: u32,
    b: u32,
    inv_a: Option<u32>,
}

impl Affine {
    /// `a` must be coprime with 26 for the cipher to be invertible;
    /// otherwise decode passes input through unchanged.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            a: a % 26,
            b: b % 26,
            inv_a: mod_inverse(a % 26, 26),
        }
    }
}

/// Affine encryption with explicit parameters.
pub fn affine_encrypt(text: &str, a: u32, b: u32) -> String {
    let (a, b) = (a % 26, b % 26);
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (b'A' + ((a * (c as u8 - b'A') as u32 + b) % 26) as u8) as char,
            'a'..='z' => (b'a' + ((a * (c as u8 - b'a') as u32 + b) % 26) as u8) as char,
            _ => c,
        })
        .collect()
}

/// Affine decryption with explicit parameters. No-op when `a` has no
/// inverse mod 26.
pub fn affine_decrypt(text: &str, a: u32, b: u32) -> String {
    let Some(inv_a) = mod_inverse(a % 26, 26) else {
        return text.to_string();
    };
    let b = b % 26;
    text.chars()
        .map(|c| match c {
            'A'..='Z' => {
                (b'A' + ((inv_a * ((c as u8 - b'A') as u32 + 26 - b)) % 26) as u8) as char
            }
            'a'..='z' => {
                (b'a' + ((inv_a * ((c as u8 - b'a') as u32 + 26 - b)) % 26) as u8) as char
            }
            _ => c,
        })
        .collect()
}

impl Transform for Affine {
    fn id(&self) -> &'static str {
        "affine"
    }
    fn display_name(&self) -> &'static str {
        "Affine Cipher (a=5,b=8)"
    }
    fn encode(&self, text: &str) -> String {
        affine_encrypt(text, self.a, self.b)
    }
    fn decode(&self, text: &str) -> String {
        if self.inv_a.is_none() {
            return text.to_string();
        }
        affine_decrypt(text, self.a, self.b)
    }
    fn is_reversible(&self) -> bool {
        self.inv_a.is_some()
    }
}

/// XOR with a repeating key, armored as Base64 so the output stays
/// printable.
pub struct Xor {
    key: String,
}

impl Xor {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

/// XOR-and-armor with an explicit key (empty key is a no-op XOR).
pub fn xor_encrypt(text: &str, key: &str) -> String {
    STANDARD.encode(xor_bytes(text.as_bytes(), key.as_bytes()))
}

/// Dearmor-and-XOR with an explicit key. Input that is not valid
/// Base64 is returned untouched.
pub fn xor_decrypt(text: &str, key: &str) -> String {
    match STANDARD.decode(text) {
        Ok(bytes) => String::from_utf8_lossy(&xor_bytes(&bytes, key.as_bytes())).into_owned(),
        Err(_) => text.to_string(),
    }
}

fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect()
}

impl Transform for Xor {
    fn id(&self) -> &'static str {
        "xor"
    }
    fn display_name(&self) -> &'static str {
        "XOR Cipher (KEY)"
    }
    fn encode(&self, text: &str) -> String {
        xor_encrypt(text, &self.key)
    }
    fn decode(&self, text: &str) -> String {
        xor_decrypt(text, &self.key)
    }
    fn is_reversible(&self) -> bool {
        true
    }
}

/// Rail fence transposition with a fixed rail count.
pub struct RailFence {
    id: &'static str,
    name: &'static str,
    rails: usize,
}

impl RailFence {
    pub fn new(id: &'static str, name: &'static str, rails: usize) -> Self {
        Self { id, name, rails }
    }
}

/// The zigzag rail index for each character position.
fn rail_pattern(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0usize;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if down {
            if rail + 1 == rails {
                down = false;
                rail -= 1;
            } else {
                rail += 1;
            }
        } else if rail == 0 {
            down = true;
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    pattern
}

/// Rail fence encode with an explicit rail count.
pub fn rail_fence_encode(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if rails < 2 || chars.len() < 2 {
        return text.to_string();
    }
    let pattern = rail_pattern(chars.len(), rails);
    let mut out = String::with_capacity(text.len());
    for r in 0..rails {
        for (i, &c) in chars.iter().enumerate() {
            if pattern[i] == r {
                out.push(c);
            }
        }
    }
    out
}

/// Rail fence decode with an explicit rail count.
pub fn rail_fence_decode(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if rails < 2 || chars.len() < 2 {
        return text.to_string();
    }
    let pattern = rail_pattern(chars.len(), rails);

    let mut counts = vec![0usize; rails];
    for &r in &pattern {
        counts[r] += 1;
    }

    // Starting offset of each rail within the ciphertext
    let mut offsets = vec![0usize; rails];
    for r in 1..rails {
        offsets[r] = offsets[r - 1] + counts[r - 1];
    }

    let mut positions = vec![0usize; rails];
    let mut out = String::with_capacity(text.len());
    for &r in &pattern {
        out.push(chars[offsets[r] + positions[r]]);
        positions[r] += 1;
    }
    out
}

impl Transform for RailFence {
    fn id(&self) -> &'static str {
        self.id
    }
    fn display_name(&self) -> &'static str {
        self.name
    }
    fn encode(&self, text: &str) -> String {
        rail_fence_encode(text, self.rails)
    }
    fn decode(&self, text: &str) -> String {
        rail_fence_decode(text, self.rails)
    }
    fn is_reversible(&self) -> bool {
        true
    }
    fn is_randomizable(&self) -> bool {
        self.rails == 3
    }
}

/// A1Z26: letters become their 1-26 position, hyphen-separated.
///
/// Encode-only: "1-2" could be "ab" or "l", so no decode is declared.
pub struct A1z26;

impl Transform for A1z26 {
    fn id(&self) -> &'static str {
        "a1z26"
    }
    fn display_name(&self) -> &'static str {
        "A1Z26"
    }
    fn encode(&self, text: &str) -> String {
        let mut out = String::new();
        let mut prev_was_letter = false;
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                if prev_was_letter {
                    out.push('-');
                }
                out.push_str(&(c.to_ascii_uppercase() as u8 - b'A' + 1).to_string());
                prev_was_letter = true;
            } else {
                out.push(c);
                prev_was_letter = false;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_roundtrip() {
        let caesar = Caesar::new(3);
        assert_eq!(caesar.encode("Attack at Dawn"), "Dwwdfn dw Gdzq");
        assert_eq!(caesar.decode("Dwwdfn dw Gdzq"), "Attack at Dawn");
    }

    #[test]
    fn test_caesar_free_function_is_pure() {
        // Two interleaved "calls" with different shifts cannot interfere
        let a = shift_letters("abc", 1);
        let b = shift_letters("abc", 2);
        assert_eq!(a, "bcd");
        assert_eq!(b, "cde");
    }

    #[test]
    fn test_rot13_self_inverse() {
        let text = "Attack at Dawn";
        assert_eq!(Rot13.encode(&Rot13.encode(text)), text);
    }

    #[test]
    fn test_rot5_and_rot18() {
        assert_eq!(Rot5.encode("2024"), "7579");
        assert_eq!(Rot18.encode(&Rot18.encode("Agent 007")), "Agent 007");
    }

    #[test]
    fn test_rot47_roundtrip() {
        let text = "Hello, World! 123";
        assert_eq!(Rot47.decode(&Rot47.encode(text)), text);
    }

    #[test]
    fn test_atbash_self_inverse() {
        assert_eq!(Atbash.encode("abcxyz"), "zyxcba");
        assert_eq!(Atbash.encode(&Atbash.encode("Mixed Case!")), "Mixed Case!");
    }

    #[test]
    fn test_vigenere_roundtrip_with_punctuation() {
        let text = "Attack at dawn, 5am!";
        let encrypted = vigenere_encrypt(text, "LEMON");
        assert_eq!(vigenere_decrypt(&encrypted, "LEMON"), text);
    }

    #[test]
    fn test_vigenere_empty_key_is_noop() {
        assert_eq!(vigenere_encrypt("abc", ""), "abc");
        assert_eq!(vigenere_encrypt("abc", "123"), "abc");
    }

    #[test]
    fn test_affine_roundtrip() {
        let affine = Affine::new(5, 8);
        let text = "Affine Cipher Test";
        assert_eq!(affine.decode(&affine.encode(text)), text);
    }

    #[test]
    fn test_affine_non_coprime_not_reversible() {
        let affine = Affine::new(13, 8);
        assert!(!affine.is_reversible());
    }

    #[test]
    fn test_xor_roundtrip() {
        let xor = Xor::new("KEY");
        let text = "hello, 世界";
        assert_eq!(xor.decode(&xor.encode(text)), text);
        // Garbage input falls through untouched
        assert_eq!(xor.decode("???"), "???");
    }

    #[test]
    fn test_rail_fence_roundtrip() {
        for rails in [2, 3, 5] {
            let text = "WEAREDISCOVEREDFLEEATONCE";
            let encoded = rail_fence_encode(text, rails);
            assert_eq!(rail_fence_decode(&encoded, rails), text, "{} rails", rails);
        }
    }

    #[test]
    fn test_rail_fence_classic_vector() {
        assert_eq!(
            rail_fence_encode("WEAREDISCOVEREDFLEEATONCE", 3),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
    }

    #[test]
    fn test_rail_fence_short_input_passthrough() {
        assert_eq!(rail_fence_encode("a", 3), "a");
        assert_eq!(rail_fence_encode("", 3), "");
    }

    #[test]
    fn test_a1z26_encode() {
        assert_eq!(A1z26.encode("abc xyz"), "1-2-3 24-25-26");
        assert!(!A1z26.is_reversible());
    }
}
