//! The bit-embedding channel.
//!
//! This module hides a message inside carrier text using two reserved
//! non-rendering codepoints: VS15 (U+FE0E) carries a 0 bit, VS16
//! (U+FE0F) carries a 1 bit. The message's UTF-8 bytes become a
//! bitstream (MSB-first within each byte) and one marker per bit is
//! appended to the carrier. The carrier itself is opaque to the
//! channel: it is never inspected or rewritten, and stripping both
//! markers from the output yields the original carrier exactly.
//!
//! Extraction tolerates markers anywhere in the text, not only as a
//! trailing run, so a carrier that gets edited after encoding still
//! yields whatever bits survive.

use thiserror::Error;

/// Marker codepoint for a 0 bit (variation selector 15).
pub const BIT_ZERO: char = '\u{FE0E}';

/// Marker codepoint for a 1 bit (variation selector 16).
pub const BIT_ONE: char = '\u{FE0F}';

/// Caller errors for the embedding channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    #[error("Message is required")]
    EmptyMessage,

    #[error("Carrier text is required")]
    EmptyCarrier,
}

/// Converts bytes to a bitstream, most significant bit first.
fn to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    bits
}

/// Groups a bitstream back into bytes, MSB-first. A trailing group of
/// fewer than 8 bits is discarded.
fn to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|group| {
            group
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
        })
        .collect()
}

/// Hides `message` inside `carrier` by appending one invisible marker
/// per message bit.
///
/// The visible rendering of the result equals `carrier`: both markers
/// are non-rendering codepoints.
pub fn hide(message: &str, carrier: &str) -> Result<String, StegoError> {
    if message.is_empty() {
        return Err(StegoError::EmptyMessage);
    }
    if carrier.is_empty() {
        return Err(StegoError::EmptyCarrier);
    }

    let bits = to_bits(message.as_bytes());
    let mut out = String::with_capacity(carrier.len() + bits.len() * 3);
    out.push_str(carrier);
    for bit in bits {
        out.push(if bit { BIT_ONE } else { BIT_ZERO });
    }
    Ok(out)
}

/// Extracts a hidden message from `carrier`.
///
/// Scans for the two reserved markers anywhere in the text, in order
/// of appearance, ignoring everything else. A carrier with no markers
/// yields an empty message, not an error. Byte runs that are not valid
/// UTF-8 decode lossily with U+FFFD per invalid unit.
pub fn reveal(carrier: &str) -> Result<String, StegoError> {
    if carrier.is_empty() {
        return Err(StegoError::EmptyCarrier);
    }

    let bits: Vec<bool> = carrier
        .chars()
        .filter_map(|c| match c {
            BIT_ZERO => Some(false),
            BIT_ONE => Some(true),
            _ => None,
        })
        .collect();

    Ok(String::from_utf8_lossy(&to_bytes(&bits)).into_owned())
}

/// Removes both marker codepoints, recovering the visible text.
pub fn strip_markers(text: &str) -> String {
    text.chars().filter(|&c| c != BIT_ZERO && c != BIT_ONE).collect()
}

/// Number of marker codepoints `hide` would append for this message.
pub fn marker_count(message: &str) -> usize {
    message.len() * 8
}
