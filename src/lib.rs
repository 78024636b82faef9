//! # Veiltext - Hide messages in plain sight
//!
//! Veiltext is a text steganography and obfuscation toolkit:
//! - Hide an arbitrary message inside ordinary-looking carrier text
//!   using non-rendering Unicode codepoints (variation selectors carry
//!   the bits, one codepoint per bit)
//! - Encode and decode text through a registry of transforms:
//!   numeric bases, classic ciphers, script maps, case games
//! - Scramble a sentence by applying a different randomly-chosen
//!   transform to every word
//! - Analyze arbitrary text for the codepoint classes that invisible
//!   encodings leave behind
//!
//! None of this is cryptography - the ciphers are obfuscation, not
//! confidentiality.
//!
//! ## Example Usage
//!
//! ```rust
//! use veiltext::stego;
//! use veiltext::transform::TransformRegistry;
//!
//! // Hide a message inside visible text
//! let encoded = stego::hide("SECRET", "See you at the usual place.").unwrap();
//!
//! // The carrier renders unchanged; the payload rides along invisibly
//! assert_eq!(stego::strip_markers(&encoded), "See you at the usual place.");
//! assert_eq!(stego::reveal(&encoded).unwrap(), "SECRET");
//!
//! // The transform registry is built once and shared by reference
//! let registry = TransformRegistry::standard();
//! let scrambled = registry.encode_with("rot13", "Attack at Dawn").unwrap();
//! assert_eq!(registry.decode_with("rot13", &scrambled).unwrap(), "Attack at Dawn");
//! ```
//!
//! ## Modules
//!
//! - [`stego`]: the bit-embedding channel (hide, reveal, strip)
//! - [`transform`]: the transform contract, registry and codecs
//! - [`randomize`]: lossless word segmentation + per-word scrambling
//! - [`analyze`]: suspicion scoring for hidden-payload detection
//! - [`grapheme`]: user-perceived character helpers

pub mod analyze;
pub mod grapheme;
pub mod randomize;
pub mod stego;
pub mod transform;

// Re-export commonly used types at the crate root
pub use analyze::{analyze, Analysis};
pub use randomize::{
    randomize, randomize_seeded, reverse, segment, RandomizeOptions, Randomized, ReverseError,
    TransformApplication, WordSegment,
};
pub use stego::{hide, reveal, strip_markers, StegoError};
pub use transform::{DecodeCandidate, Transform, TransformError, TransformRegistry};
