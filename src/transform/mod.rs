//! The transform contract and the codec registry.
//!
//! Every codec in veiltext satisfies one contract:
//! - `encode` is total: it must not panic for any string input,
//!   including the empty string.
//! - `decode` is only meaningful when `is_reversible()` is true, and is
//!   equally total: malformed input (bad digits, truncated groups,
//!   wrong padding) is absorbed by skipping the offending unit or
//!   returning the input untouched, never by panicking. This lets the
//!   universal decoder try every registered transform against arbitrary
//!   input without per-call error handling.
//! - Reversibility is an explicit capability flag, checked before any
//!   decode is attempted.
//! - Transforms are pure: parameters (shift, key, rail count) are
//!   immutable fields fixed at construction, and the parameterized
//!   cores are also exposed as free functions taking the parameters
//!   explicitly. No transform stores or flips state across calls, so a
//!   process-wide registry serves concurrent callers without locking.

pub mod bases;
pub mod ciphers;
pub mod registry;
pub mod scripts;
pub mod words;

pub use registry::{DecodeCandidate, TransformRegistry};

use thiserror::Error;

use crate::grapheme;

/// Errors surfaced to callers of registry operations.
///
/// These are the only error kinds the transform layer raises. Malformed
/// input inside a `decode` is never one of them - it is handled inside
/// the transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Unknown transform '{0}'")]
    UnknownTransform(String),

    #[error("Transform '{0}' is not reversible")]
    NotReversible(String),
}

/// A reversible or one-way text codec.
///
/// Implementations must be stateless: `encode` and `decode` are pure
/// functions of their arguments and the immutable fields of `self`.
pub trait Transform: Send + Sync {
    /// Unique registry key, e.g. `"base64"`.
    fn id(&self) -> &'static str;

    /// Human-readable name, e.g. `"Base64"`.
    fn display_name(&self) -> &'static str;

    /// Encodes the input. Total over all strings.
    fn encode(&self, text: &str) -> String;

    /// Decodes previously encoded text. Only meaningful when
    /// `is_reversible()` returns true. Total over all strings:
    /// malformed units are skipped or the input is returned untouched.
    fn decode(&self, text: &str) -> String {
        text.to_string()
    }

    /// Whether `decode(encode(s)) == s` holds over this transform's
    /// declared domain. Lossy transforms (case folding, duplicate
    /// targets) must leave this false rather than synthesize an
    /// ambiguous inverse.
    fn is_reversible(&self) -> bool {
        false
    }

    /// Whether this transform is safe for per-word composition in the
    /// randomizer: pure, stateless, and sensible on single words.
    fn is_randomizable(&self) -> bool {
        false
    }

    /// A short sample rendering for list UIs.
    fn preview(&self, text: &str) -> String {
        let sample: String = grapheme::split(text).into_iter().take(8).collect();
        let encoded = self.encode(&sample);
        if grapheme::count(text) > 8 {
            format!("{}...", encoded)
        } else {
            encoded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Transform for Upper {
        fn id(&self) -> &'static str {
            "upper"
        }
        fn display_name(&self) -> &'static str {
            "Uppercase"
        }
        fn encode(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_default_decode_returns_input() {
        let t = Upper;
        assert_eq!(t.decode("ABC"), "ABC");
        assert!(!t.is_reversible());
    }

    #[test]
    fn test_preview_truncates_long_input() {
        let t = Upper;
        assert_eq!(t.preview("abc"), "ABC");
        assert_eq!(t.preview("abcdefghij"), "ABCDEFGH...");
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let unknown = TransformError::UnknownTransform("nope".into());
        let not_rev = TransformError::NotReversible("leetspeak".into());
        assert_ne!(unknown, not_rev);
        assert_eq!(unknown.to_string(), "Unknown transform 'nope'");
    }
}
