//! Name-keyed collection of transform instances.
//!
//! The registry is constructed once at startup and passed by reference
//! to all consumers. It is immutable after construction - there is no
//! global singleton and nothing to lock.

use std::collections::HashMap;

use super::{bases, ciphers, scripts, words, Transform, TransformError};

/// One candidate produced by the universal decoder.
#[derive(Debug, Clone)]
pub struct DecodeCandidate {
    /// Registry id of the transform that produced this decoding.
    pub transform_id: &'static str,
    /// Human-readable transform name.
    pub display_name: &'static str,
    /// The decoded text.
    pub decoded: String,
}

/// Immutable table of registered transforms, keyed by id.
pub struct TransformRegistry {
    transforms: Vec<Box<dyn Transform>>,
    index: HashMap<&'static str, usize>,
}

impl TransformRegistry {
    /// Builds the standard registry with every built-in codec.
    pub fn standard() -> Self {
        let mut registry = Self {
            transforms: Vec::new(),
            index: HashMap::new(),
        };

        // Numeric-base codecs (operate on UTF-8 bytes)
        registry.register(Box::new(bases::Base64));
        registry.register(Box::new(bases::Base64Url));
        registry.register(Box::new(bases::Base32));
        registry.register(Box::new(bases::Base45));
        registry.register(Box::new(bases::Base58));
        registry.register(Box::new(bases::Base62));
        registry.register(Box::new(bases::Z85));
        registry.register(Box::new(bases::Hex));
        registry.register(Box::new(bases::Binary));

        // Shift and key ciphers
        registry.register(Box::new(ciphers::Caesar::new(3)));
        registry.register(Box::new(ciphers::Rot13));
        registry.register(Box::new(ciphers::Rot5));
        registry.register(Box::new(ciphers::Rot18));
        registry.register(Box::new(ciphers::Rot47));
        registry.register(Box::new(ciphers::Atbash));
        registry.register(Box::new(ciphers::Vigenere::new("KEY")));
        registry.register(Box::new(ciphers::Affine::new(5, 8)));
        registry.register(Box::new(ciphers::Xor::new("KEY")));
        registry.register(Box::new(ciphers::RailFence::new("rail-fence", "Rail Fence (3 Rails)", 3)));
        registry.register(Box::new(ciphers::RailFence::new("rail-fence-5", "Rail Fence (5 Rails)", 5)));
        registry.register(Box::new(ciphers::A1z26));

        // Script and alphabet maps
        registry.register(Box::new(scripts::Morse));
        registry.register(Box::new(scripts::Nato));
        registry.register(Box::new(scripts::Leetspeak));
        registry.register(Box::new(scripts::SmallCaps));
        registry.register(Box::new(scripts::Bubble));
        registry.register(Box::new(scripts::Fullwidth));
        registry.register(Box::new(scripts::UpsideDown));
        registry.register(Box::new(scripts::Braille));
        registry.register(Box::new(scripts::Invisible));

        // Word and case transforms
        registry.register(Box::new(words::ReverseText));
        registry.register(Box::new(words::ReverseWords));
        registry.register(Box::new(words::SwapCase));
        registry.register(Box::new(words::AlternatingCase));
        registry.register(Box::new(words::Vaporwave));
        registry.register(Box::new(words::Disemvowel));

        registry
    }

    fn register(&mut self, transform: Box<dyn Transform>) {
        let id = transform.id();
        debug_assert!(
            !self.index.contains_key(id),
            "duplicate transform id '{}'",
            id
        );
        self.index.insert(id, self.transforms.len());
        self.transforms.push(transform);
    }

    /// Looks up a transform by id.
    pub fn get(&self, id: &str) -> Option<&dyn Transform> {
        self.index.get(id).map(|&i| self.transforms[i].as_ref())
    }

    /// Iterates all registered transforms in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Transform> {
        self.transforms.iter().map(|t| t.as_ref())
    }

    /// Returns the subset safe for per-word composition.
    pub fn randomizable(&self) -> Vec<&dyn Transform> {
        self.iter().filter(|t| t.is_randomizable()).collect()
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// True when no transforms are registered.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Encodes `text` with the transform registered under `id`.
    pub fn encode_with(&self, id: &str, text: &str) -> Result<String, TransformError> {
        let transform = self
            .get(id)
            .ok_or_else(|| TransformError::UnknownTransform(id.to_string()))?;
        Ok(transform.encode(text))
    }

    /// Decodes `text` with the transform registered under `id`.
    ///
    /// Fails with `NotReversible` when the transform does not declare a
    /// decode capability. The capability flag is checked up front - a
    /// missing decode is never synthesized.
    pub fn decode_with(&self, id: &str, text: &str) -> Result<String, TransformError> {
        let transform = self
            .get(id)
            .ok_or_else(|| TransformError::UnknownTransform(id.to_string()))?;
        if !transform.is_reversible() {
            return Err(TransformError::NotReversible(id.to_string()));
        }
        Ok(transform.decode(text))
    }

    /// Universal decoder: tries every reversible transform against the
    /// input and returns the candidates that changed it.
    ///
    /// Relies on the fails-safe decode contract - no candidate can
    /// panic, so no per-transform error handling is needed here.
    pub fn try_all_decodes(&self, text: &str) -> Vec<DecodeCandidate> {
        self.iter()
            .filter(|t| t.is_reversible())
            .filter_map(|t| {
                let decoded = t.decode(text);
                if decoded == text {
                    None
                } else {
                    Some(DecodeCandidate {
                        transform_id: t.id(),
                        display_name: t.display_name(),
                        decoded,
                    })
                }
            })
            .collect()
    }
}
