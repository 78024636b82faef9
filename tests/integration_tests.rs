//! Integration tests for Veiltext
//!
//! Note: transform decode NEVER panics - malformed input is absorbed
//! by the transform (skip the bad unit or return the input untouched).
//!
//! Features exercised end to end:
//! - Bit-embedding channel (hide/reveal, visibility invariant)
//! - Transform registry round-trips and caller-error contracts
//! - Universal decoder over arbitrary input
//! - Word segmentation losslessness
//! - Per-word scrambling with seeded reproducibility and best-effort
//!   reversal

use veiltext::randomize::{
    randomize_seeded, reverse, segment, RandomizeOptions, Randomized, ReverseError,
    TransformApplication,
};
use veiltext::transform::{TransformError, TransformRegistry};
use veiltext::{analyze, stego};

/// Hidden messages survive the full hide/reveal cycle
#[test]
fn test_stego_roundtrip() {
    let encoded = stego::hide("SECRET", "cover story").unwrap();
    assert_eq!(stego::reveal(&encoded).unwrap(), "SECRET");
}

/// The carrier renders unchanged: stripping markers recovers it exactly
#[test]
fn test_stego_visibility_invariant() {
    for (message, carrier) in [
        ("hi", "normal text"),
        ("héllo 世界", "Ünïcödé carrier — with dashes"),
        ("x", "🎉 emoji carrier 🎉"),
    ] {
        let encoded = stego::hide(message, carrier).unwrap();
        assert_eq!(stego::strip_markers(&encoded), carrier);
    }
}

/// A stego'd text scores as suspicious; the same text stripped does not
#[test]
fn test_analyzer_flags_stego_output() {
    let carrier = "an innocuous sentence";
    let encoded = stego::hide("payload", carrier).unwrap();

    let flagged = analyze::analyze(&encoded);
    assert!(flagged.suspicious);
    assert_eq!(flagged.variation_selectors, "payload".len() * 8);

    let clean = analyze::analyze(carrier);
    assert!(!clean.suspicious);
}

/// Round-trips hold for the reversible registry codecs over Unicode
#[test]
fn test_registry_roundtrips() {
    let registry = TransformRegistry::standard();
    for (id, input) in [
        ("base64", "hello, 世界"),
        ("base58", "hello, 世界"),
        ("hex", "hello, 世界"),
        ("binary", "hello, 世界"),
        ("rot13", "Attack at Dawn"),
        ("caesar", "Attack at Dawn"),
        ("atbash", "Attack at Dawn"),
        ("rail-fence", "WEAREDISCOVERED"),
        ("fullwidth", "Hello, World! 123"),
        ("upside-down", "hello world"),
    ] {
        let encoded = registry.encode_with(id, input).unwrap();
        assert_eq!(registry.decode_with(id, &encoded).unwrap(), input, "{}", id);
    }
}

/// Unknown ids and irreversible decodes surface as typed caller errors
#[test]
fn test_registry_caller_errors() {
    let registry = TransformRegistry::standard();

    assert!(matches!(
        registry.encode_with("quantum", "text"),
        Err(TransformError::UnknownTransform(_))
    ));
    assert!(matches!(
        registry.decode_with("disemvowel", "txt"),
        Err(TransformError::NotReversible(_))
    ));
}

/// Decode is fails-safe for every registered transform on garbage input
#[test]
fn test_decode_safety_across_registry() {
    let registry = TransformRegistry::standard();
    for garbage in ["not-valid-hex!!", "???", "=====", "\u{FE0F}\u{200B}abc"] {
        for transform in registry.iter().filter(|t| t.is_reversible()) {
            // Must not panic; any output is acceptable
            let _ = transform.decode(garbage);
        }
    }
}

/// The universal decoder surfaces the right candidate for encoded input
#[test]
fn test_universal_decoder() {
    let registry = TransformRegistry::standard();
    let encoded = registry.encode_with("base64", "meet at noon").unwrap();

    let candidates = registry.try_all_decodes(&encoded);
    assert!(candidates
        .iter()
        .any(|c| c.transform_id == "base64" && c.decoded == "meet at noon"));
}

/// Segmentation is lossless for anything we throw at it
#[test]
fn test_segmentation_lossless() {
    for text in [
        "Hello, world!",
        "multi  spaces\tand\ttabs",
        "emoji 🎉 inside, and trailing...",
        "日本語とEnglishの mix 123",
    ] {
        let rebuilt: String = segment(text).iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, text);
    }
}

/// Seeded scrambles are reproducible and keep punctuation in place
#[test]
fn test_scramble_deterministic_with_seed() {
    let registry = TransformRegistry::standard();
    let options = RandomizeOptions::default();
    let text = "meet me at the usual place, tonight!";

    let a = randomize_seeded(&registry, text, &options, 1234);
    let b = randomize_seeded(&registry, text, &options, 1234);
    assert_eq!(a.result, b.result);
    assert!(a.result.ends_with('!'));
    assert_eq!(a.record.len(), 7);
}

/// With min == max == 2 and no repeats, exactly two distinct transforms mix
#[test]
fn test_scramble_selection_bound() {
    let registry = TransformRegistry::standard();
    let options = RandomizeOptions {
        min_transforms: 2,
        max_transforms: 2,
        allow_repeats: false,
    };

    for seed in 0..10 {
        let out = randomize_seeded(&registry, "words to mix around here", &options, seed);
        assert_eq!(out.selected.len(), 2);
        assert_ne!(out.selected[0], out.selected[1]);
    }
}

/// A record built from reversible transforms decodes back to the original
#[test]
fn test_reverse_with_matching_record() {
    let registry = TransformRegistry::standard();

    // Construct the randomized value by hand so every recorded
    // transform is reversible
    let attack = registry.encode_with("rot13", "attack").unwrap();
    let dawn = registry.encode_with("base64", "dawn").unwrap();
    let randomized = Randomized {
        result: format!("{} at {}", attack, dawn),
        selected: vec!["rot13".to_string(), "base64".to_string()],
        record: vec![
            TransformApplication {
                output: attack.clone(),
                transform_id: "rot13".to_string(),
            },
            TransformApplication {
                output: dawn.clone(),
                transform_id: "base64".to_string(),
            },
        ],
    };

    assert_eq!(reverse(&registry, &randomized).unwrap(), "attack at dawn");
}

/// Reversal after the output was edited reports CannotDecode, never
/// wrong text
#[test]
fn test_reverse_after_state_loss() {
    let registry = TransformRegistry::standard();
    let encoded = registry.encode_with("rot13", "attack").unwrap();
    let randomized = Randomized {
        result: "the output, edited beyond recognition".to_string(),
        selected: vec!["rot13".to_string()],
        record: vec![TransformApplication {
            output: encoded,
            transform_id: "rot13".to_string(),
        }],
    };

    assert_eq!(
        reverse(&registry, &randomized),
        Err(ReverseError::CannotDecode)
    );
}

/// Scrambled text decodes word by word through the universal decoder
#[test]
fn test_scrambled_word_recoverable_by_universal_decoder() {
    let registry = TransformRegistry::standard();
    let word = "rendezvous";
    let encoded = registry.encode_with("base64", word).unwrap();

    // A reader without the record can still brute-force single words
    let candidates = registry.try_all_decodes(&encoded);
    assert!(candidates.iter().any(|c| c.decoded == word));
}
