//! Word segmentation and the per-word transform randomizer.
//!
//! Segmentation splits text into maximal runs of word characters
//! (Unicode letters and digits) and non-word characters. It is
//! lossless: every input character lands in exactly one segment and
//! concatenating the segments reproduces the input byte for byte.
//!
//! The randomizer picks a bounded set of distinct transforms from the
//! registry's randomizable subset and applies one, chosen at random,
//! to each word segment. Which transform touched which word is
//! recorded only in the returned [`Randomized`] value - nothing is
//! embedded in the output text, so reversal is a best-effort
//! diagnostic that needs the record from the same call. Once the
//! record is gone (new process, serialized output), the scramble
//! cannot be undone; [`reverse`] reports that instead of guessing.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use thiserror::Error;

use crate::transform::{Transform, TransformRegistry};

/// One run of word or non-word characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSegment {
    pub text: String,
    pub is_word: bool,
}

/// Splits text into alternating word/non-word runs, losslessly.
pub fn segment(text: &str) -> Vec<WordSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_is_word = false;

    for c in text.chars() {
        let is_word = c.is_alphanumeric();
        if !current.is_empty() && is_word != current_is_word {
            segments.push(WordSegment {
                text: std::mem::take(&mut current),
                is_word: current_is_word,
            });
        }
        current.push(c);
        current_is_word = is_word;
    }
    if !current.is_empty() {
        segments.push(WordSegment {
            text: current,
            is_word: current_is_word,
        });
    }

    segments
}

/// Options for one randomization call.
#[derive(Debug, Clone)]
pub struct RandomizeOptions {
    /// Fewest transforms to select.
    pub min_transforms: usize,
    /// Most transforms to select.
    pub max_transforms: usize,
    /// Allow the same transform to be selected more than once.
    pub allow_repeats: bool,
}

impl Default for RandomizeOptions {
    fn default() -> Self {
        Self {
            min_transforms: 2,
            max_transforms: 5,
            allow_repeats: false,
        }
    }
}

/// Which transform produced which output word, in word order.
#[derive(Debug, Clone, Serialize)]
pub struct TransformApplication {
    /// The transformed word as it appears in the result.
    pub output: String,
    /// Registry id of the transform that produced it.
    pub transform_id: String,
}

/// Result of one randomization call. The record lives here and only
/// here - it is scoped to the call, never stored on the registry.
#[derive(Debug, Clone)]
pub struct Randomized {
    /// The scrambled text.
    pub result: String,
    /// Ids of the transforms selected for this call.
    pub selected: Vec<String>,
    /// Per-word application record, in order of appearance.
    pub record: Vec<TransformApplication>,
}

/// The randomizer's documented capability boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// The record does not match the text (edited output, record from
    /// a different call) or names an unknown or irreversible
    /// transform. Nothing can be recovered without guessing.
    #[error("Cannot decode: the transform record no longer matches the text")]
    CannotDecode,
}

/// Scrambles `text` with entropy from the thread RNG.
pub fn randomize(registry: &TransformRegistry, text: &str, options: &RandomizeOptions) -> Randomized {
    randomize_with_rng(registry, text, options, &mut rand::thread_rng())
}

/// Scrambles `text` reproducibly: the same seed, text and options
/// always produce the same result.
pub fn randomize_seeded(
    registry: &TransformRegistry,
    text: &str,
    options: &RandomizeOptions,
    seed: u64,
) -> Randomized {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    randomize_with_rng(registry, text, options, &mut rng)
}

fn randomize_with_rng<R: Rng>(
    registry: &TransformRegistry,
    text: &str,
    options: &RandomizeOptions,
    rng: &mut R,
) -> Randomized {
    let pool = registry.randomizable();
    if pool.is_empty() || text.is_empty() {
        return Randomized {
            result: text.to_string(),
            selected: Vec::new(),
            record: Vec::new(),
        };
    }

    let selected = select_transforms(&pool, options, rng);

    let mut result = String::with_capacity(text.len());
    let mut record = Vec::new();

    for seg in segment(text) {
        if seg.is_word {
            // selected is never empty here: min is clamped to at least 1
            let transform = selected[rng.gen_range(0..selected.len())];
            let output = transform.encode(&seg.text);
            record.push(TransformApplication {
                output: output.clone(),
                transform_id: transform.id().to_string(),
            });
            result.push_str(&output);
        } else {
            result.push_str(&seg.text);
        }
    }

    Randomized {
        result,
        selected: selected.iter().map(|t| t.id().to_string()).collect(),
        record,
    }
}

/// Selects `k` transforms from the pool, distinct unless repeats are
/// allowed. `k` is uniform in `[min, max]`, clamped to the pool size
/// when distinctness is required.
fn select_transforms<'a, R: Rng>(
    pool: &[&'a dyn Transform],
    options: &RandomizeOptions,
    rng: &mut R,
) -> Vec<&'a dyn Transform> {
    let lo = options.min_transforms.max(1);
    let hi = options.max_transforms.max(lo);
    let mut k = rng.gen_range(lo..=hi);

    if options.allow_repeats {
        (0..k)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect()
    } else {
        k = k.min(pool.len());
        pool.choose_multiple(rng, k).copied().collect()
    }
}

/// Best-effort reversal of a randomization from the same call.
///
/// Walks the record in order, locating each recorded output in the
/// result text and applying the recorded transform's decode. Any miss
/// means the text was edited or the record is stale, and the whole
/// attempt reports [`ReverseError::CannotDecode`] rather than
/// returning wrong text.
pub fn reverse(
    registry: &TransformRegistry,
    randomized: &Randomized,
) -> Result<String, ReverseError> {
    let mut out = String::with_capacity(randomized.result.len());
    let mut cursor = 0usize;

    for application in &randomized.record {
        let remaining = &randomized.result[cursor..];
        let found = remaining
            .find(&application.output)
            .ok_or(ReverseError::CannotDecode)?;

        let transform = registry
            .get(&application.transform_id)
            .ok_or(ReverseError::CannotDecode)?;
        if !transform.is_reversible() {
            return Err(ReverseError::CannotDecode);
        }

        out.push_str(&remaining[..found]);
        out.push_str(&transform.decode(&application.output));
        cursor += found + application.output.len();
    }

    out.push_str(&randomized.result[cursor..]);
    Ok(out)
}
