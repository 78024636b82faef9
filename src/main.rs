//! Veiltext - hide messages in plain sight
//!
//! CLI front end for the veiltext core: steganographic hide/reveal,
//! the transform registry, the suspicion analyzer and the per-word
//! scrambler. The CLI is a thin wrapper - all contracts live in the
//! library.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use veiltext::transform::ciphers;
use veiltext::transform::TransformRegistry;
use veiltext::{analyze, randomize, stego};

/// Veiltext - hide messages in plain sight
///
/// Unicode steganography, a registry of reversible text transforms,
/// and a randomizer that scrambles every word differently.
#[derive(Parser)]
#[command(name = "veiltext")]
#[command(version)]
#[command(about = "Hide messages in plain sight - Unicode steganography and text transforms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message inside carrier text using invisible codepoints
    ///
    /// The output renders exactly like the carrier; the message rides
    /// along as non-rendering variation selectors appended to it.
    Hide {
        /// Message to hide (reads from stdin if not provided)
        #[arg(short, long)]
        message: Option<String>,

        /// Visible carrier text
        #[arg(short, long)]
        carrier: String,

        /// Verbose output (shows payload size)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Reveal a message hidden in carrier text
    ///
    /// Text without any hidden payload reveals an empty message - that
    /// is not an error.
    Reveal {
        /// Text to scan (reads from stdin if not provided)
        text: Option<String>,
    },

    /// Apply a registered transform to text
    Transform {
        /// Transform id (see `veiltext list`)
        id: Option<String>,

        /// Text to transform (reads from stdin if not provided)
        #[arg(short, long)]
        text: Option<String>,

        /// Decode instead of encode (the transform must be reversible)
        #[arg(short, long)]
        decode: bool,

        /// Try every reversible transform against the input and print
        /// all candidate decodings
        #[arg(long, conflicts_with_all = ["id", "decode"])]
        try_all: bool,

        /// Override the shift for the caesar transform
        #[arg(long)]
        shift: Option<u32>,

        /// Override the key for the vigenere and xor transforms
        #[arg(long)]
        key: Option<String>,

        /// Override the rail count for the rail-fence transform
        #[arg(long)]
        rails: Option<usize>,
    },

    /// Score a text for likely hidden payloads
    ///
    /// Counts zero-width characters, variation selectors and tag-block
    /// codepoints. Heuristic: emoji text will trip it legitimately.
    Analyze {
        /// Text to analyze (reads from stdin if not provided)
        text: Option<String>,

        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scramble a sentence with a different transform per word
    ///
    /// NOTE: scrambling is only best-effort reversible, and only with
    /// the map printed by --show-map from the same invocation. The
    /// output text alone cannot be decoded.
    Scramble {
        /// Text to scramble (reads from stdin if not provided)
        text: Option<String>,

        /// Minimum number of transforms to mix
        #[arg(long, default_value = "2")]
        min: usize,

        /// Maximum number of transforms to mix
        #[arg(long, default_value = "5")]
        max: usize,

        /// Allow the same transform to be picked more than once
        #[arg(long)]
        allow_repeats: bool,

        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,

        /// Print the word-to-transform map as JSON on stderr
        #[arg(long)]
        show_map: bool,
    },

    /// List registered transforms
    List {
        /// Only show transforms usable by the scrambler
        #[arg(long)]
        randomizable: bool,

        /// Sample text for the preview column
        #[arg(long, default_value = "Hello")]
        sample: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = TransformRegistry::standard();

    match cli.command {
        Commands::Hide {
            message,
            carrier,
            verbose,
        } => {
            let message = read_text(message, "message")?;
            let encoded = stego::hide(&message, &carrier)?;
            println!("{}", encoded);
            if verbose {
                eprintln!(
                    "Appended {} invisible markers ({} payload bytes)",
                    stego::marker_count(&message),
                    message.len()
                );
            }
        }

        Commands::Reveal { text } => {
            let text = read_text(text, "text")?;
            let message = stego::reveal(&text)?;
            println!("{}", message);
        }

        Commands::Transform {
            id,
            text,
            decode,
            try_all,
            shift,
            key,
            rails,
        } => {
            let text = read_text(text, "text")?;

            if try_all {
                let candidates = registry.try_all_decodes(&text);
                if candidates.is_empty() {
                    eprintln!("No transform produced a different decoding");
                }
                for candidate in candidates {
                    println!("{:<16} {}", candidate.transform_id, candidate.decoded);
                }
                return Ok(());
            }

            let Some(id) = id else {
                bail!("Transform id is required (or use --try-all)");
            };

            let output = apply_transform(&registry, &id, &text, decode, shift, key.as_deref(), rails)?;
            println!("{}", output);
        }

        Commands::Analyze { text, json } => {
            let text = read_text(text, "text")?;
            let result = analyze::analyze(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "suspicious: {} (confidence {:.1})",
                    result.suspicious, result.confidence
                );
                println!("  zero-width:          {}", result.zero_width);
                println!("  variation selectors: {}", result.variation_selectors);
                println!("  tag block:           {}", result.tag_block);
                println!("  visible length:      {}", result.visible_len);
            }
        }

        Commands::Scramble {
            text,
            min,
            max,
            allow_repeats,
            seed,
            show_map,
        } => {
            let text = read_text(text, "text")?;
            let options = randomize::RandomizeOptions {
                min_transforms: min,
                max_transforms: max,
                allow_repeats,
            };

            let scrambled = match seed {
                Some(seed) => randomize::randomize_seeded(&registry, &text, &options, seed),
                None => randomize::randomize(&registry, &text, &options),
            };

            println!("{}", scrambled.result);
            if show_map {
                eprintln!("{}", serde_json::to_string_pretty(&scrambled.record)?);
            }
        }

        Commands::List {
            randomizable,
            sample,
        } => {
            for transform in registry.iter() {
                if randomizable && !transform.is_randomizable() {
                    continue;
                }
                let mut flags = Vec::new();
                if transform.is_reversible() {
                    flags.push("reversible");
                }
                if transform.is_randomizable() {
                    flags.push("randomizable");
                }
                println!(
                    "{:<18} {:<24} [{}] {}",
                    transform.id(),
                    transform.display_name(),
                    flags.join(", "),
                    transform.preview(&sample)
                );
            }
        }
    }

    Ok(())
}

/// Returns the provided text, or reads it from stdin.
fn read_text(arg: Option<String>, what: &str) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            eprintln!("Reading {} from stdin (Ctrl+D to finish):", what);
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| format!("Failed to read {} from stdin", what))?;
            Ok(buffer.trim_end_matches('\n').to_string())
        }
    }
}

/// Applies a transform, honoring explicit parameter overrides for the
/// parameterized ciphers. Overrides call the parameter-taking free
/// functions directly; everything else goes through the registry.
fn apply_transform(
    registry: &TransformRegistry,
    id: &str,
    text: &str,
    decode: bool,
    shift: Option<u32>,
    key: Option<&str>,
    rails: Option<usize>,
) -> Result<String> {
    if let Some(shift) = shift {
        if id != "caesar" {
            bail!("--shift only applies to the caesar transform");
        }
        return Ok(if decode {
            ciphers::shift_letters(text, 26 - shift % 26)
        } else {
            ciphers::shift_letters(text, shift)
        });
    }

    if let Some(key) = key {
        return match id {
            "vigenere" if decode => Ok(ciphers::vigenere_decrypt(text, key)),
            "vigenere" => Ok(ciphers::vigenere_encrypt(text, key)),
            "xor" if decode => Ok(ciphers::xor_decrypt(text, key)),
            "xor" => Ok(ciphers::xor_encrypt(text, key)),
            _ => bail!("--key only applies to the vigenere and xor transforms"),
        };
    }

    if let Some(rails) = rails {
        if !id.starts_with("rail-fence") {
            bail!("--rails only applies to the rail-fence transforms");
        }
        return Ok(if decode {
            ciphers::rail_fence_decode(text, rails)
        } else {
            ciphers::rail_fence_encode(text, rails)
        });
    }

    let output = if decode {
        registry.decode_with(id, text)?
    } else {
        registry.encode_with(id, text)?
    };
    Ok(output)
}
