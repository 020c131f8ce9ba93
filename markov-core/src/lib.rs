//! Bigram Markov text generation library.
//!
//! This crate learns a second-order word model from a body of text and
//! produces new text by walking it at random:
//! - Whitespace tokenization
//! - Transition table construction (two-word context → next word)
//! - Random walk generation until the end-of-text marker
//!
//! ```no_run
//! use markov_core::model::generation_input::GenerationInput;
//!
//! # fn main() -> markov_core::Result<()> {
//! let text = markov_core::run("green-eggs.txt", &GenerationInput::default())?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

use std::path::Path;

/// Error type and result alias.
pub mod error;

/// File loading.
pub mod io;

/// Tokenizer, transition table and generator.
pub mod model;

pub use error::{MarkovError, Result};
pub use io::{normalize_newlines, read_all};
pub use model::chain::{build_chains, Context, Successor, TransitionTable};
pub use model::generation_input::{GenerationInput, StartSeed};
pub use model::generator::{generate, Generator, RandomSource, RngSource};
pub use model::tokenizer::tokenize;

/// Trains a table from `text`.
///
/// Shorthand for `build_chains(&tokenize(text))`.
pub fn train(text: &str) -> TransitionTable {
	build_chains(&tokenize(text))
}

/// Runs the whole pipeline on a file: read, tokenize, build chains, generate.
///
/// # Errors
/// - [`MarkovError::MissingInput`] if the file cannot be read
/// - [`MarkovError::EmptyModel`] if the file holds fewer than two words
/// - Any error from [`Generator::generate`]
pub fn run<P: AsRef<Path>>(path: P, input: &GenerationInput) -> Result<String> {
	let text = read_all(path)?;
	let table = train(&text);
	Generator::new(&table)?.generate(input, &mut RngSource::thread())
}
