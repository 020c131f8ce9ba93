//! Bigram Markov chain: tokenizer, transition table and random walk.
//!
//! - Word tokenization (`tokenize`)
//! - Second-order transition table (`TransitionTable`, `build_chains`)
//! - Generation options (`GenerationInput`)
//! - Random walk generation (`Generator`)

/// Splits raw text into word tokens.
pub mod tokenizer;

/// Transition table keyed by two-word contexts.
///
/// Keeps successor duplicates so sampling follows observed frequencies.
pub mod chain;

/// Options for a single generation (start seed, word cap).
pub mod generation_input;

/// Random walk over a transition table, with an injectable random source.
pub mod generator;
