use crate::error::{MarkovError, Result};

use super::chain::Context;

/// Strategy used to select the starting context of a walk.
///
/// # Variants
/// - `Random`: pick one context uniformly among all contexts of the table.
/// - `Custom(Context)`: start from the given context; it must exist in the table.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StartSeed {
	#[default]
	Random,
	Custom(Context),
}

impl StartSeed {
	/// Parses a custom seed written as two space-separated words, e.g. `"hi there"`.
	///
	/// # Errors
	/// Returns an error unless the text holds exactly two words.
	pub fn parse_custom(text: &str) -> Result<Self> {
		let words: Vec<&str> = text.split(' ').collect();
		match words.as_slice() {
			[first, second] if !first.is_empty() && !second.is_empty() => {
				Ok(StartSeed::Custom(Context::new(*first, *second)))
			}
			_ => Err(MarkovError::InvalidInput(format!(
				"custom seed must be two words separated by a space, got {text:?}"
			))),
		}
	}
}

/// Options for a single generation.
///
/// # Invariants
/// - `max_words`, when set, is at least 2 (the seed alone emits two words)
#[derive(Clone, Debug, Default)]
pub struct GenerationInput {
	/// Starting context strategy.
	pub start_seed: StartSeed,

	/// Upper bound on the number of emitted words. `None` walks until the end
	/// marker is reached, however long that takes.
	max_words: Option<usize>,
}

impl GenerationInput {
	/// Creates options with a random seed and no word cap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the word cap, if any.
	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the word cap.
	///
	/// # Errors
	/// Returns an error if the cap is below 2.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<()> {
		if let Some(n) = max_words {
			if n < 2 {
				return Err(MarkovError::InvalidInput(format!(
					"max_words must be >= 2, got {n}"
				)));
			}
		}
		self.max_words = max_words;
		Ok(())
	}
}
