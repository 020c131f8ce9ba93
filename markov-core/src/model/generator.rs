use rand::Rng;
use rand::rngs::ThreadRng;

use crate::error::{MarkovError, Result};
use crate::model::chain::{Context, Successor, TransitionTable};
use crate::model::generation_input::{GenerationInput, StartSeed};

/// Source of the uniform choices made during a walk.
///
/// The generator never touches a global RNG directly; it asks this
/// capability instead, so tests can replay a fixed sequence of picks.
pub trait RandomSource {
	/// Returns an index in `0..len`. `len` is always > 0.
	fn pick(&mut self, len: usize) -> usize;
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
	fn pick(&mut self, len: usize) -> usize {
		self.0.random_range(0..len)
	}
}

impl RngSource<ThreadRng> {
	/// Thread-local, unseeded generator. Each run may differ.
	pub fn thread() -> Self {
		Self(rand::rng())
	}
}

impl Default for RngSource<ThreadRng> {
	fn default() -> Self {
		Self::thread()
	}
}

/// Random walk over a [`TransitionTable`].
///
/// Borrows the table, so one trained table can serve any number of walks.
#[derive(Debug)]
pub struct Generator<'a> {
	table: &'a TransitionTable,
}

impl<'a> Generator<'a> {
	/// Creates a generator over `table`.
	///
	/// # Errors
	/// Returns [`MarkovError::EmptyModel`] if the table has no context.
	pub fn new(table: &'a TransitionTable) -> Result<Self> {
		if table.is_empty() {
			return Err(MarkovError::EmptyModel);
		}
		Ok(Self { table })
	}

	/// Selects the starting context.
	fn seed<R: RandomSource + ?Sized>(&self, start_seed: &StartSeed, rng: &mut R) -> Result<Context> {
		match start_seed {
			StartSeed::Random => {
				let i = rng.pick(self.table.len());
				self.table.context_at(i).cloned().ok_or(MarkovError::EmptyModel)
			}
			StartSeed::Custom(context) => {
				if !self.table.contains(context) {
					return Err(unknown(context));
				}
				Ok(context.clone())
			}
		}
	}

	/// Generates one text.
	///
	/// # Behavior
	/// - Emits the two words of the seed context.
	/// - Stops as soon as the current context's successors are exactly `[End]`.
	/// - Otherwise draws one successor uniformly (duplicates weight the draw),
	///   emits it and shifts the context by one word.
	/// - In a context that mixes words and `End`, drawing `End` stops the walk;
	///   nothing is emitted for it.
	/// - With `max_words` set, stops once that many words were emitted.
	///
	/// # Errors
	/// - [`MarkovError::UnknownContext`] if a custom seed is not in the table,
	///   or if the walk reaches a context the table never saw.
	pub fn generate<R: RandomSource + ?Sized>(&self, input: &GenerationInput, rng: &mut R) -> Result<String> {
		let mut context = self.seed(&input.start_seed, rng)?;
		log::debug!("seed context {context}");

		let mut words: Vec<String> = vec![context.first().to_owned(), context.second().to_owned()];

		loop {
			let successors = self.table.successors(&context).ok_or_else(|| unknown(&context))?;
			if let [Successor::End] = successors {
				break;
			}

			if let Some(max) = input.max_words() {
				if words.len() >= max {
					log::warn!("walk stopped after {max} words before reaching the end marker");
					break;
				}
			}

			match &successors[rng.pick(successors.len())] {
				Successor::Word(word) => {
					context = context.advance(word);
					words.push(word.clone());
				}
				Successor::End => break,
			}
		}

		log::debug!("generated {} words", words.len());
		Ok(words.join(" "))
	}
}

fn unknown(context: &Context) -> MarkovError {
	MarkovError::UnknownContext {
		first: context.first().to_owned(),
		second: context.second().to_owned(),
	}
}

/// Generates one text from `table` with default options and the thread RNG.
///
/// # Errors
/// Returns [`MarkovError::EmptyModel`] if the table has no context.
pub fn generate(table: &TransitionTable) -> Result<String> {
	Generator::new(table)?.generate(&GenerationInput::default(), &mut RngSource::thread())
}
