use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Two consecutive tokens used as a lookup key in the transition table.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	/// Creates a context from two tokens, in order.
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	/// First (older) token of the pair.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// Second (most recent) token of the pair.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the context reached after emitting `next`:
	/// `(a, b)` followed by `c` gives `(b, c)`.
	pub fn advance(&self, next: &str) -> Self {
		Self::new(self.second.as_str(), next)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:?}, {:?})", self.first, self.second)
	}
}

/// What may follow a context.
///
/// `End` is a tagged marker, so it can never be confused with a real token,
/// not even the empty token produced by consecutive spaces.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Successor {
	/// A real token observed after the context.
	Word(String),
	/// End of text: nothing followed the context.
	End,
}

impl Successor {
	/// Returns `true` for the end-of-text marker.
	pub fn is_end(&self) -> bool {
		matches!(self, Successor::End)
	}
}

/// Second-order transition table.
///
/// Maps every observed context to the successors seen after it, in the order
/// they were encountered. Duplicates are kept: a successor seen three times
/// appears three times, so uniform sampling over the list reproduces the
/// observed frequencies.
///
/// # Invariants
/// - Every successor list is non-empty
/// - The context built from the last two tokens contains `Successor::End`
/// - Contexts keep their first-seen order
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
	entries: Vec<(Context, Vec<Successor>)>,
	#[serde(skip)]
	index: HashMap<Context, usize>,
}

impl TransitionTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records that `successor` followed `context`.
	///
	/// Creates the successor list if the context is new.
	pub fn push(&mut self, context: Context, successor: Successor) {
		match self.index.get(&context).copied() {
			Some(i) => self.entries[i].1.push(successor),
			None => {
				self.index.insert(context.clone(), self.entries.len());
				self.entries.push((context, vec![successor]));
			}
		}
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no context was recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns `true` if `context` was observed during training.
	pub fn contains(&self, context: &Context) -> bool {
		self.index.contains_key(context)
	}

	/// Returns the successors observed after `context`, or `None` if the
	/// context never occurred.
	pub fn successors(&self, context: &Context) -> Option<&[Successor]> {
		self.index.get(context).map(|&i| self.entries[i].1.as_slice())
	}

	/// Iterates over the contexts in first-seen order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.entries.iter().map(|(context, _)| context)
	}

	/// Returns the context at position `i` in first-seen order.
	pub fn context_at(&self, i: usize) -> Option<&Context> {
		self.entries.get(i).map(|(context, _)| context)
	}

	/// Total number of recorded successors across all contexts.
	///
	/// For a table built from `n >= 2` tokens this is `n - 1`.
	pub fn total_successors(&self) -> usize {
		self.entries.iter().map(|(_, successors)| successors.len()).sum()
	}
}

/// Builds the transition table from a token sequence.
///
/// For each pair of consecutive tokens `(t[i], t[i+1])` the token `t[i+2]`
/// is recorded as a successor. The last pair gets `Successor::End` instead.
///
/// # Notes
/// - Fewer than two tokens gives an empty table.
/// - If the last pair also occurred earlier, `End` is appended next to the
///   successors recorded before, so that context may either continue or stop.
pub fn build_chains(tokens: &[String]) -> TransitionTable {
	let mut table = TransitionTable::new();
	if tokens.len() < 2 {
		return table;
	}

	let last = tokens.len() - 2;
	for (i, pair) in tokens.windows(2).enumerate() {
		let context = Context::new(pair[0].as_str(), pair[1].as_str());
		let successor = if i == last {
			Successor::End
		} else {
			Successor::Word(tokens[i + 2].clone())
		};
		table.push(context, successor);
	}

	log::debug!(
		"built {} contexts from {} tokens",
		table.len(),
		tokens.len()
	);
	table
}
