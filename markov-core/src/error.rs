//! Error type shared by the whole crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = MarkovError> = std::result::Result<T, E>;

/// Failures that can be reported while loading a corpus or generating text.
///
/// Tokenizing and building chains never fail; everything here comes either
/// from the file reader or from the generator's checks.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The transition table has no context to start from.
	///
	/// Happens when the source text had fewer than two tokens.
	#[error("cannot generate from an empty model (source text needs at least two words)")]
	EmptyModel,

	/// The input file does not exist or could not be read.
	#[error("cannot read input {}: {source}", .path.display())]
	MissingInput {
		/// Path that was requested.
		path: PathBuf,
		/// Underlying IO error.
		source: std::io::Error,
	},

	/// A context was requested that the table never observed.
	#[error("context ({first:?}, {second:?}) is not in the model")]
	UnknownContext {
		/// First token of the context.
		first: String,
		/// Second token of the context.
		second: String,
	},

	/// Generation options were rejected.
	#[error("invalid generation input: {0}")]
	InvalidInput(String),
}

impl MarkovError {
	/// Helper constructor attaching the requested path to an IO error.
	pub fn missing_input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::MissingInput { path: path.into(), source }
	}
}
