use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Reads a whole text file into a single `String`.
///
/// - Reads the entire file into memory
/// - Turns `\r\n` and lone `\r` line endings into `\n`
///
/// # Errors
/// Returns [`MarkovError::MissingInput`] if the file does not exist, cannot be
/// opened, or is not valid UTF-8.
pub fn read_all<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| MarkovError::missing_input(path, e))?;
	log::debug!("read {} bytes from {}", contents.len(), path.display());
	Ok(normalize_newlines(&contents))
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
///
/// Example: `"a\r\nb\rc"` → `"a\nb\nc"`
pub fn normalize_newlines(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}
