/// Splits raw text into word tokens.
///
/// - Trailing whitespace is stripped
/// - Every `\n` becomes a single space
/// - The result is split on the literal space character
///
/// Runs of spaces are not collapsed: `"a  b"` gives `["a", "", "b"]`.
/// Empty input gives a single empty token, which is too short to build any
/// context.
pub fn tokenize(text: &str) -> Vec<String> {
	text.trim_end()
		.replace('\n', " ")
		.split(' ')
		.map(str::to_owned)
		.collect()
}
