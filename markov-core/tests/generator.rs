//! Validates random walk generation with scripted and real random sources

use markov_core::{
	generate, train, Context, GenerationInput, Generator, MarkovError, RandomSource, RngSource,
	StartSeed, Successor, TransitionTable,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Replays a fixed list of picks, failing loudly if the walk asks for more.
struct Scripted {
	picks: Vec<usize>,
	next: usize,
}

impl Scripted {
	fn new(picks: &[usize]) -> Self {
		Self { picks: picks.to_vec(), next: 0 }
	}

	fn exhausted(&self) -> bool {
		self.next == self.picks.len()
	}
}

impl RandomSource for Scripted {
	fn pick(&mut self, len: usize) -> usize {
		let pick = self.picks[self.next];
		assert!(pick < len, "scripted pick {pick} out of range 0..{len}");
		self.next += 1;
		pick
	}
}

fn seeded_at(first: &str, second: &str) -> GenerationInput {
	let mut input = GenerationInput::new();
	input.start_seed = StartSeed::Custom(Context::new(first, second));
	input
}

#[test]
fn test_generate_empty_model_fails() {
	let table = TransitionTable::new();

	assert!(matches!(Generator::new(&table), Err(MarkovError::EmptyModel)));
	assert!(matches!(generate(&table), Err(MarkovError::EmptyModel)));
	assert!(matches!(generate(&train("lonely")), Err(MarkovError::EmptyModel)));
}

#[test]
fn test_generate_from_final_context_stops_immediately() {
	let table = train("hi there mary hi there juanita");
	let generator = Generator::new(&table).unwrap();

	// Random seed pick 3 is ("there", "juanita"), the fourth context seen
	let mut rng = Scripted::new(&[3]);
	let text = generator.generate(&GenerationInput::default(), &mut rng).unwrap();
	assert_eq!(text, "there juanita");
	assert!(rng.exhausted());

	let mut rng = Scripted::new(&[]);
	let text = generator.generate(&seeded_at("there", "juanita"), &mut rng).unwrap();
	assert_eq!(text, "there juanita");
}

#[test]
fn test_generate_follows_scripted_walk() {
	let table = train("hi there mary hi there juanita");
	let generator = Generator::new(&table).unwrap();

	// seed ("hi", "there"), then mary, hi, there, then juanita
	let mut rng = Scripted::new(&[0, 0, 0, 0, 1]);
	let text = generator.generate(&GenerationInput::default(), &mut rng).unwrap();
	assert_eq!(text, "hi there mary hi there juanita");
	assert!(rng.exhausted());

	let mut rng = Scripted::new(&[0, 1]);
	let text = generator.generate(&GenerationInput::default(), &mut rng).unwrap();
	assert_eq!(text, "hi there juanita");
}

#[test]
fn test_generate_mixed_context_stops_on_drawn_end() {
	let table = train("a b a b a b");
	let generator = Generator::new(&table).unwrap();

	// ("a", "b") holds [a, a, End]: drawing index 2 ends the walk cleanly
	let mut rng = Scripted::new(&[2]);
	let text = generator.generate(&seeded_at("a", "b"), &mut rng).unwrap();
	assert_eq!(text, "a b");

	let mut rng = Scripted::new(&[1, 0, 2]);
	let text = generator.generate(&seeded_at("a", "b"), &mut rng).unwrap();
	assert_eq!(text, "a b a b");
	assert!(!text.ends_with(' '));
}

#[test]
fn test_generate_custom_seed_must_exist() {
	let table = train("hi there mary hi there juanita");
	let generator = Generator::new(&table).unwrap();

	let err = generator
		.generate(&seeded_at("there", "hi"), &mut Scripted::new(&[]))
		.unwrap_err();
	match err {
		MarkovError::UnknownContext { first, second } => {
			assert_eq!(first, "there");
			assert_eq!(second, "hi");
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn test_generate_stops_at_word_cap() {
	// ("la", "la") holds [la, la, la, la, End]: picking 0 keeps looping until the cap
	let table = train("la la la la la la");
	let generator = Generator::new(&table).unwrap();

	let mut input = seeded_at("la", "la");
	input.set_max_words(Some(7)).unwrap();
	let mut rng = Scripted::new(&[0, 0, 0, 0, 0]);

	let text = generator.generate(&input, &mut rng).unwrap();
	assert_eq!(text, "la la la la la la la");
	assert!(rng.exhausted());
}

#[test]
fn test_word_cap_at_final_context_ends_normally() {
	let table = train("hi there mary hi there juanita");
	let generator = Generator::new(&table).unwrap();

	let mut input = seeded_at("there", "juanita");
	input.set_max_words(Some(2)).unwrap();

	let text = generator.generate(&input, &mut Scripted::new(&[])).unwrap();
	assert_eq!(text, "there juanita");

	// The end check comes first, so a capped walk from ("hi", "there") still
	// draws exactly one successor before stopping at three words
	let mut input = seeded_at("hi", "there");
	input.set_max_words(Some(3)).unwrap();
	let mut rng = Scripted::new(&[0]);
	let text = generator.generate(&input, &mut rng).unwrap();
	assert_eq!(text, "hi there mary");
	assert!(rng.exhausted());
}

#[test]
fn test_generate_reports_context_missing_mid_walk() {
	// Hand-built table: ("a", "b") leads to "c", but ("b", "c") was never recorded
	let mut table = TransitionTable::new();
	table.push(Context::new("a", "b"), Successor::Word("c".to_owned()));
	let generator = Generator::new(&table).unwrap();

	let err = generator
		.generate(&GenerationInput::default(), &mut Scripted::new(&[0, 0]))
		.unwrap_err();
	match err {
		MarkovError::UnknownContext { first, second } => {
			assert_eq!(first, "b");
			assert_eq!(second, "c");
		}
		other => panic!("unexpected error {other:?}"),
	}
}

#[test]
fn test_word_cap_validation() {
	let mut input = GenerationInput::new();

	assert!(input.set_max_words(Some(1)).is_err());
	assert!(input.set_max_words(Some(0)).is_err());
	assert_eq!(input.max_words(), None);

	input.set_max_words(Some(2)).unwrap();
	assert_eq!(input.max_words(), Some(2));
	input.set_max_words(None).unwrap();
	assert_eq!(input.max_words(), None);
}

#[test]
fn test_parse_custom_seed() {
	assert_eq!(
		StartSeed::parse_custom("hi there").unwrap(),
		StartSeed::Custom(Context::new("hi", "there"))
	);
	assert!(StartSeed::parse_custom("hi").is_err());
	assert!(StartSeed::parse_custom("hi there mary").is_err());
	assert!(StartSeed::parse_custom("hi  there").is_err());
	assert!(StartSeed::parse_custom("").is_err());
}

#[test]
fn test_generate_terminates_with_real_rng() {
	let table = train("hi there mary hi there juanita");
	let generator = Generator::new(&table).unwrap();
	let mut rng = RngSource(StdRng::seed_from_u64(7));

	for _ in 0..200 {
		let text = generator.generate(&GenerationInput::default(), &mut rng).unwrap();
		assert!(text.ends_with("there juanita"), "unexpected text {text:?}");
	}
}

#[test]
fn test_generate_outputs_only_known_words() {
	let corpus = "I do not like them\nSam I am\nI do not like\ngreen eggs and ham\n";
	let table = train(corpus);
	let generator = Generator::new(&table).unwrap();
	let mut rng = RngSource::thread();

	for _ in 0..100 {
		let text = generator.generate(&GenerationInput::default(), &mut rng).unwrap();
		let words: Vec<&str> = text.split(' ').collect();
		assert!(words.len() >= 2);
		for pair in words.windows(2) {
			assert!(
				table.contains(&Context::new(pair[0], pair[1])),
				"pair {pair:?} never occurs in the corpus"
			);
		}
	}
}

#[test]
fn test_successor_draws_follow_frequency() {
	// ("x", "y") is followed by "a" three times and "b" once
	let table = train("x y a x y a x y a x y b z");
	let generator = Generator::new(&table).unwrap();
	let mut rng = RngSource(StdRng::seed_from_u64(42));

	let mut input = seeded_at("x", "y");
	input.set_max_words(Some(3)).unwrap();

	let mut a = 0;
	for _ in 0..4000 {
		match generator.generate(&input, &mut rng).unwrap().as_str() {
			"x y a" => a += 1,
			"x y b" => (),
			other => panic!("unexpected text {other:?}"),
		}
	}
	// Expected 3000
	assert!((2800..3200).contains(&a), "drew 'a' {a} times out of 4000");
}
