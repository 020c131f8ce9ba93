use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{info, LevelFilter};

use markov_core::{train, GenerationInput, Generator, RngSource, StartSeed};

/// Generate random text from a bigram Markov chain trained on a text file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to learn from
    path: PathBuf,

    /// Number of texts to generate from the same model
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Stop a text after this many words (>= 2)
    #[arg(long, value_name = "WORDS")]
    max_words: Option<usize>,

    /// Start from this two-word context, e.g. "Sam I"
    #[arg(long, value_name = "WORDS")]
    seed: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    // Build the generation options first so bad flags fail before any I/O
    let mut input = GenerationInput::new();
    input.set_max_words(cli.max_words)?;
    if let Some(seed) = &cli.seed {
        input.start_seed = StartSeed::parse_custom(seed)?;
    }

    let text = markov_core::read_all(&cli.path)?;
    let table = train(&text);
    info!(
        "learned {} contexts from {}",
        table.len(),
        cli.path.display()
    );

    let generator = Generator::new(&table)
        .with_context(|| format!("cannot generate from {}", cli.path.display()))?;
    let mut rng = RngSource::thread();
    for _ in 0..cli.count {
        println!("{}", generator.generate(&input, &mut rng)?);
    }

    Ok(())
}

/// Default level is `warn`; `RUST_LOG` is read first and the flags override it.
fn init_logging(verbose: u8, quiet: u8) {
    let level = if quiet > 0 {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();
    if verbose > 0 || quiet > 0 {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}
