use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use env_logger::Env;

use markov_server::{configure, SharedData};

/// Serve random text generated from a bigram Markov chain.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Text file to learn from
	#[arg(long, value_name = "PATH")]
	corpus: PathBuf,

	/// Address to bind
	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, default_value_t = 5000)]
	port: u16,
}

/// Main entry point for the server.
///
/// Trains the model once from `--corpus`, then starts an Actix-web HTTP
/// server sharing the table with every worker.
///
/// # Notes
/// - Log level comes from `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
	let cli = Cli::parse();

	let text = markov_core::read_all(&cli.corpus).map_err(std::io::Error::other)?;
	let table = markov_core::train(&text);
	if table.is_empty() {
		log::warn!("{} holds fewer than two words, every generation will fail", cli.corpus.display());
	}
	log::info!("loaded {} contexts from {}", table.len(), cli.corpus.display());

	let shared_data = web::Data::new(SharedData { table });

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind((cli.host.as_str(), cli.port))?
		.run()
		.await
}
