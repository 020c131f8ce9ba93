//! HTTP service generating text from one model trained at startup.
//!
//! The table is immutable once built, so it is shared by all workers
//! without a lock.

use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use markov_core::{GenerationInput, Generator, MarkovError, RngSource, StartSeed, TransitionTable};

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
pub struct GenerateParams {
	max_words: Option<usize>,
	seed: Option<String> // -> random, none or custom:<word> <word>
}

/// Response body of the `/v1/model` endpoint
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ModelSummary {
	pub contexts: usize,
	pub successors: usize
}

pub struct SharedData {
	pub table: TransitionTable
}

impl GenerateParams {
	/// Determines the starting seed strategy for the walk.
	fn start_seed(&self) -> Result<StartSeed, String> {
		match &self.seed {
			None => Ok(StartSeed::Random),
			Some(s) if s.eq_ignore_ascii_case("none") || s.eq_ignore_ascii_case("random") => Ok(StartSeed::Random),
			Some(s) if s.to_lowercase().starts_with("custom:") => {
				StartSeed::parse_custom(&s["custom:".len()..]).map_err(|e| e.to_string())
			}
			Some(_) => Err("Seed must start with 'custom:' or be 'random' or 'none'".into()),
		}
	}

	fn generation_input(&self) -> Result<GenerationInput, String> {
		let mut input = GenerationInput::new();
		input.start_seed = self.start_seed()?;
		input.set_max_words(self.max_words).map_err(|e| e.to_string())?;
		Ok(input)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the shared model once and returns the text as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(i) => i,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let result = Generator::new(&data.table)
		.and_then(|generator| generator.generate(&input, &mut RngSource::thread()));

	match result {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e @ MarkovError::UnknownContext { .. }) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => {
			log::error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/model`
///
/// Returns the size of the loaded model as JSON.
#[get("/v1/model")]
async fn get_model(data: web::Data<SharedData>) -> impl Responder {
	web::Json(ModelSummary {
		contexts: data.table.len(),
		successors: data.table.total_successors(),
	})
}

/// Registers every endpoint of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated).service(get_model);
}
