// src/fetch.rs

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::config::QuizConfig;
use crate::data::{ApiResponse, normalize_response};
use crate::error::QuizResult;
use crate::model::Question;

const AGENT: &str = concat!("gk-quiz/", env!("CARGO_PKG_VERSION"));

/// Descarga la respuesta cruda de la API (bloqueante, con timeout).
pub fn fetch_raw(config: &QuizConfig) -> QuizResult<ApiResponse> {
    let url = config.request_url();
    log::info!("fetching {} questions from {url}", config.amount);

    let client = Client::builder().timeout(config.timeout).build()?;
    let response = client
        .get(&url)
        .header(USER_AGENT, AGENT)
        .header(ACCEPT, "application/json")
        .send()?
        .error_for_status()?;

    let body: ApiResponse = response.json()?;
    log::debug!(
        "API answered with code {} and {} records",
        body.response_code,
        body.results.len()
    );
    Ok(body)
}

/// Descarga y normaliza las preguntas de cultura general.
pub fn fetch_questions<R: Rng + ?Sized>(config: &QuizConfig, rng: &mut R) -> QuizResult<Vec<Question>> {
    let response = fetch_raw(config)?;
    normalize_response(&response, rng)
}
