// src/config.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
pub const ENDPOINT_ENV: &str = "GK_QUIZ_ENDPOINT";
pub const GENERAL_KNOWLEDGE: u32 = 9;
pub const QUESTIONS_FILE: &str = "questions.json";
pub const RESULTS_FILE: &str = "results.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub amount: u32,
    pub category: u32,
    pub endpoint: String,
    pub timeout: Duration,
    pub questions_path: PathBuf,
    pub results_path: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            amount: 10,
            category: GENERAL_KNOWLEDGE,
            endpoint: default_endpoint(),
            timeout: Duration::from_secs(10),
            questions_path: PathBuf::from(QUESTIONS_FILE),
            results_path: PathBuf::from(RESULTS_FILE),
        }
    }
}

impl QuizConfig {
    /// Coloca questions.json y results.json dentro de `dir`.
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        self.questions_path = dir.join(QUESTIONS_FILE);
        self.results_path = dir.join(RESULTS_FILE);
        self
    }

    /// URL completa de la petición a la API.
    pub fn request_url(&self) -> String {
        let base = self.endpoint.trim().trim_end_matches('/');
        let sep = if base.contains('?') { '&' } else { '?' };
        format!(
            "{base}{sep}amount={}&category={}&type=multiple",
            self.amount, self.category
        )
    }
}

fn normalize_endpoint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV)
        .ok()
        .and_then(|v| normalize_endpoint(&v))
}

fn endpoint_from_build_env() -> Option<String> {
    option_env!("GK_QUIZ_ENDPOINT").and_then(normalize_endpoint)
}

/// Variable de entorno en tiempo de ejecución, luego la de compilación, luego OpenTDB.
pub fn default_endpoint() -> String {
    endpoint_from_env()
        .or_else(endpoint_from_build_env)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
