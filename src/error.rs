// src/error.rs

use thiserror::Error;

/// Errores del quiz, desde la descarga hasta el resumen final.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// La API no devolvió preguntas utilizables. Aborta antes de empezar.
    #[error("no questions available: {0}")]
    DataUnavailable(String),
    /// Violación del invariante de la sesión (fallo del driver, no del usuario).
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
    /// Entrada de consola no reconocida. El driver de texto vuelve a preguntar.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("quiz closed after {resolved} of {total} questions; results were not saved")]
    Interrupted { resolved: usize, total: usize },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Gui(#[from] eframe::Error),
}

pub type QuizResult<T> = Result<T, QuizError>;
