// src/data.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use html_escape::decode_html_entities;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};
use crate::model::{AnswerResult, Question};

/// Respuesta cruda de la API de Open Trivia DB.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

fn describe_response_code(code: i64) -> &'static str {
    match code {
        1 => "the API has not enough questions for this query",
        2 => "the API rejected an invalid parameter",
        3 => "session token not found",
        4 => "session token has returned all available questions",
        5 => "rate limited, try again in a few seconds",
        _ => "unknown API response code",
    }
}

fn decode(text: &str) -> String {
    decode_html_entities(text).into_owned()
}

impl RawQuestion {
    /// Decodifica entidades HTML y mezcla las opciones con el generador recibido.
    pub fn normalize<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let correct = decode(&self.correct_answer);
        let mut choices: Vec<String> = self.incorrect_answers.iter().map(|a| decode(a)).collect();
        choices.push(correct.clone());
        choices.shuffle(rng);
        Question::new(decode(&self.question), choices, correct)
    }
}

/// Convierte la respuesta completa en preguntas. Todo o nada.
pub fn normalize_response<R: Rng + ?Sized>(
    response: &ApiResponse,
    rng: &mut R,
) -> QuizResult<Vec<Question>> {
    if response.response_code != 0 {
        return Err(QuizError::DataUnavailable(format!(
            "response code {}: {}",
            response.response_code,
            describe_response_code(response.response_code)
        )));
    }
    if response.results.is_empty() {
        return Err(QuizError::DataUnavailable("the API returned zero questions".into()));
    }

    let questions: Vec<Question> = response.results.iter().map(|raw| raw.normalize(rng)).collect();
    log::debug!("normalized {} questions", questions.len());
    Ok(questions)
}

/* Persistencia */

/// Escribe una lista de registros como JSON legible, UTF-8 tal cual.
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> QuizResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::info!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> QuizResult<Vec<T>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}

pub fn save_questions(path: &Path, questions: &[Question]) -> QuizResult<()> {
    save_json(path, questions)
}

/// Destino de los resultados finales. Se llama una sola vez por partida.
pub trait ResultSink {
    fn save_results(&mut self, results: &[AnswerResult]) -> QuizResult<()>;
}

/// Sink en memoria, útil para pruebas.
impl ResultSink for Vec<AnswerResult> {
    fn save_results(&mut self, results: &[AnswerResult]) -> QuizResult<()> {
        self.extend_from_slice(results);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for JsonFileSink {
    fn save_results(&mut self, results: &[AnswerResult]) -> QuizResult<()> {
        save_json(&self.path, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
        RawQuestion {
            question: question.into(),
            correct_answer: correct.into(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn normalize_decodes_and_keeps_every_choice() {
        let mut rng = StdRng::seed_from_u64(7);
        let q = raw(
            "Who wrote &quot;Hamlet&quot;?",
            "Shakespeare",
            &["Marlowe", "Jonson", "Ch&eacute;khov"],
        )
        .normalize(&mut rng);

        assert_eq!(q.text, "Who wrote \"Hamlet\"?");
        assert_eq!(q.correct_answer, "Shakespeare");
        assert_eq!(q.choices.len(), 4);
        let got: HashSet<_> = q.choices.iter().map(String::as_str).collect();
        let expected: HashSet<_> = ["Shakespeare", "Marlowe", "Jonson", "Chékhov"].into_iter().collect();
        assert_eq!(got, expected);
        assert!(q.choices.contains(&q.correct_answer));
    }

    #[test]
    fn normalize_decodes_numeric_entities_in_answers() {
        let mut rng = StdRng::seed_from_u64(1);
        let q = raw("It&#039;s", "Rock &amp; Roll", &["Jazz"]).normalize(&mut rng);
        assert_eq!(q.text, "It's");
        assert_eq!(q.correct_answer, "Rock & Roll");
        assert!(q.choices.iter().any(|c| c == "Rock & Roll"));
    }

    #[test]
    fn shuffle_is_reproducible_with_the_same_seed() {
        let record = raw("Q", "D", &["A", "B", "C"]);
        let a = record.normalize(&mut StdRng::seed_from_u64(42));
        let b = record.normalize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.choices, b.choices);
    }

    #[test]
    fn zero_results_is_data_unavailable() {
        let response = ApiResponse { response_code: 0, results: vec![] };
        let err = normalize_response(&response, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, QuizError::DataUnavailable(_)));
    }

    #[test]
    fn failure_code_is_data_unavailable_even_with_results() {
        let response = ApiResponse {
            response_code: 5,
            results: vec![raw("Q", "A", &["B"])],
        };
        let err = normalize_response(&response, &mut StdRng::seed_from_u64(0)).unwrap_err();
        match err {
            QuizError::DataUnavailable(msg) => assert!(msg.contains("rate limited")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn payload_deserializes_from_api_json() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "easy",
                "category": "General Knowledge",
                "question": "2 &gt; 1?",
                "correct_answer": "Yes",
                "incorrect_answers": ["No", "Maybe", "Never"]
            }]
        }"#;
        let response: ApiResponse = serde_json::from_str(body).unwrap();
        let questions = normalize_response(&response, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "2 > 1?");
        assert_eq!(questions[0].choices.len(), 4);
    }

    #[test]
    fn missing_results_field_defaults_to_empty() {
        let response: ApiResponse = serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn json_files_keep_utf8_verbatim() {
        let path = std::env::temp_dir().join(format!("gk_quiz_questions_{}.json", std::process::id()));
        let questions = vec![Question::new("¿Café?", vec!["Sí".into(), "No".into()], "Sí")];
        save_questions(&path, &questions).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("¿Café?"));
        let loaded: Vec<Question> = load_json(&path).unwrap();
        assert_eq!(loaded, questions);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn file_sink_writes_results() {
        let path = std::env::temp_dir().join(format!("gk_quiz_results_{}.json", std::process::id()));
        let q = Question::new("Q1", vec!["A".into(), "B".into()], "B");
        let results = vec![AnswerResult::for_question(&q, Some("B"))];
        let mut sink = JsonFileSink::new(&path);
        sink.save_results(&results).unwrap();

        let loaded: Vec<AnswerResult> = load_json(sink.path()).unwrap();
        assert_eq!(loaded, results);
        let _ = std::fs::remove_file(&path);
    }
}
