use serde::{Deserialize, Serialize};

/// Texto que se muestra cuando una pregunta se saltó o se reveló.
pub const NO_ANSWER: &str = "(no answer/revealed)";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String, // Enunciado ya decodificado
    pub choices: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, choices: Vec<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices,
            correct_answer: correct_answer.into(),
        }
    }

    /// Letra de la opción en la posición `idx` (A, B, C...).
    pub fn letter(idx: usize) -> char {
        debug_assert!(idx < 26, "option index {idx} has no letter");
        u8::try_from(idx)
            .ok()
            .filter(|i| *i < 26)
            .map_or('?', |i| (b'A' + i) as char)
    }

    /// Índice de la opción correspondiente a una letra, si existe en esta pregunta.
    pub fn index_of_letter(&self, letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        let idx = (upper as u8 - b'A') as usize;
        (idx < self.choices.len()).then_some(idx)
    }
}

/// Resultado de una pregunta resuelta (respondida, saltada o revelada).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    #[serde(rename = "question")]
    pub question_text: String,
    #[serde(rename = "user")]
    pub user_choice: Option<String>, // None = saltada o revelada
    #[serde(rename = "correct")]
    pub correct_answer: String,
    #[serde(rename = "correct_bool")]
    pub is_correct: bool,
}

impl AnswerResult {
    pub fn for_question(question: &Question, user_choice: Option<&str>) -> Self {
        let is_correct = user_choice.is_some_and(|c| c == question.correct_answer);
        Self {
            question_text: question.text.clone(),
            user_choice: user_choice.map(str::to_owned),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        }
    }

    pub fn answered(&self) -> bool {
        self.user_choice.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Quiz,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "Q1",
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            "B",
        )
    }

    #[test]
    fn letters_map_to_choice_positions() {
        let q = sample();
        assert_eq!(Question::letter(0), 'A');
        assert_eq!(Question::letter(3), 'D');
        assert_eq!(Question::letter(25), 'Z');
        assert_eq!(q.index_of_letter('c'), Some(2));
        assert_eq!(q.index_of_letter('E'), None);
        assert_eq!(q.index_of_letter('1'), None);
    }

    #[test]
    fn missing_choice_is_never_correct() {
        let q = sample();
        let skipped = AnswerResult::for_question(&q, None);
        assert!(!skipped.is_correct);
        assert!(!skipped.answered());
        assert_eq!(skipped.correct_answer, "B");
    }

    #[test]
    fn comparison_is_exact() {
        let q = sample();
        assert!(AnswerResult::for_question(&q, Some("B")).is_correct);
        assert!(!AnswerResult::for_question(&q, Some("b")).is_correct);
        assert!(!AnswerResult::for_question(&q, Some("B ")).is_correct);
    }

    #[test]
    fn serializes_with_flat_keys() {
        let q = sample();
        let json = serde_json::to_value(AnswerResult::for_question(&q, None)).unwrap();
        assert_eq!(json["question"], "Q1");
        assert!(json["user"].is_null());
        assert_eq!(json["correct"], "B");
        assert_eq!(json["correct_bool"], false);

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["answer"], "B");
        assert_eq!(json["choices"].as_array().map(Vec::len), Some(4));
    }
}
