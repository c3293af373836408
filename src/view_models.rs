// src/view_models.rs

use crate::model::{AnswerResult, NO_ANSWER, Question};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSlot {
    pub index: usize,
    pub label: String,
    pub available: bool, // false = hueco sin opción, se oculta y no se puede marcar
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub number: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ChoiceSlot {
    pub fn for_question(question: &Question, index: usize) -> Self {
        match question.choices.get(index) {
            Some(choice) => Self {
                index,
                label: format!("{}. {choice}", Question::letter(index)),
                available: true,
            },
            None => Self {
                index,
                label: String::new(),
                available: false,
            },
        }
    }
}

impl ResultRow {
    pub fn from_result(number: usize, r: &AnswerResult) -> Self {
        Self {
            number,
            question: r.question_text.clone(),
            user_answer: r
                .user_choice
                .clone()
                .unwrap_or_else(|| NO_ANSWER.to_string()),
            correct_answer: r.correct_answer.clone(),
            is_correct: r.is_correct,
        }
    }

    pub fn verdict(&self) -> &'static str {
        if self.is_correct { "✅" } else { "❌" }
    }
}
