// src/session.rs

use crate::error::{QuizError, QuizResult};
use crate::model::{AnswerResult, Question, Summary};

/// Estado de una partida: preguntas fijas, resultados alineados por índice
/// y el cursor de la pregunta actual.
#[derive(Debug, Clone)]
pub struct Session {
    questions: Vec<Question>,
    results: Vec<AnswerResult>,
    resolved: Vec<bool>,
    current_index: usize,
}

impl Session {
    pub fn new(questions: Vec<Question>) -> Self {
        let resolved = vec![false; questions.len()];
        Self {
            results: Vec::with_capacity(questions.len()),
            questions,
            resolved,
            current_index: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Pregunta actual, o None si la partida ha terminado
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_current_resolved(&self) -> bool {
        self.resolved
            .get(self.current_index)
            .copied()
            .unwrap_or(false)
    }

    pub fn resolved_count(&self) -> usize {
        self.results.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// Registra el resultado de la pregunta actual. `None` = saltada o revelada.
    pub fn resolve_current(&mut self, user_choice: Option<&str>) -> QuizResult<&AnswerResult> {
        let idx = self.current_index;
        let question = self
            .questions
            .get(idx)
            .ok_or(QuizError::InvalidState("cannot resolve a finished session"))?;
        if self.resolved[idx] {
            return Err(QuizError::InvalidState("question already resolved"));
        }

        let result = AnswerResult::for_question(question, user_choice);
        log::debug!(
            "question {} resolved: answered={} correct={}",
            idx + 1,
            result.answered(),
            result.is_correct
        );
        self.results.push(result);
        self.resolved[idx] = true;
        Ok(&self.results[idx])
    }

    /// Pasa a la siguiente pregunta. Si la actual no se resolvió, cuenta como saltada.
    pub fn advance(&mut self) -> QuizResult<()> {
        if self.is_terminal() {
            return Err(QuizError::InvalidState("cannot advance past the last question"));
        }
        if !self.is_current_resolved() {
            self.resolve_current(None)?;
        }
        self.current_index += 1;
        Ok(())
    }

    pub fn summary(&self) -> QuizResult<Summary> {
        if !self.is_terminal() {
            return Err(QuizError::InvalidState("summary requested before the quiz finished"));
        }
        let answered = self.results.iter().filter(|r| r.answered()).count();
        let correct = self
            .results
            .iter()
            .filter(|r| r.answered() && r.is_correct)
            .count();
        Ok(Summary {
            total: self.questions.len(),
            answered,
            correct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, answer: &str) -> Question {
        Question::new(
            text,
            ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect(),
            answer,
        )
    }

    fn single() -> Session {
        Session::new(vec![q("Q1", "B")])
    }

    #[test]
    fn answered_correctly_counts_as_correct() {
        let mut s = single();
        s.resolve_current(Some("B")).unwrap();
        s.advance().unwrap();
        assert_eq!(
            s.summary().unwrap(),
            Summary { total: 1, answered: 1, correct: 1 }
        );
    }

    #[test]
    fn advance_without_resolve_records_a_skip() {
        let mut s = single();
        s.advance().unwrap();
        assert_eq!(
            s.summary().unwrap(),
            Summary { total: 1, answered: 0, correct: 0 }
        );
        assert_eq!(s.results()[0].user_choice, None);
        assert!(!s.results()[0].is_correct);
    }

    #[test]
    fn double_resolve_is_rejected() {
        let mut s = single();
        s.resolve_current(Some("A")).unwrap();
        let err = s.resolve_current(Some("B")).unwrap_err();
        assert!(matches!(err, QuizError::InvalidState(_)));
        assert_eq!(s.results().len(), 1);
        assert_eq!(s.results()[0].user_choice.as_deref(), Some("A"));
    }

    #[test]
    fn terminal_session_rejects_resolve_and_advance() {
        let mut s = single();
        s.advance().unwrap();
        assert!(s.is_terminal());
        assert!(s.current().is_none());
        assert!(matches!(s.resolve_current(None), Err(QuizError::InvalidState(_))));
        assert!(matches!(s.advance(), Err(QuizError::InvalidState(_))));
    }

    #[test]
    fn summary_requires_terminal_and_is_idempotent() {
        let mut s = Session::new(vec![q("Q1", "A"), q("Q2", "C")]);
        assert!(matches!(s.summary(), Err(QuizError::InvalidState(_))));
        s.resolve_current(Some("A")).unwrap();
        s.advance().unwrap();
        s.resolve_current(None).unwrap();
        s.advance().unwrap();
        let first = s.summary().unwrap();
        assert_eq!(first, s.summary().unwrap());
        assert_eq!(first, Summary { total: 2, answered: 1, correct: 1 });
    }

    #[test]
    fn results_stay_aligned_with_questions() {
        let mut s = Session::new(vec![q("Q1", "A"), q("Q2", "B"), q("Q3", "C")]);
        s.resolve_current(Some("D")).unwrap();
        s.advance().unwrap();
        s.advance().unwrap();
        assert!(!s.is_current_resolved());
        s.resolve_current(Some("C")).unwrap();
        assert!(s.is_current_resolved());
        s.advance().unwrap();

        assert_eq!(s.results().len(), s.questions().len());
        for (question, result) in s.questions().iter().zip(s.results()) {
            assert_eq!(question.text, result.question_text);
            assert_eq!(question.correct_answer, result.correct_answer);
            if result.user_choice.is_none() {
                assert!(!result.is_correct);
            }
        }
        assert_eq!(s.summary().unwrap(), Summary { total: 3, answered: 2, correct: 1 });
    }

    #[test]
    fn revealed_answer_never_scores() {
        let mut s = single();
        // Revelar registra None aunque la respuesta mostrada sea la correcta
        s.resolve_current(None).unwrap();
        s.advance().unwrap();
        assert_eq!(s.summary().unwrap().correct, 0);
    }

    #[test]
    fn empty_session_is_terminal_from_the_start() {
        let s = Session::new(Vec::new());
        assert!(s.is_terminal());
        assert_eq!(s.summary().unwrap(), Summary::default());
    }
}
