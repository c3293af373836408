use super::*;

impl QuizApp {
    /// Siempre MAX_OPTIONS huecos; los que sobran quedan como no disponibles.
    pub fn choice_slots(&self) -> Vec<ChoiceSlot> {
        match self.session.current() {
            Some(q) => (0..MAX_OPTIONS).map(|i| ChoiceSlot::for_question(q, i)).collect(),
            None => Vec::new(),
        }
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.session
            .results()
            .iter()
            .enumerate()
            .map(|(i, r)| ResultRow::from_result(i + 1, r))
            .collect()
    }

    pub fn question_heading(&self) -> Option<String> {
        self.session
            .current()
            .map(|q| format!("{}. {}", self.session.current_index() + 1, q.text))
    }

    pub fn progress_label(&self) -> String {
        let shown = (self.session.current_index() + 1).min(self.session.len());
        format!("Question {shown} of {}", self.session.len())
    }
}
