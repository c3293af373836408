use super::*;
use crate::error::QuizError;

impl QuizApp {
    /// Botón "Submit": necesita una opción marcada.
    pub fn enviar_respuesta(&mut self) -> QuizResult<()> {
        if self.state != AppState::Quiz {
            return Ok(());
        }
        if self.session.is_current_resolved() {
            self.message = "This question is already resolved. Press Next to continue.".into();
            return Ok(());
        }

        let Some(idx) = self.selected else {
            self.notice = Some(Notice::new(
                "No answer",
                "Please select an option or click Show Answer to reveal.",
            ));
            return Ok(());
        };

        let choice = self
            .session
            .current()
            .and_then(|q| q.choices.get(idx))
            .cloned()
            .ok_or(QuizError::InvalidState("selected option does not exist"))?;

        let result = self.session.resolve_current(Some(&choice))?;
        let body = if result.is_correct {
            "Correct!".to_string()
        } else {
            format!("Incorrect. Correct: {}", result.correct_answer)
        };
        self.message.clear();
        self.notice = Some(Notice::new("Result", body));
        Ok(())
    }

    /// Botón "Show Answer": siempre muestra la respuesta; solo resuelve si aún no se había hecho.
    pub fn mostrar_respuesta(&mut self) -> QuizResult<()> {
        if self.state != AppState::Quiz {
            return Ok(());
        }
        let answer = self
            .session
            .current()
            .map(|q| q.correct_answer.clone())
            .ok_or(QuizError::InvalidState("no current question"))?;

        if !self.session.is_current_resolved() {
            self.session.resolve_current(None)?;
        }
        self.notice = Some(Notice::new("Answer", format!("Correct answer:\n{answer}")));
        Ok(())
    }

    /// Botón "Next": si no se resolvió, cuenta como saltada.
    pub fn siguiente_pregunta(&mut self) -> QuizResult<()> {
        if self.state != AppState::Quiz {
            return Ok(());
        }
        self.session.advance()?;
        self.selected = None;
        self.notice = None;
        self.message.clear();

        if self.session.is_terminal() {
            self.finish()?;
        }
        Ok(())
    }

    /// Resumen + guardado de resultados. Solo se llama una vez, al terminar.
    pub fn finish(&mut self) -> QuizResult<()> {
        let summary = self.session.summary()?;
        log::info!(
            "quiz finished: {} of {} correct ({} answered)",
            summary.correct,
            summary.total,
            summary.answered
        );

        self.summary = Some(summary);
        self.state = AppState::Summary;
        self.notice = Some(Notice::new(
            "Quiz Finished",
            format!(
                "Total: {}\nAnswered: {}\nCorrect: {}",
                summary.total, summary.answered, summary.correct
            ),
        ));

        let results = self.session.results().to_vec();
        if let Err(e) = self.sink_mut().save_results(&results) {
            log::error!("could not save results: {e}");
            self.message = format!("⚠ Could not save results: {e}");
            self.record_outcome(Err(e));
            return Ok(());
        }
        self.record_outcome(Ok(summary));
        Ok(())
    }

    pub fn cerrar(&mut self) {
        self.close_requested = true;
    }
}
