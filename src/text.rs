// src/text.rs

use std::io::{BufRead, Write};

use crate::data::ResultSink;
use crate::driver::Driver;
use crate::error::{QuizError, QuizResult};
use crate::model::{AnswerResult, NO_ANSWER, Question, Summary};
use crate::session::Session;

/// Lo que el usuario puede hacer en cada pregunta desde la consola.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    Choose(usize),
    Skip,
    Reveal,
}

/// Interpreta una línea de entrada. Los errores solo provocan volver a preguntar.
pub fn parse_input(line: &str, question: &Question) -> QuizResult<TextCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(TextCommand::Skip);
    }
    if trimmed.eq_ignore_ascii_case("show") {
        return Ok(TextCommand::Reveal);
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => question
            .index_of_letter(letter)
            .map(TextCommand::Choose)
            .ok_or_else(|| QuizError::InvalidInput(format!("'{letter}' is not one of the listed options"))),
        _ => Err(QuizError::InvalidInput(format!("unrecognized command '{trimmed}'"))),
    }
}

fn letter_range(question: &Question) -> String {
    match question.choices.len() {
        0 => String::new(),
        n => format!("A-{}", Question::letter(n - 1)),
    }
}

/// Driver de consola: pregunta por pregunta, bloqueando en cada lectura.
pub struct TextDriver<R, W, S> {
    input: R,
    output: W,
    sink: S,
    auto: bool,
}

impl<R: BufRead, W: Write, S: ResultSink> TextDriver<R, W, S> {
    pub fn new(input: R, output: W, sink: S) -> Self {
        Self {
            input,
            output,
            sink,
            auto: false,
        }
    }

    /// Modo automático: muestra cada respuesta sin leer la entrada.
    pub fn auto(mut self, auto: bool) -> Self {
        self.auto = auto;
        self
    }

    pub fn into_parts(self) -> (W, S) {
        (self.output, self.sink)
    }

    fn render_question(&mut self, number: usize, question: &Question) -> QuizResult<()> {
        writeln!(self.output, "{number}. {}", question.text)?;
        for (idx, choice) in question.choices.iter().enumerate() {
            writeln!(self.output, "   {}. {choice}", Question::letter(idx))?;
        }
        Ok(())
    }

    /// Lee hasta obtener un comando válido. Fin de la entrada = saltar.
    fn read_command(&mut self, question: &Question) -> QuizResult<TextCommand> {
        loop {
            write!(
                self.output,
                "Your answer ({}), 'show' to reveal, Enter to skip: ",
                letter_range(question)
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(TextCommand::Skip);
            }
            match parse_input(&line, question) {
                Ok(command) => return Ok(command),
                Err(QuizError::InvalidInput(reason)) => {
                    log::debug!("rejected console input: {reason}");
                    writeln!(self.output, "Invalid input. Try again.")?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    fn play_current(&mut self, session: &mut Session) -> QuizResult<()> {
        let question = session
            .current()
            .cloned()
            .ok_or(QuizError::InvalidState("no current question"))?;
        self.render_question(session.current_index() + 1, &question)?;

        if self.auto {
            writeln!(self.output, "(Auto) Correct answer: {}\n", question.correct_answer)?;
            session.resolve_current(None)?;
            return Ok(());
        }

        match self.read_command(&question)? {
            TextCommand::Skip => {
                writeln!(self.output, "-- skipped --\n")?;
                session.resolve_current(None)?;
            }
            TextCommand::Reveal => {
                writeln!(self.output, "Answer: {}\n", question.correct_answer)?;
                session.resolve_current(None)?;
            }
            TextCommand::Choose(idx) => {
                let result = session.resolve_current(Some(&question.choices[idx]))?;
                let verdict = if result.is_correct { "Correct!" } else { "Incorrect." };
                writeln!(self.output, "{verdict}\n")?;
            }
        }
        Ok(())
    }

    fn render_report(&mut self, summary: &Summary, results: &[AnswerResult]) -> QuizResult<()> {
        writeln!(self.output, "=== Quiz Summary ===")?;
        writeln!(self.output, "Total questions: {}", summary.total)?;
        writeln!(self.output, "Answered: {}", summary.answered)?;
        writeln!(self.output, "Correct: {}\n", summary.correct)?;

        for (i, r) in results.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, r.question_text)?;
            writeln!(
                self.output,
                "   Your answer: {}",
                r.user_choice.as_deref().unwrap_or(NO_ANSWER)
            )?;
            writeln!(self.output, "   Correct answer: {}\n", r.correct_answer)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write, S: ResultSink> Driver for TextDriver<R, W, S> {
    fn run(&mut self, mut session: Session) -> QuizResult<Summary> {
        while !session.is_terminal() {
            self.play_current(&mut session)?;
            session.advance()?;
        }

        let summary = session.summary()?;
        self.render_report(&summary, session.results())?;
        self.sink.save_results(session.results())?;
        Ok(summary)
    }
}
