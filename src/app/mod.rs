use std::cell::RefCell;
use std::rc::Rc;

use crate::data::ResultSink;
use crate::error::{QuizError, QuizResult};
use crate::model::{AppState, Summary};
use crate::session::Session;

// Submódulos
pub mod actions;
pub mod view_models;

pub use crate::view_models::{ChoiceSlot, ResultRow};

/// Número fijo de opciones que muestra la ventana.
pub const MAX_OPTIONS: usize = 4;

/// Aviso modal (equivalente a un messagebox).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Lo que la ventana deja al driver cuando se cierra.
#[derive(Debug, Default)]
pub struct GuiOutcome {
    pub resolved: usize,
    pub total: usize,
    pub result: Option<QuizResult<Summary>>,
}

impl GuiOutcome {
    /// Resultado del driver. Sin resultado = ventana cerrada a mitad de partida,
    /// y en ese caso no se guarda nada.
    pub fn into_result(self) -> QuizResult<Summary> {
        match self.result {
            Some(result) => result,
            None => {
                log::warn!(
                    "quiz window closed after {} of {} questions, results not saved",
                    self.resolved,
                    self.total
                );
                Err(QuizError::Interrupted {
                    resolved: self.resolved,
                    total: self.total,
                })
            }
        }
    }
}

pub type SharedOutcome = Rc<RefCell<GuiOutcome>>;

pub struct QuizApp {
    pub session: Session,
    pub selected: Option<usize>, // opción marcada en la pregunta actual
    pub state: AppState,
    pub notice: Option<Notice>,
    pub message: String,
    pub summary: Option<Summary>,
    pub close_requested: bool,
    sink: Box<dyn ResultSink>,
    outcome: SharedOutcome,
}

impl QuizApp {
    pub fn new(session: Session, sink: Box<dyn ResultSink>, outcome: SharedOutcome) -> Self {
        let mut app = Self {
            session,
            selected: None,
            state: AppState::Quiz,
            notice: None,
            message: String::new(),
            summary: None,
            close_requested: false,
            sink,
            outcome,
        };
        app.sync_outcome();

        // Sin preguntas no hay nada que mostrar: directo al resumen
        if app.session.is_terminal() {
            let result = app.finish();
            app.guard(result);
        }
        app
    }

    pub fn outcome(&self) -> SharedOutcome {
        Rc::clone(&self.outcome)
    }

    /// Copia el progreso al resultado compartido con el driver.
    pub(crate) fn sync_outcome(&self) {
        let mut outcome = self.outcome.borrow_mut();
        outcome.resolved = self.session.resolved_count();
        outcome.total = self.session.len();
    }

    pub(crate) fn sink_mut(&mut self) -> &mut dyn ResultSink {
        self.sink.as_mut()
    }

    pub(crate) fn record_outcome(&self, result: QuizResult<Summary>) {
        self.outcome.borrow_mut().result = Some(result);
    }

    /// Un error de estado aborta toda la ejecución en vez de seguir con resultados corruptos.
    pub fn guard(&mut self, result: QuizResult<()>) {
        self.sync_outcome();
        if let Err(e) = result {
            log::error!("aborting quiz window: {e}");
            self.record_outcome(Err(e));
            self.close_requested = true;
        }
    }
}
