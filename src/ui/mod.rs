mod helpers;
pub mod layout;
pub mod views;

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{GuiOutcome, QuizApp};
use crate::data::ResultSink;
use crate::driver::Driver;
use crate::error::{QuizError, QuizResult};
use crate::model::{AppState, Summary};
use crate::session::Session;
use eframe::{App, Frame};
use egui::{Context, ViewportCommand};
use helpers::notice_window;
use layout::{bottom_panel, top_panel};

pub const WINDOW_TITLE: &str = "GK Quiz";

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary_view(self, ctx),
        }

        if self.notice.is_some() {
            notice_window(self, ctx);
        }

        if self.close_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

/// Driver gráfico: abre la ventana y bloquea hasta que se cierra.
pub struct GuiDriver {
    sink: Option<Box<dyn ResultSink>>,
    viewport: egui::ViewportBuilder,
}

impl GuiDriver {
    pub fn new(sink: impl ResultSink + 'static) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            viewport: egui::ViewportBuilder::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size([680.0, 480.0]),
        }
    }
}

impl Driver for GuiDriver {
    fn run(&mut self, session: Session) -> QuizResult<Summary> {
        let sink = self
            .sink
            .take()
            .ok_or(QuizError::InvalidState("graphical driver can only run once"))?;
        let outcome = Rc::new(RefCell::new(GuiOutcome::default()));
        let app = QuizApp::new(session, sink, Rc::clone(&outcome));

        let options = eframe::NativeOptions {
            viewport: self.viewport.clone(),
            ..Default::default()
        };

        log::info!("opening quiz window");
        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )?;

        let closed = std::mem::take(&mut *outcome.borrow_mut());
        closed.into_result()
    }
}
