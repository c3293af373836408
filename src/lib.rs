pub mod app;
pub mod config;
pub mod data;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod model;
pub mod session;
pub mod text;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use driver::Driver;
pub use error::{QuizError, QuizResult};
pub use session::Session;
