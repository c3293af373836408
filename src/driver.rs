use crate::error::QuizResult;
use crate::model::Summary;
use crate::session::Session;

/// Capa de presentación que convierte la interacción del usuario en
/// operaciones sobre la sesión y devuelve el resumen final.
pub trait Driver {
    fn run(&mut self, session: Session) -> QuizResult<Summary>;
}
