/// Message based error used during boot, before the typed subsystems exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub message: String,
}
