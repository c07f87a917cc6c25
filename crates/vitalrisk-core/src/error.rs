use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vitals field: {0}")]
    UnknownField(String),
}
