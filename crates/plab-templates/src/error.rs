use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown template type: {0}")]
    UnknownCategory(String),
}
