#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Invalid spring: {0}")]
    InvalidSpring(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Empty palette token: {0}")]
    EmptyToken(&'static str),

    #[error("Palette parse error: {0}")]
    PaletteParse(#[from] serde_json::Error),
}
