use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaterError {
    #[error("Event not found: {0}")]
    EventNotFound(u32),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CaterError>;
