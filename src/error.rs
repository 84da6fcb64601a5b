use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Food item not found: {0}")]
    ItemNotFound(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Preset '{preset}' references unknown item '{item}'")]
    UnknownPresetItem { preset: String, item: String },

    #[error("Duplicate food item: {0}")]
    DuplicateItem(String),

    #[error("Invalid food item: {0}")]
    InvalidItem(String),

    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("Daily value for {0} must be positive")]
    InvalidDailyValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
