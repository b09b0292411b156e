use crate::layouts::LayoutName;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigitCostError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// A character of the (possibly digit-converted) document has no key on the layout.
    #[error("Unmapped character {character:?} at position {position} on the {layout} layout")]
    UnmappedCharacter {
        character: char,
        position: usize,
        layout: LayoutName,
    },

    #[error("Unknown typist profile '{name}' (available: {available})")]
    UnknownTypistProfile { name: String, available: String },

    #[error("Malformed digit map: {0}")]
    MalformedDigitMap(String),

    #[error("Layout Validation Error: {0}")]
    LayoutValidation(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type DcResult<T> = Result<T, DigitCostError>;
