pub mod extract;
pub mod greeting;
pub mod image;
pub mod prompt;
pub mod router;
pub mod symptoms;
pub mod validate;

use thiserror::Error;

use crate::gemini::GeminiError;

/// Turn-level error taxonomy. Every variant is terminal for the current
/// turn only; the message doubles as the inline text shown to the user.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Please enter a valid query.")]
    EmptyInput,

    #[error("Your input contains invalid characters.")]
    InvalidCharacters,

    #[error(transparent)]
    Remote(#[from] GeminiError),

    #[error("Image generation failed: {0}")]
    ImageFetch(String),
}
