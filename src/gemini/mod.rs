pub mod client;
pub mod types;

pub use client::{GeminiClient, MockGenerator};
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Cannot reach the generation endpoint at {0}")]
    Connection(String),

    #[error("Error with Gemini API: {status} - {body}")]
    Remote { status: u16, body: String },

    #[error("Unexpected response structure from Gemini API.")]
    MalformedResponse,

    #[error("No response text found in Gemini API output.")]
    EmptyReply,

    #[error("HTTP client error: {0}")]
    Http(String),
}
