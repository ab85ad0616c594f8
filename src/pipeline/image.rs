//! Image-intent detection and the secondary generation call.
//!
//! Always evaluated after the primary reply path, never instead of it.
//! The generation endpoint returns prose rather than image data, so the
//! returned "locator" rarely renders as a usable image; the call shape
//! is kept for parity and failures are contained to this path.

use super::{prompt, ChatError};
use crate::gemini::GenerateReply;

/// Keywords that trigger the secondary image request.
const IMAGE_KEYWORDS: &[&str] = &["image", "show me", "diagram", "picture"];

/// Case-insensitive substring test for image intent.
pub fn is_image_query(input: &str) -> bool {
    let lowered = input.to_lowercase();
    IMAGE_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Issue the secondary call and return the purported image locator.
pub fn fetch_image_locator<G: GenerateReply>(
    generator: &G,
    input: &str,
) -> Result<String, ChatError> {
    generator
        .generate(&prompt::image_fragments(input))
        .map_err(|e| ChatError::ImageFetch(e.to_string()))
}
