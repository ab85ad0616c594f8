//! Input validation — rejects empty and suspicious input before any
//! matcher runs.

use super::ChatError;

/// Characters that are never allowed in a query.
const DENYLIST: &[char] = &['<', '>', ';', '|', '&'];

/// Validate raw user input. Pure predicate, no side effects.
///
/// On failure the caller must show the error and stop the turn without
/// appending anything to the transcript.
pub fn validate_input(input: &str) -> Result<(), ChatError> {
    if input.trim().is_empty() {
        return Err(ChatError::EmptyInput);
    }
    if input.contains(DENYLIST) {
        return Err(ChatError::InvalidCharacters);
    }
    Ok(())
}
