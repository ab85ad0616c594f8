//! Canned replies for short greetings.

/// Fixed greeting → reply table. Lookup is case-insensitive and exact:
/// "hello there" does not match.
const GREETINGS: &[(&str, &str)] = &[
    ("hi", "Hello! How can I assist you today?"),
    (
        "hello",
        "Hi there! How can I help you with your healthcare query?",
    ),
    ("how are you", "I'm here to assist you! How can I help today?"),
];

/// Look up a canned reply for a greeting. Not-found is not an error.
pub fn match_greeting(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    GREETINGS
        .iter()
        .find(|(phrase, _)| *phrase == lowered)
        .map(|(_, reply)| *reply)
}
