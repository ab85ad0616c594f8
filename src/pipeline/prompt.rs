//! Fixed prompt material for remote generation calls.

/// Few-shot example turn contents, in order, prepended to every primary
/// generation request. Roles are not sent — the endpoint receives a
/// flat ordered list of text parts.
pub const FEW_SHOT_TURNS: &[&str] = &[
    "What are the symptoms of diabetes?",
    "Common symptoms include increased thirst, frequent urination, extreme hunger, and fatigue.",
    "How can I reduce my cholesterol naturally?",
    "Reduce cholesterol by eating healthy fats, increasing fiber intake, and exercising regularly.",
];

/// Ordered fragments for a primary generation request: the few-shot
/// preamble, then the live user text.
pub fn primary_fragments(user_input: &str) -> Vec<String> {
    FEW_SHOT_TURNS
        .iter()
        .map(|turn| turn.to_string())
        .chain(std::iter::once(user_input.to_string()))
        .collect()
}

/// Rewritten prompt for the image-intent path. No preamble.
pub fn image_fragments(user_input: &str) -> Vec<String> {
    vec![format!("Generate an image of {user_input}")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_fragments_end_with_user_input() {
        let fragments = primary_fragments("what causes migraines?");
        assert_eq!(fragments.len(), FEW_SHOT_TURNS.len() + 1);
        assert_eq!(fragments.first().map(String::as_str), Some(FEW_SHOT_TURNS[0]));
        assert_eq!(
            fragments.last().map(String::as_str),
            Some("what causes migraines?")
        );
    }

    #[test]
    fn few_shot_turns_alternate_question_and_answer() {
        assert_eq!(FEW_SHOT_TURNS.len() % 2, 0);
        assert!(FEW_SHOT_TURNS[0].ends_with('?'));
        assert!(!FEW_SHOT_TURNS[1].ends_with('?'));
    }

    #[test]
    fn image_fragments_rewrite_the_prompt_without_preamble() {
        let fragments = image_fragments("show me a diagram of the heart");
        assert_eq!(
            fragments,
            vec!["Generate an image of show me a diagram of the heart".to_string()]
        );
    }
}
