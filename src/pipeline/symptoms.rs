//! Keyword lookup for first-mention symptom queries.
//!
//! Produces the first clarifying question for a recognized condition.
//! Later detail turns about the same condition are handled by the
//! extractor. Nothing here records that a question was already asked,
//! so repeated mentions re-trigger the same text.

/// One recognized condition: its trigger keywords and clarifying question.
struct ConditionPrompt {
    keywords: &'static [&'static str],
    question: &'static str,
}

/// Ordered condition table — first match wins, so overlapping keyword
/// forms ("insomniac"/"insomnia") are grouped and tested first.
const CONDITIONS: &[ConditionPrompt] = &[
    ConditionPrompt {
        keywords: &["insomniac", "insomnia"],
        question: "It seems like you're dealing with insomnia. Could you tell me more about your sleep patterns?\n\
            - Do you have trouble falling asleep, staying asleep, or waking up too early?\n\
            - How many hours of sleep are you getting on average per night?\n\
            - Are you experiencing any stress, anxiety, or other factors that might be affecting your sleep?\n\
            This information will help me understand your condition better.",
    },
    ConditionPrompt {
        keywords: &["cough"],
        question: "I understand you're experiencing a cough. Could you please provide more details?\n\
            - How long have you had the cough?\n\
            - Is it dry or with mucus?\n\
            - Do you have other symptoms like fever or shortness of breath?\n\
            This will help narrow down potential causes.",
    },
    ConditionPrompt {
        keywords: &["headache"],
        question: "Can you tell me more about your headache?\n\
            - How long have you had the headache?\n\
            - Is it throbbing, sharp, or dull?\n\
            - Any other symptoms like nausea, vomiting, or dizziness?\n\
            Please share as much detail as possible.",
    },
    ConditionPrompt {
        keywords: &["upset stomach"],
        question: "Sorry to hear you're feeling unwell. Could you clarify:\n\
            - Are you experiencing nausea, vomiting, diarrhea, or pain?\n\
            - Where is the pain located? Is it sharp or cramping?\n\
            This information will help me understand better.",
    },
];

/// General malaise prompt — checked after the specific conditions so it
/// never shadows them.
const MALAISE_KEYWORD: &str = "not feeling good";
const MALAISE_PROMPT: &str =
    "I'm sorry to hear you're not feeling well. Can you describe your symptoms in more detail?";

/// Case-insensitive substring match over the ordered condition table.
pub fn match_symptom(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();

    for condition in CONDITIONS {
        if condition.keywords.iter().any(|k| lowered.contains(k)) {
            return Some(condition.question);
        }
    }

    if lowered.contains(MALAISE_KEYWORD) {
        return Some(MALAISE_PROMPT);
    }

    None
}
