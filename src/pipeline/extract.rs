//! Symptom detail extraction — turns free text about a known condition
//! into structured facts and a deterministic templated summary.

use std::sync::LazyLock;

use regex::Regex;

use crate::session::{FactKey, SymptomFacts};

static DURATION_DAYS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*days").unwrap());

/// Follow-up questions appended verbatim whenever extraction yields at
/// least one fact.
const FOLLOW_UPS: &[&str] = &[
    "- Have you experienced any sensitivity to light or sound?",
    "- Are you feeling dehydrated or have you had a fever?",
    "- Is there any pain in your neck or shoulders?",
];

/// Scan the input for detail facts about a recognized condition.
///
/// The condition keyword is matched case-insensitively; the detail
/// keyword scans run against the raw input, case-sensitive. The
/// pain-type checks run sharp then cramping, so cramping wins when both
/// appear (last-checked-wins).
pub fn extract_details(input: &str) -> SymptomFacts {
    let lowered = input.to_lowercase();
    let mut details = SymptomFacts::new();

    if lowered.contains("headache") {
        if input.contains("past") && input.contains("days") {
            if let Some(caps) = DURATION_DAYS.captures(input) {
                details.insert(FactKey::Duration, caps[1].to_string());
            }
        }
        if input.contains("dull") {
            details.insert(FactKey::Kind, "dull".to_string());
        }
        if input.contains("vomiting") {
            details.insert(FactKey::Symptoms, "vomiting".to_string());
        }
    } else if lowered.contains("upset stomach") {
        if input.contains("pain") {
            details.insert(FactKey::Pain, "pain".to_string());
        }
        if input.contains("sharp") {
            details.insert(FactKey::PainType, "sharp".to_string());
        }
        if input.contains("cramping") {
            details.insert(FactKey::PainType, "cramping".to_string());
        }
    }

    details
}

/// Render the templated summary for a non-empty extraction: one line
/// per present fact key in fixed order (duration, type, symptoms,
/// pain), then the three fixed follow-up questions.
pub fn build_summary(details: &SymptomFacts) -> String {
    let mut lines = vec![
        "Thank you for sharing. Based on what you've mentioned, here's what I understand:"
            .to_string(),
    ];

    if let Some(duration) = details.get(&FactKey::Duration) {
        lines.push(format!("- Headache duration: {duration} days"));
    }
    if let Some(kind) = details.get(&FactKey::Kind) {
        lines.push(format!("- Headache type: {kind}"));
    }
    if let Some(symptoms) = details.get(&FactKey::Symptoms) {
        lines.push(format!("- Other symptoms: {symptoms}"));
    }
    if details.contains_key(&FactKey::Pain) {
        let pain_type = details
            .get(&FactKey::PainType)
            .map(String::as_str)
            .unwrap_or("unspecified");
        lines.push(format!("- Pain type: {pain_type}"));
    }

    lines.push("I'll ask a few more questions to understand better:".to_string());
    lines.extend(FOLLOW_UPS.iter().map(|q| q.to_string()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Headache extraction ──

    #[test]
    fn headache_duration_type_and_symptoms() {
        let details =
            extract_details("I've had a dull headache for the past 3 days with vomiting");

        assert_eq!(details.len(), 3);
        assert_eq!(details.get(&FactKey::Duration).map(String::as_str), Some("3"));
        assert_eq!(details.get(&FactKey::Kind).map(String::as_str), Some("dull"));
        assert_eq!(
            details.get(&FactKey::Symptoms).map(String::as_str),
            Some("vomiting")
        );
    }

    #[test]
    fn duration_requires_past_and_days_together() {
        // "days" without "past" — no duration recorded.
        let details = extract_details("dull headache for 3 days");
        assert!(!details.contains_key(&FactKey::Duration));
        assert_eq!(details.get(&FactKey::Kind).map(String::as_str), Some("dull"));
    }

    #[test]
    fn headache_mention_alone_extracts_nothing() {
        assert!(extract_details("I have a headache").is_empty());
    }

    // ── Upset stomach extraction ──

    #[test]
    fn cramping_overwrites_sharp() {
        let details = extract_details("my upset stomach pain is sharp and cramping");
        assert_eq!(
            details.get(&FactKey::PainType).map(String::as_str),
            Some("cramping")
        );
    }

    #[test]
    fn sharp_alone_is_kept() {
        let details = extract_details("upset stomach, the pain is sharp");
        assert_eq!(
            details.get(&FactKey::PainType).map(String::as_str),
            Some("sharp")
        );
        assert!(details.contains_key(&FactKey::Pain));
    }

    #[test]
    fn detail_scan_is_case_sensitive_like_the_condition_scan_is_not() {
        // Condition keyword matches case-insensitively...
        let details = extract_details("UPSET STOMACH with pain");
        assert!(details.contains_key(&FactKey::Pain));
        // ...but an upper-case detail keyword does not register.
        let details = extract_details("upset stomach, PAIN everywhere");
        assert!(!details.contains_key(&FactKey::Pain));
    }

    #[test]
    fn stomach_pain_without_the_condition_keyword_is_not_gated_in() {
        // The gate is the "upset stomach" keyword, not "stomach" or "pain".
        assert!(extract_details("my stomach pain is sharp and cramping").is_empty());
    }

    #[test]
    fn unrelated_input_yields_no_facts() {
        assert!(extract_details("I feel great today").is_empty());
    }

    // ── Summary rendering ──

    #[test]
    fn summary_lists_facts_in_fixed_order_with_follow_ups() {
        let details =
            extract_details("I've had a dull headache for the past 3 days with vomiting");
        let summary = build_summary(&details);

        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Thank you for sharing. Based on what you've mentioned, here's what I understand:",
                "- Headache duration: 3 days",
                "- Headache type: dull",
                "- Other symptoms: vomiting",
                "I'll ask a few more questions to understand better:",
                "- Have you experienced any sensitivity to light or sound?",
                "- Are you feeling dehydrated or have you had a fever?",
                "- Is there any pain in your neck or shoulders?",
            ]
        );
    }

    #[test]
    fn summary_pain_line_uses_pain_type() {
        let details = extract_details("upset stomach pain, cramping");
        let summary = build_summary(&details);
        assert!(summary.contains("- Pain type: cramping"));
    }

    #[test]
    fn summary_pain_line_falls_back_to_unspecified() {
        let details = extract_details("upset stomach with pain");
        let summary = build_summary(&details);
        assert!(summary.contains("- Pain type: unspecified"));
    }

    #[test]
    fn follow_ups_always_close_the_summary() {
        let details = extract_details("upset stomach with pain");
        let summary = build_summary(&details);
        assert!(summary.ends_with("- Is there any pain in your neck or shoulders?"));
    }
}
