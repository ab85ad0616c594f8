//! Per-session chat state — the transcript and the accumulated symptom
//! fact table.
//!
//! One `Session` is created when the shell starts and dropped when it
//! exits; every handler receives it explicitly. Nothing is shared across
//! sessions and nothing is persisted.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ChatMessage;

/// Keys under which the symptom detail extractor records facts.
///
/// Variant order is the fixed render order of the extraction summary,
/// and `BTreeMap` iteration relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKey {
    Duration,
    Kind,
    Symptoms,
    Pain,
    PainType,
}

impl FactKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Kind => "type",
            Self::Symptoms => "symptoms",
            Self::Pain => "pain",
            Self::PainType => "pain_type",
        }
    }
}

/// Extracted symptom facts, keyed uniquely; later extraction overwrites
/// earlier values for the same key.
pub type SymptomFacts = BTreeMap<FactKey, String>;

/// Owns the transcript and symptom facts for one chat session.
pub struct Session {
    pub id: Uuid,
    pub started_at: NaiveDateTime,
    transcript: Vec<ChatMessage>,
    facts: SymptomFacts,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().naive_local(),
            transcript: Vec::new(),
            facts: SymptomFacts::new(),
        }
    }

    /// Append the user's submission to the transcript.
    pub fn push_user(&mut self, content: &str) {
        self.transcript.push(ChatMessage::user(content));
    }

    /// Append a produced reply to the transcript.
    pub fn push_assistant(&mut self, content: &str) {
        self.transcript.push(ChatMessage::assistant(content));
    }

    /// The full transcript in insertion order (render order).
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The accumulated symptom facts.
    pub fn facts(&self) -> &SymptomFacts {
        &self.facts
    }

    /// Merge newly extracted facts, overwriting any existing key.
    /// Facts grow monotonically for the session; nothing clears them.
    pub fn merge_facts(&mut self, details: SymptomFacts) {
        self.facts.extend(details);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
