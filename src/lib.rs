//! Medchat — terminal healthcare assistant chatbot.
//!
//! Each user submission runs through a fixed-priority chain of local
//! matchers (validation, greeting lookup, symptom detail extraction,
//! symptom keyword matching) and falls back to a single synchronous call
//! to Google's generative-language endpoint when nothing matches locally.

pub mod config;
pub mod gemini;
pub mod models;
pub mod pipeline;
pub mod session;
