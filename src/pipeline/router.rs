//! Fixed-priority dispatch for one chat turn.
//!
//! Local matchers form an explicit ordered list behind a common
//! try-match capability; the first one that produces a reply wins and
//! the remote fallback only runs when every matcher declines. The
//! image-intent path is evaluated independently of the primary
//! outcome, after it.

use super::{extract, greeting, image, prompt, symptoms, validate, ChatError};
use crate::gemini::GenerateReply;
use crate::session::Session;

/// Where a turn's primary reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Greeting,
    SymptomSummary,
    ClarifyingQuestion,
    Remote,
}

/// Outcome of one matcher attempt.
pub enum MatchOutcome {
    /// The matcher produced the turn's reply.
    Reply { text: String, source: ReplySource },
    /// The matcher declined; try the next one.
    NoMatch,
}

/// Common capability for local matchers, tried in fixed priority order.
pub trait Matcher {
    fn name(&self) -> &'static str;
    fn try_match(&self, input: &str, session: &mut Session) -> MatchOutcome;
}

struct GreetingMatcher;

impl Matcher for GreetingMatcher {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn try_match(&self, input: &str, _session: &mut Session) -> MatchOutcome {
        match greeting::match_greeting(input) {
            Some(reply) => MatchOutcome::Reply {
                text: reply.to_string(),
                source: ReplySource::Greeting,
            },
            None => MatchOutcome::NoMatch,
        }
    }
}

struct DetailExtractor;

impl Matcher for DetailExtractor {
    fn name(&self) -> &'static str {
        "symptom_details"
    }

    fn try_match(&self, input: &str, session: &mut Session) -> MatchOutcome {
        let details = extract::extract_details(input);
        if details.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let summary = extract::build_summary(&details);
        session.merge_facts(details);
        MatchOutcome::Reply {
            text: summary,
            source: ReplySource::SymptomSummary,
        }
    }
}

struct SymptomMatcher;

impl Matcher for SymptomMatcher {
    fn name(&self) -> &'static str {
        "symptom_keywords"
    }

    fn try_match(&self, input: &str, _session: &mut Session) -> MatchOutcome {
        match symptoms::match_symptom(input) {
            Some(question) => MatchOutcome::Reply {
                text: question.to_string(),
                source: ReplySource::ClarifyingQuestion,
            },
            None => MatchOutcome::NoMatch,
        }
    }
}

/// Primary reply for a turn.
#[derive(Debug)]
pub struct RoutedReply {
    pub text: String,
    pub source: ReplySource,
}

/// Everything one turn produced: the primary result, plus the image
/// attempt when image intent matched.
#[derive(Debug)]
pub struct TurnOutcome {
    pub reply: Result<RoutedReply, ChatError>,
    pub image: Option<Result<String, ChatError>>,
}

/// Runs the fixed-priority dispatch for each user submission.
pub struct ChatRouter<G: GenerateReply> {
    generator: G,
    matchers: Vec<Box<dyn Matcher>>,
}

impl<G: GenerateReply> ChatRouter<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            matchers: vec![
                Box::new(GreetingMatcher),
                Box::new(DetailExtractor),
                Box::new(SymptomMatcher),
            ],
        }
    }

    /// Run one turn against the session.
    ///
    /// A validation failure stops the turn before anything is appended.
    /// A failed remote fallback surfaces its error without appending an
    /// assistant message; the image attempt still runs either way.
    pub fn run_turn(&self, session: &mut Session, input: &str) -> Result<TurnOutcome, ChatError> {
        validate::validate_input(input)?;

        session.push_user(input);

        let reply = self.primary_reply(session, input);

        let image = if image::is_image_query(input) {
            tracing::debug!("image intent detected");
            Some(image::fetch_image_locator(&self.generator, input))
        } else {
            None
        };

        Ok(TurnOutcome { reply, image })
    }

    fn primary_reply(&self, session: &mut Session, input: &str) -> Result<RoutedReply, ChatError> {
        for matcher in &self.matchers {
            if let MatchOutcome::Reply { text, source } = matcher.try_match(input, session) {
                tracing::info!(matcher = matcher.name(), "local matcher produced the reply");
                session.push_assistant(&text);
                return Ok(RoutedReply { text, source });
            }
        }

        tracing::info!("no local match, falling back to remote generation");
        let text = self.generator.generate(&prompt::primary_fragments(input))?;
        session.push_assistant(&text);
        Ok(RoutedReply {
            text,
            source: ReplySource::Remote,
        })
    }
}
