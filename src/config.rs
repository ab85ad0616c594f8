/// Application-level constants
pub const APP_NAME: &str = "Medchat";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the generative-language REST endpoint.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for all generation requests.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Request timeout for generation calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "medchat=info"
}
