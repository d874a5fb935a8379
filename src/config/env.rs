//! Environment variable names, defaults and value parsers.

use tracing::debug;

use super::error::ConfigError;

/// Connection endpoint of the media server.
pub const LIVEKIT_URL: &str = "LIVEKIT_URL";
/// Connection credential (identifier).
pub const LIVEKIT_API_KEY: &str = "LIVEKIT_API_KEY";
/// Connection credential (secret).
pub const LIVEKIT_API_SECRET: &str = "LIVEKIT_API_SECRET";
/// Comma-separated filler words that never count as an interruption.
pub const IGNORED_WORDS: &str = "IGNORED_WORDS";
/// Minimum transcription confidence (0.0 - 1.0).
pub const CONFIDENCE_THRESHOLD: &str = "CONFIDENCE_THRESHOLD";
/// Allow the ignored word list to be changed at runtime.
pub const ENABLE_DYNAMIC_UPDATES: &str = "ENABLE_DYNAMIC_UPDATES";
/// Minimum speech duration in seconds before it counts as an interruption.
pub const MIN_INTERRUPTION_DURATION: &str = "MIN_INTERRUPTION_DURATION";
/// Seconds to wait before declaring an interruption false.
pub const FALSE_INTERRUPTION_TIMEOUT: &str = "FALSE_INTERRUPTION_TIMEOUT";
/// Resume the agent's speech after a false interruption.
pub const RESUME_FALSE_INTERRUPTION: &str = "RESUME_FALSE_INTERRUPTION";

pub(crate) const DEFAULT_URL: &str = "ws://localhost:7880";
pub(crate) const DEFAULT_IGNORED_WORDS: &str = "uh,umm,hmm,haan,um,er,ah";
pub(crate) const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub(crate) const DEFAULT_ENABLE_DYNAMIC_UPDATES: bool = false;
pub(crate) const DEFAULT_MIN_INTERRUPTION_DURATION: f64 = 0.3;
pub(crate) const DEFAULT_FALSE_INTERRUPTION_TIMEOUT: f64 = 1.5;
pub(crate) const DEFAULT_RESUME_FALSE_INTERRUPTION: bool = true;

/// Split a comma-separated list, trimming each token and dropping empty ones.
///
/// Order is preserved and duplicates are kept.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|word| !word.is_empty()).map(str::to_string).collect()
}

/// Lenient flag parsing: only a case-insensitive `"true"` is true.
pub fn parse_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Parse a float value, attaching the variable name to any failure.
///
/// Surrounding whitespace is ignored and a single `_` between two digits is accepted
/// as a separator (`1_000`). An empty value is an error.
pub fn parse_number(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    strip_digit_separators(raw.trim())
        .parse::<f64>()
        .map_err(|source| ConfigError::Parse { var, value: raw.to_string(), source })
}

/// Drop underscores that sit between two ASCII digits; any other `_` is kept so the
/// parse fails.
fn strip_digit_separators(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit();
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Typed reads over an injected variable lookup.
pub(crate) struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn raw(&self, var: &'static str) -> Option<String> {
        let value = (self.lookup)(var);
        if value.is_none() {
            debug!("{} not set, using default", var);
        }
        value
    }

    pub(crate) fn string(&self, var: &'static str, default: &str) -> String {
        self.raw(var).unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn words(&self, var: &'static str, default: &str) -> Vec<String> {
        match self.raw(var) {
            Some(raw) => parse_word_list(&raw),
            None => parse_word_list(default),
        }
    }

    pub(crate) fn flag(&self, var: &'static str, default: bool) -> bool {
        self.raw(var).map_or(default, |raw| parse_flag(&raw))
    }

    pub(crate) fn number(&self, var: &'static str, default: f64) -> Result<f64, ConfigError> {
        match self.raw(var) {
            Some(raw) => parse_number(var, &raw),
            None => Ok(default),
        }
    }
}
