//! Agent configuration loaded from environment variables.

use std::env::VarError;
use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use super::env::{self, EnvReader};
use super::error::ConfigError;

/// Placeholder shown instead of a configured secret.
const REDACTED: &str = "***";

/// Voice agent configuration.
///
/// Built once at startup and read-only afterwards. Use [`AgentConfig::load`] to get a
/// record that has already passed [`AgentConfig::validate`].
#[derive(Clone, PartialEq, Serialize)]
pub struct AgentConfig {
    // Connection settings
    connection_url: String,
    connection_api_key: String,
    #[serde(serialize_with = "serialize_redacted")]
    connection_api_secret: String,

    // Interruption handling
    ignored_words: Vec<String>,
    confidence_threshold: f64,
    enable_dynamic_updates: bool,

    // Agent behavior (seconds)
    min_interruption_duration: f64,
    false_interruption_timeout: f64,
    resume_false_interruption: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            connection_url: env::DEFAULT_URL.to_string(),
            connection_api_key: String::new(),
            connection_api_secret: String::new(),
            ignored_words: env::parse_word_list(env::DEFAULT_IGNORED_WORDS),
            confidence_threshold: env::DEFAULT_CONFIDENCE_THRESHOLD,
            enable_dynamic_updates: env::DEFAULT_ENABLE_DYNAMIC_UPDATES,
            min_interruption_duration: env::DEFAULT_MIN_INTERRUPTION_DURATION,
            false_interruption_timeout: env::DEFAULT_FALSE_INTERRUPTION_TIMEOUT,
            resume_false_interruption: env::DEFAULT_RESUME_FALSE_INTERRUPTION,
        }
    }
}

impl AgentConfig {
    /// Load from the process environment and validate.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for a malformed number and
    /// [`ConfigError::Validation`] for the first violated constraint.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Read the configuration from the process environment without validating it.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| process_value(var, std::env::var(var)))
    }

    /// Read the configuration through an injected variable lookup.
    ///
    /// Absent variables take their defaults. Numbers are parsed strictly, flags leniently
    /// (anything but a case-insensitive `"true"` is `false`).
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] if a numeric variable is present but not a float.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reader = EnvReader::new(lookup);

        Ok(Self {
            connection_url: reader.string(env::LIVEKIT_URL, env::DEFAULT_URL),
            connection_api_key: reader.string(env::LIVEKIT_API_KEY, ""),
            connection_api_secret: reader.string(env::LIVEKIT_API_SECRET, ""),
            ignored_words: reader.words(env::IGNORED_WORDS, env::DEFAULT_IGNORED_WORDS),
            confidence_threshold: reader.number(env::CONFIDENCE_THRESHOLD, env::DEFAULT_CONFIDENCE_THRESHOLD)?,
            enable_dynamic_updates: reader.flag(env::ENABLE_DYNAMIC_UPDATES, env::DEFAULT_ENABLE_DYNAMIC_UPDATES),
            min_interruption_duration: reader.number(env::MIN_INTERRUPTION_DURATION, env::DEFAULT_MIN_INTERRUPTION_DURATION)?,
            false_interruption_timeout: reader.number(env::FALSE_INTERRUPTION_TIMEOUT, env::DEFAULT_FALSE_INTERRUPTION_TIMEOUT)?,
            resume_false_interruption: reader.flag(env::RESUME_FALSE_INTERRUPTION, env::DEFAULT_RESUME_FALSE_INTERRUPTION),
        })
    }

    /// Validate the configuration, stopping at the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connection_url.is_empty() {
            return Err(ConfigError::validation(env::LIVEKIT_URL, "LIVEKIT_URL is required"));
        }
        if self.connection_api_key.is_empty() {
            return Err(ConfigError::validation(env::LIVEKIT_API_KEY, "LIVEKIT_API_KEY is required"));
        }
        if self.connection_api_secret.is_empty() {
            return Err(ConfigError::validation(env::LIVEKIT_API_SECRET, "LIVEKIT_API_SECRET is required"));
        }

        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::validation(
                env::CONFIDENCE_THRESHOLD,
                format!("CONFIDENCE_THRESHOLD must be between 0.0 and 1.0, got {}", self.confidence_threshold),
            ));
        }

        check_seconds(env::MIN_INTERRUPTION_DURATION, self.min_interruption_duration)?;
        check_seconds(env::FALSE_INTERRUPTION_TIMEOUT, self.false_interruption_timeout)?;

        Ok(())
    }

    /// Media server endpoint.
    pub fn connection_url(&self) -> &str {
        &self.connection_url
    }

    /// API key identifying the agent to the media server.
    pub fn connection_api_key(&self) -> &str {
        &self.connection_api_key
    }

    /// API secret paired with the key. Never logged.
    pub fn connection_api_secret(&self) -> &str {
        &self.connection_api_secret
    }

    /// Filler words, trimmed and in configured order.
    pub fn ignored_words(&self) -> &[String] {
        &self.ignored_words
    }

    /// Minimum transcription confidence, in [0.0, 1.0].
    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Whether the ignored word list may change at runtime.
    pub fn enable_dynamic_updates(&self) -> bool {
        self.enable_dynamic_updates
    }

    /// Minimum interruption duration in seconds.
    pub fn min_interruption_duration(&self) -> f64 {
        self.min_interruption_duration
    }

    /// False interruption timeout in seconds.
    pub fn false_interruption_timeout(&self) -> f64 {
        self.false_interruption_timeout
    }

    /// Whether speech resumes after a false interruption.
    pub fn resume_false_interruption(&self) -> bool {
        self.resume_false_interruption
    }

    /// Minimum interruption duration as a [`Duration`].
    ///
    /// Values too large for a [`Duration`] (including infinity) saturate to
    /// [`Duration::MAX`]. Negative and NaN values, which only an unvalidated record can
    /// hold, map to zero.
    pub fn min_interruption(&self) -> Duration {
        to_duration(self.min_interruption_duration)
    }

    /// False interruption timeout as a [`Duration`].
    pub fn false_interruption(&self) -> Duration {
        to_duration(self.false_interruption_timeout)
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  LiveKit URL: {}", self.connection_url);
        info!("  LiveKit API key: {}", self.connection_api_key);
        info!("  LiveKit API secret: {}", redact(&self.connection_api_secret));
        info!("  Ignored words: {}", self.ignored_words.join(", "));
        info!("  Confidence threshold: {}", self.confidence_threshold);
        info!("  Dynamic updates: {}", self.enable_dynamic_updates);
        info!("  Min interruption duration: {:?}", self.min_interruption());
        info!("  False interruption timeout: {:?}", self.false_interruption());
        info!("  Resume after false interruption: {}", self.resume_false_interruption);
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("connection_url", &self.connection_url)
            .field("connection_api_key", &self.connection_api_key)
            .field("connection_api_secret", &redact(&self.connection_api_secret))
            .field("ignored_words", &self.ignored_words)
            .field("confidence_threshold", &self.confidence_threshold)
            .field("enable_dynamic_updates", &self.enable_dynamic_updates)
            .field("min_interruption_duration", &self.min_interruption_duration)
            .field("false_interruption_timeout", &self.false_interruption_timeout)
            .field("resume_false_interruption", &self.resume_false_interruption)
            .finish()
    }
}

/// Durations must be non-negative. Infinity is allowed, NaN is not.
fn check_seconds(var: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::validation(var, format!("{} must be non-negative, got {}", var, value)))
    }
}

fn to_duration(seconds: f64) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

/// A variable that is set but not valid unicode is treated as unset.
fn process_value(var: &str, value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            warn!("{} is not valid unicode, using default", var);
            None
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { REDACTED }
}

fn serialize_redacted<S: Serializer>(secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(redact(secret))
}
