use std::collections::HashMap;

use proptest::prelude::*;
use voice_agent_config::config::env;
use voice_agent_config::{AgentConfig, ConfigError};

fn lookup(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
    move |var: &str| vars.get(var).cloned()
}

fn full_environment() -> HashMap<&'static str, String> {
    HashMap::from([
        (env::LIVEKIT_URL, "wss://agent.example.com".to_string()),
        (env::LIVEKIT_API_KEY, "APIkey123".to_string()),
        (env::LIVEKIT_API_SECRET, "s3cr3t".to_string()),
        (env::IGNORED_WORDS, "uh, like ,you know".to_string()),
        (env::CONFIDENCE_THRESHOLD, "0.65".to_string()),
        (env::ENABLE_DYNAMIC_UPDATES, "true".to_string()),
        (env::MIN_INTERRUPTION_DURATION, "0.5".to_string()),
        (env::FALSE_INTERRUPTION_TIMEOUT, "2".to_string()),
        (env::RESUME_FALSE_INTERRUPTION, "False".to_string()),
    ])
}

#[test]
fn test_full_environment_loads_and_validates() {
    let config = AgentConfig::from_lookup(lookup(full_environment())).unwrap();
    config.validate().unwrap();

    assert_eq!(config.connection_url(), "wss://agent.example.com");
    assert_eq!(config.connection_api_key(), "APIkey123");
    assert_eq!(config.connection_api_secret(), "s3cr3t");
    assert_eq!(config.ignored_words(), ["uh", "like", "you know"]);
    assert_eq!(config.confidence_threshold(), 0.65);
    assert!(config.enable_dynamic_updates());
    assert_eq!(config.min_interruption_duration(), 0.5);
    assert_eq!(config.false_interruption_timeout(), 2.0);
    assert!(!config.resume_false_interruption());
}

#[test]
fn test_parse_error_stops_loading_before_validation() {
    let mut vars = full_environment();
    vars.remove(env::LIVEKIT_API_KEY);
    vars.insert(env::MIN_INTERRUPTION_DURATION, "0.3s".to_string());

    match AgentConfig::from_lookup(lookup(vars)) {
        Err(ConfigError::Parse { var, value, .. }) => {
            assert_eq!(var, env::MIN_INTERRUPTION_DURATION);
            assert_eq!(value, "0.3s");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_validation_error_names_field() {
    let mut vars = full_environment();
    vars.insert(env::CONFIDENCE_THRESHOLD, "1.5".to_string());

    let config = AgentConfig::from_lookup(lookup(vars)).unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), env::CONFIDENCE_THRESHOLD);
    assert!(err.to_string().contains("CONFIDENCE_THRESHOLD"));
}

#[test]
fn test_json_dump_hides_secret() {
    let config = AgentConfig::from_lookup(lookup(full_environment())).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("s3cr3t"));
    assert!(json.contains("APIkey123"));
}

proptest! {
    #[test]
    fn prop_ignored_words_keep_trimmed_tokens_in_order(tokens in proptest::collection::vec("[ a-z]{0,6}", 0..8)) {
        let raw = tokens.join(",");
        let expected: Vec<String> = tokens.iter().map(|t| t.trim().to_string()).filter(|t| !t.is_empty()).collect();

        let mut vars = HashMap::new();
        vars.insert(env::IGNORED_WORDS, raw);
        let config = AgentConfig::from_lookup(lookup(vars)).unwrap();

        prop_assert_eq!(config.ignored_words(), expected.as_slice());
    }
}
