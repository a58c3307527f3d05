//! Data models and structures
//!
//! Defines the validated word query, the normalized dictionary entry
//! returned by the AI service, and application configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Placeholder substituted for any required field the upstream payload omits.
pub const FIELD_PLACEHOLDER: &str = "Information not available";

/// Longest word accepted from user input.
pub const MAX_WORD_LEN: usize = 50;

/// Rejection reasons for user-submitted words.
///
/// The `Display` text doubles as the flash message shown on the search form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordQueryError {
    #[error("Please enter a word to search for.")]
    Empty,

    #[error("Please enter a valid word (letters, hyphens, and apostrophes only).")]
    Invalid,
}

/// A validated word submitted by the user.
///
/// Holds the trimmed input after it passed the `^[A-Za-z\-']{1,50}$` check.
/// Created per request and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WordQuery(String);

impl WordQuery {
    /// Trim and validate raw user input.
    ///
    /// Whitespace-only input counts as empty. Anything outside letters,
    /// hyphens, and apostrophes (or longer than 50 characters) is rejected
    /// before it can reach the upstream API.
    pub fn parse(input: &str) -> std::result::Result<Self, WordQueryError> {
        let word = input.trim();
        if word.is_empty() {
            return Err(WordQueryError::Empty);
        }
        let valid = word.len() <= MAX_WORD_LEN
            && word
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'');
        if !valid {
            return Err(WordQueryError::Invalid);
        }
        Ok(Self(word.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalized dictionary entry for one word.
///
/// List fields are always populated sequences and required string fields are
/// never empty, so consumers never need to shape-check the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub part_of_speech: String,
    pub examples: Vec<String>,
    pub contextual_sentences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
}

impl WordDefinition {
    /// Normalize a decoded upstream payload into the fixed entry shape.
    ///
    /// Missing required fields get [`FIELD_PLACEHOLDER`]; scalar values in
    /// list positions are wrapped into single-element lists, so an absent
    /// list field comes back as `["Information not available"]`.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            definition: required_string(payload, "definition"),
            part_of_speech: required_string(payload, "part_of_speech"),
            examples: required_list(payload, "examples"),
            contextual_sentences: required_list(payload, "contextual_sentences"),
            pronunciation: optional_string(payload, "pronunciation"),
            etymology: optional_string(payload, "etymology"),
        }
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn required_string(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::Null) | None => FIELD_PLACEHOLDER.to_string(),
        Some(value) => value_to_string(value),
    }
}

fn optional_string(payload: &Value, key: &str) -> Option<String> {
    match payload.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value_to_string(value)),
    }
}

fn required_list(payload: &Value, key: &str) -> Vec<String> {
    match payload.get(key) {
        Some(Value::Array(items)) => items.iter().map(value_to_string).collect(),
        Some(Value::Null) | None => vec![FIELD_PLACEHOLDER.to_string()],
        Some(scalar) => vec![value_to_string(scalar)],
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        // An empty key behaves like an unset one.
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model =
            std::env::var("WORDWISE_MODEL").unwrap_or_else(|_| "gpt-5".to_string());

        let timeout_secs = match std::env::var("WORDWISE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                crate::Error::Generic(format!(
                    "WORDWISE_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            openai_api_key,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
