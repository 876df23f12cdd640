//! Core types: interaction record and normalized user key.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Timestamp layout for new records: local time, microsecond precision, no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One stored question/answer exchange. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// ISO-8601 creation time.
    pub timestamp: String,
    pub question: String,
    /// Model reply, or the error text produced by the conversation client.
    pub answer: String,
    /// Lowercase sentiment label.
    pub sentiment: String,
    /// Reserved for topic extraction; always empty for records created here.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl InteractionRecord {
    /// Creates a record stamped with the current local time and no topics.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        sentiment: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            question: question.into(),
            answer: answer.into(),
            sentiment: sentiment.into().to_lowercase(),
            topics: Vec::new(),
        }
    }

    /// Date part of the timestamp (everything before `T`).
    pub fn date(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map(|(date, _)| date)
            .unwrap_or(&self.timestamp)
    }
}

/// Normalized username: trimmed and lowercased. `"Alice "` and `"alice"` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserKey(String);

impl UserKey {
    /// Normalizes `raw` into a storage key.
    ///
    /// Rejects empty names and names that cannot be used as a single path segment
    /// (separators, control characters, `.` and `..`).
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            return Err(CoreError::EmptyUsername);
        }
        if key == "."
            || key == ".."
            || key.chars().any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(CoreError::InvalidUsername(raw.trim().to_string()));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Title-cases each whitespace-separated word of the trimmed name, for greetings.
pub fn display_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
