//! User profile derived from history: dominant sentiment and frequent topics.

use std::collections::HashSet;
use std::fmt;

use reflect_core::InteractionRecord;
use serde::Serialize;
use tracing::debug;

/// Sentiment reported when the user has no history yet.
pub const DEFAULT_SENTIMENT: &str = "neutral";

/// Maximum number of topics mentioned in the summary.
pub const MAX_TOPICS: usize = 3;

/// Derived profile; recomputed from the full history on each load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub dominant_sentiment: String,
    /// At most [`MAX_TOPICS`] distinct topics, in first-seen order.
    pub frequent_topics: Vec<String>,
    /// Number of records the profile was computed from.
    pub record_count: usize,
}

impl UserProfile {
    /// Sentence used as personal context in the system prompt.
    pub fn summary(&self) -> String {
        format!(
            "User tends to be {} and often talks about: {}.",
            self.dominant_sentiment,
            self.frequent_topics.join(", ")
        )
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            dominant_sentiment: DEFAULT_SENTIMENT.to_string(),
            frequent_topics: Vec::new(),
            record_count: 0,
        }
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Summarizes `history` into a [`UserProfile`].
///
/// The dominant sentiment is the label with the highest count; ties go to the label seen first.
/// Topics are the distinct entries of all records' topic lists in first-seen order, capped at
/// [`MAX_TOPICS`].
pub fn summarize_user_patterns(history: &[InteractionRecord]) -> UserProfile {
    if history.is_empty() {
        return UserProfile::default();
    }

    // (label, count) in first-seen order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in history {
        match counts.iter_mut().find(|(label, _)| *label == record.sentiment) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.sentiment.as_str(), 1)),
        }
    }

    let mut dominant = DEFAULT_SENTIMENT;
    let mut best = 0;
    for &(label, count) in &counts {
        if count > best {
            dominant = label;
            best = count;
        }
    }

    let mut seen = HashSet::new();
    let frequent_topics: Vec<String> = history
        .iter()
        .flat_map(|r| r.topics.iter())
        .filter(|t| seen.insert(t.as_str()))
        .take(MAX_TOPICS)
        .cloned()
        .collect();

    debug!(
        records = history.len(),
        dominant_sentiment = %dominant,
        topic_count = frequent_topics.len(),
        "Summarized user patterns"
    );

    UserProfile {
        dominant_sentiment: dominant.to_string(),
        frequent_topics,
        record_count: history.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_sentiment(sentiment: &str) -> InteractionRecord {
        InteractionRecord::new("q", "a", sentiment)
    }

    fn with_topics(topics: &[&str]) -> InteractionRecord {
        let mut record = InteractionRecord::new("q", "a", "neutral");
        record.topics = topics.iter().map(|t| t.to_string()).collect();
        record
    }

    #[test]
    fn test_empty_history_is_neutral_without_topics() {
        let profile = summarize_user_patterns(&[]);
        assert_eq!(profile.dominant_sentiment, "neutral");
        assert!(profile.frequent_topics.is_empty());
        assert_eq!(profile.record_count, 0);
        assert_eq!(
            profile.summary(),
            "User tends to be neutral and often talks about: ."
        );
    }

    #[test]
    fn test_most_frequent_sentiment_wins() {
        let history = vec![
            with_sentiment("positive"),
            with_sentiment("positive"),
            with_sentiment("negative"),
        ];
        assert_eq!(summarize_user_patterns(&history).dominant_sentiment, "positive");
    }

    #[test]
    fn test_minority_first_does_not_win() {
        let history = vec![
            with_sentiment("negative"),
            with_sentiment("positive"),
            with_sentiment("positive"),
        ];
        assert_eq!(summarize_user_patterns(&history).dominant_sentiment, "positive");
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let history = vec![
            with_sentiment("negative"),
            with_sentiment("positive"),
            with_sentiment("positive"),
            with_sentiment("negative"),
        ];
        assert_eq!(summarize_user_patterns(&history).dominant_sentiment, "negative");
    }

    #[test]
    fn test_topics_are_distinct_first_seen_and_capped() {
        let history = vec![
            with_topics(&["work", "sleep"]),
            with_topics(&["work", "family"]),
            with_topics(&["travel", "sleep"]),
        ];
        let profile = summarize_user_patterns(&history);
        assert_eq!(profile.frequent_topics, vec!["work", "sleep", "family"]);
        assert_eq!(
            profile.summary(),
            "User tends to be neutral and often talks about: work, sleep, family."
        );
    }

    #[test]
    fn test_display_matches_summary() {
        let profile = summarize_user_patterns(&[with_sentiment("positive")]);
        assert_eq!(profile.to_string(), profile.summary());
        assert_eq!(profile.record_count, 1);
    }
}
