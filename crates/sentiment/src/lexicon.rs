//! Offline word-list classifier.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::SentimentClassifier;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "better", "calm", "confident", "content", "excited", "glad", "good", "grateful",
    "great", "happy", "hopeful", "joy", "love", "loved", "nice", "peaceful", "proud",
    "relaxed", "relieved", "thankful", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "afraid", "angry", "annoyed", "anxious", "awful", "bad", "depressed", "disappointed",
    "exhausted", "frustrated", "hate", "hurt", "lonely", "miserable", "nervous", "sad",
    "scared", "stressed", "terrible", "tired", "upset", "worried", "worse",
];

/// Words that flip the polarity of the word right after them.
const NEGATIONS: &[&str] = &["not", "no", "never", "don't", "didn't", "isn't", "wasn't", "can't"];

/// Counts positive and negative word hits and compares them.
///
/// A hit directly preceded by a negation counts for the opposite side ("not happy").
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    /// Synchronous core of [`SentimentClassifier::classify`].
    pub fn label(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
            .collect();

        let mut score: i32 = 0;
        for (i, word) in words.iter().enumerate() {
            let polarity = if self.positive.contains(*word) {
                1
            } else if self.negative.contains(*word) {
                -1
            } else {
                continue;
            };
            let negated = i > 0 && NEGATIONS.contains(&words[i - 1]);
            score += if negated { -polarity } else { polarity };
        }

        match score.cmp(&0) {
            std::cmp::Ordering::Greater => "positive",
            std::cmp::Ordering::Less => "negative",
            std::cmp::Ordering::Equal => "neutral",
        }
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<String, anyhow::Error> {
        Ok(self.label(text).to_string())
    }
}
