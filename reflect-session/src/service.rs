//! The reflection pipeline.

use std::sync::Arc;

use llm_client::ConversationClient;
use memory::{summarize_user_patterns, UserProfile, DEFAULT_SENTIMENT};
use reflect_core::{InteractionRecord, UserKey};
use sentiment::SentimentClassifier;
use storage::HistoryStore;
use tracing::{debug, error, info, instrument, warn};

use crate::{Session, SessionError};

/// Shared services for every session: history store, sentiment classifier and the
/// conversation client.
#[derive(Clone)]
pub struct JournalService {
    store: Arc<dyn HistoryStore>,
    classifier: Arc<dyn SentimentClassifier>,
    conversation: ConversationClient,
}

impl JournalService {
    pub fn new(
        store: Arc<dyn HistoryStore>,
        classifier: Arc<dyn SentimentClassifier>,
        conversation: ConversationClient,
    ) -> Self {
        Self {
            store,
            classifier,
            conversation,
        }
    }

    /// Context summary over the user's full stored history.
    #[instrument(skip(self, user), fields(user = %user))]
    pub async fn profile(&self, user: &UserKey) -> Result<UserProfile, SessionError> {
        let history = self.store.load(user).await.map_err(SessionError::Load)?;
        Ok(summarize_user_patterns(&history))
    }

    /// The last `n` stored records, newest first.
    #[instrument(skip(self, user), fields(user = %user))]
    pub async fn recent_reflections(
        &self,
        user: &UserKey,
        n: usize,
    ) -> Result<Vec<InteractionRecord>, SessionError> {
        let history = self.store.load(user).await.map_err(SessionError::Load)?;
        Ok(history.into_iter().rev().take(n).collect())
    }

    /// Handles one reflection: classify, summarize history, ask the model, record the turn.
    ///
    /// `query` is stored and sent exactly as given; whitespace-only input is rejected.
    /// The returned record is already in `session`'s transcript. On
    /// [`SessionError::Persist`] it is still in the transcript and is carried inside the error
    /// so the caller can render the answer.
    #[instrument(skip(self, session, query), fields(user = %session.user(), backend = self.store.backend()))]
    pub async fn reflect(
        &self,
        session: &mut Session,
        query: &str,
    ) -> Result<InteractionRecord, SessionError> {
        if query.trim().is_empty() {
            return Err(SessionError::EmptyQuery);
        }

        let history = self
            .store
            .load(session.user())
            .await
            .map_err(SessionError::Load)?;
        debug!(history_len = history.len(), "Loaded stored history");

        let sentiment = match self.classifier.classify(query).await {
            Ok(label) => label,
            Err(e) => {
                warn!(error = %e, "Sentiment classification failed, using {}", DEFAULT_SENTIMENT);
                DEFAULT_SENTIMENT.to_string()
            }
        };

        let context = summarize_user_patterns(&history).summary();
        let answer = self
            .conversation
            .ask(&context, query, session.transcript())
            .await;

        let record = InteractionRecord::new(query, answer, sentiment);
        session.push(record.clone());

        if let Err(source) = self.store.append(session.user(), &record).await {
            error!(error = %source, "Failed to save interaction");
            return Err(SessionError::Persist {
                record: Box::new(record),
                source,
            });
        }

        info!(
            sentiment = %record.sentiment,
            transcript_len = session.transcript().len(),
            "Reflection recorded"
        );
        Ok(record)
    }
}
