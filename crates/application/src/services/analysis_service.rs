//! Analysis service - the sentiment pipeline end to end
//!
//! Orchestrates normalize -> segment -> score -> aggregate -> record for
//! one user-submitted text. Exposes a synchronous entry point that
//! returns the result and a deferred one that queues the same pipeline
//! and returns an acknowledgment ticket.

use std::{fmt, sync::Arc, time::Instant};

use domain::{AnalysisResult, AnalysisTicket, HistoryEntry, Username};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ClassifierPort, HistoryStore, UserStore},
    services::sentence_scorer::SentenceScorer,
    text::{normalize, segment},
};

/// Service for analyzing texts and recording the outcomes
#[derive(Clone)]
pub struct AnalysisService {
    classifier: Arc<dyn ClassifierPort>,
    scorer: SentenceScorer,
    users: Arc<dyn UserStore>,
    history: Arc<dyn HistoryStore>,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService").finish_non_exhaustive()
    }
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(
        classifier: Arc<dyn ClassifierPort>,
        users: Arc<dyn UserStore>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            scorer: SentenceScorer::new(Arc::clone(&classifier)),
            classifier,
            users,
            history,
        }
    }

    /// Run the full pipeline for one text and wait for the result
    ///
    /// Rejects unknown users before any text processing. Sentences that
    /// fail to score are dropped from the aggregate; a text where nothing
    /// scored yields the `NotDetected` sentinel. Every outcome, sentinel
    /// included, is appended to the user's history before returning.
    #[instrument(skip(self, raw_text), fields(username = %username, text_len = raw_text.len()))]
    pub async fn analyze(
        &self,
        username: &Username,
        raw_text: &str,
    ) -> Result<AnalysisResult, ApplicationError> {
        let start = Instant::now();

        self.ensure_user_exists(username).await?;

        let cleaned = normalize(raw_text);
        let sentences = segment(&cleaned);

        let mut ratings = Vec::with_capacity(sentences.len());
        for sentence in &sentences {
            if let Some(rating) = self.scorer.score(sentence).await.rating() {
                ratings.push(rating);
            }
        }

        let result = AnalysisResult::from_ratings(raw_text, &ratings);
        let entry = HistoryEntry::new(username.clone(), &result);
        self.history.append(&entry).await?;

        let latency = start.elapsed().as_millis() as u64;

        debug!(
            sentences = sentences.len(),
            scored = ratings.len(),
            sentiment = %result.display_label(),
            confidence = result.confidence,
            latency_ms = latency,
            "Analysis completed"
        );

        Ok(result)
    }

    /// Queue the pipeline and return an acknowledgment immediately
    ///
    /// The unknown-user check still happens up front so the caller gets
    /// the same rejection as the synchronous path. The outcome itself is
    /// only observable through history; a failed background run is
    /// logged and otherwise dropped.
    #[instrument(skip(self, raw_text), fields(username = %username, text_len = raw_text.len()))]
    pub async fn enqueue_analysis(
        &self,
        username: &Username,
        raw_text: &str,
    ) -> Result<AnalysisTicket, ApplicationError> {
        self.ensure_user_exists(username).await?;

        let ticket = AnalysisTicket::new();
        let ticket_id = ticket.id;
        let service = self.clone();
        let username = username.clone();
        let raw_text = raw_text.to_string();

        tokio::spawn(async move {
            match service.analyze(&username, &raw_text).await {
                Ok(result) => debug!(
                    ticket_id = %ticket_id,
                    sentiment = %result.display_label(),
                    "Deferred analysis completed"
                ),
                Err(err) => warn!(
                    ticket_id = %ticket_id,
                    error = %err,
                    "Deferred analysis failed"
                ),
            }
        });

        debug!(ticket_id = %ticket.id, "Analysis queued");

        Ok(ticket)
    }

    /// All recorded analyses for a user, newest first
    ///
    /// Unknown users get an empty list, same as users with no records.
    #[instrument(skip(self), fields(username = %username))]
    pub async fn list_history(
        &self,
        username: &Username,
    ) -> Result<Vec<HistoryEntry>, ApplicationError> {
        self.history.list_by_user(username).await
    }

    /// Check if the underlying classifier is reachable
    pub async fn is_healthy(&self) -> bool {
        self.classifier.is_healthy().await
    }

    /// Name of the classifier model behind the pipeline
    pub fn classifier_model(&self) -> String {
        self.classifier.model()
    }

    async fn ensure_user_exists(&self, username: &Username) -> Result<(), ApplicationError> {
        if self.users.exists(username).await? {
            Ok(())
        } else {
            Err(ApplicationError::UserNotFound(username.to_string()))
        }
    }
}
