//! Per-sentence scoring against the classifier port

use std::{fmt, sync::Arc};

use domain::{Sentence, StarRating};
use tracing::{debug, instrument, warn};

use crate::ports::ClassifierPort;

/// Outcome of scoring one sentence
///
/// A failed call or an unparseable label skips the sentence instead of
/// failing the whole analysis; the aggregate is built from the scored
/// subset only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceScore {
    /// The classifier returned a label with a parseable star rating
    Scored(StarRating),
    /// The call failed or the label carried no rating
    Skipped { reason: String },
}

impl SentenceScore {
    /// The rating, if the sentence was scored
    pub const fn rating(&self) -> Option<StarRating> {
        match self {
            Self::Scored(rating) => Some(*rating),
            Self::Skipped { .. } => None,
        }
    }
}

/// Scores sentences one at a time through the classifier port
#[derive(Clone)]
pub struct SentenceScorer {
    classifier: Arc<dyn ClassifierPort>,
}

impl fmt::Debug for SentenceScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceScorer").finish_non_exhaustive()
    }
}

impl SentenceScorer {
    /// Create a new sentence scorer
    pub fn new(classifier: Arc<dyn ClassifierPort>) -> Self {
        Self { classifier }
    }

    /// Score a single sentence, never failing the caller
    ///
    /// No retry: a failure is final for this sentence in this analysis.
    #[instrument(skip(self, sentence), fields(sentence_chars = sentence.char_count()))]
    pub async fn score(&self, sentence: &Sentence) -> SentenceScore {
        match self.classifier.classify(sentence.as_str()).await {
            Ok(classification) => {
                StarRating::from_classifier_label(&classification.label).map_or_else(
                    || {
                        warn!(
                            label = %classification.label,
                            "Classifier label carries no star rating, sentence skipped"
                        );
                        SentenceScore::Skipped {
                            reason: format!("unparseable label: {}", classification.label),
                        }
                    },
                    |rating| {
                        debug!(
                            label = %classification.label,
                            score = classification.score,
                            rating = rating.value(),
                            "Sentence scored"
                        );
                        SentenceScore::Scored(rating)
                    },
                )
            },
            Err(err) => {
                warn!(error = %err, "Classifier call failed, sentence skipped");
                SentenceScore::Skipped {
                    reason: err.to_string(),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ApplicationError,
        ports::{MockClassifierPort, SentenceClassification},
    };

    fn sentence(text: &str) -> Sentence {
        Sentence::new(text).unwrap()
    }

    fn classification(label: &str, score: f64) -> SentenceClassification {
        SentenceClassification {
            label: label.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn parseable_label_yields_rating() {
        let mut mock = MockClassifierPort::new();
        mock.expect_classify()
            .returning(|_| Ok(classification("5 stars", 0.92)));

        let scorer = SentenceScorer::new(Arc::new(mock));
        let score = scorer.score(&sentence("me encanta")).await;

        assert_eq!(score.rating().map(StarRating::value), Some(5));
    }

    #[tokio::test]
    async fn singular_star_label_parses_too() {
        let mut mock = MockClassifierPort::new();
        mock.expect_classify()
            .returning(|_| Ok(classification("1 star", 0.88)));

        let scorer = SentenceScorer::new(Arc::new(mock));
        let score = scorer.score(&sentence("pésimo servicio")).await;

        assert_eq!(score.rating().map(StarRating::value), Some(1));
    }

    #[tokio::test]
    async fn unparseable_label_skips_the_sentence() {
        let mut mock = MockClassifierPort::new();
        mock.expect_classify()
            .returning(|_| Ok(classification("POSITIVE", 0.99)));

        let scorer = SentenceScorer::new(Arc::new(mock));
        let score = scorer.score(&sentence("great stuff")).await;

        assert_eq!(score.rating(), None);
        assert!(matches!(
            score,
            SentenceScore::Skipped { reason } if reason.contains("POSITIVE")
        ));
    }

    #[tokio::test]
    async fn classifier_failure_skips_the_sentence() {
        let mut mock = MockClassifierPort::new();
        mock.expect_classify()
            .returning(|_| Err(ApplicationError::Classification("timeout".to_string())));

        let scorer = SentenceScorer::new(Arc::new(mock));
        let score = scorer.score(&sentence("buen producto")).await;

        assert!(matches!(
            score,
            SentenceScore::Skipped { reason } if reason.contains("timeout")
        ));
    }

    #[tokio::test]
    async fn sentence_text_reaches_the_classifier_verbatim() {
        let mut mock = MockClassifierPort::new();
        mock.expect_classify()
            .with(mockall::predicate::eq("excelente película"))
            .returning(|_| Ok(classification("4 stars", 0.7)));

        let scorer = SentenceScorer::new(Arc::new(mock));
        let score = scorer.score(&sentence("excelente película")).await;

        assert_eq!(score.rating().map(StarRating::value), Some(4));
    }

    #[test]
    fn debug_does_not_expose_the_port() {
        let scorer = SentenceScorer::new(Arc::new(MockClassifierPort::new()));
        let debug = format!("{scorer:?}");
        assert!(debug.contains("SentenceScorer"));
    }
}
