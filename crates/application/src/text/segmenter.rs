//! Sentence segmenter - period split over normalized text
//!
//! Splits on `.` characters, trims each piece, and drops whitespace-only
//! segments. Normalization strips punctuation, so text that went through
//! the full pipeline segments into at most one sentence; the contract
//! stays general because callers may segment text that kept its periods.

use domain::{NormalizedText, Sentence};

/// Split normalized text into scoreable sentences
///
/// Order-preserving and total: empty input yields an empty sequence,
/// never an error. No empty sentences are ever emitted.
///
/// # Examples
///
/// ```
/// use application::{normalize, segment};
///
/// let sentences = segment(&normalize("Great movie. Bad ending."));
/// assert_eq!(sentences.len(), 1);
/// ```
pub fn segment(text: &NormalizedText) -> Vec<Sentence> {
    text.as_str().split('.').filter_map(Sentence::new).collect()
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn no_sentence_is_empty_or_untrimmed(input in ".*") {
            for sentence in segment(&NormalizedText::new(&input)) {
                prop_assert!(!sentence.as_str().is_empty());
                prop_assert_eq!(sentence.as_str(), sentence.as_str().trim());
            }
        }

        #[test]
        fn no_sentence_contains_a_period(input in ".*") {
            for sentence in segment(&NormalizedText::new(&input)) {
                prop_assert!(!sentence.as_str().contains('.'));
            }
        }

        #[test]
        fn sentence_count_is_bounded_by_period_count(input in ".*") {
            let periods = input.chars().filter(|c| *c == '.').count();
            let sentences = segment(&NormalizedText::new(&input));
            prop_assert!(sentences.len() <= periods + 1);
        }
    }
}
