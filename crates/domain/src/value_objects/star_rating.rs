//! Star rating value object
//!
//! The external classifier grades each sentence on a five-star scale and
//! reports it as a label such as `"4 stars"`. The rating is the leading
//! digit of that label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A per-sentence rating in the range 1-5, higher = more positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Lowest rating the classifier can assign
    pub const MIN: u8 = 1;
    /// Highest rating the classifier can assign
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1-5
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not in the 1-5 range.
    pub const fn try_new(value: u8) -> Result<Self, DomainError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidStarRating(value))
        }
    }

    /// Parse a rating from a classifier label like `"5 stars"` or `"1 star"`
    ///
    /// Only the leading character is inspected; labels that do not start
    /// with a digit in 1-5 yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::StarRating;
    ///
    /// assert_eq!(StarRating::from_classifier_label("5 stars").map(StarRating::value), Some(5));
    /// assert_eq!(StarRating::from_classifier_label("positive"), None);
    /// ```
    pub fn from_classifier_label(label: &str) -> Option<Self> {
        let digit = label.chars().next()?.to_digit(10)?;
        let value = u8::try_from(digit).ok()?;
        Self::try_new(value).ok()
    }

    /// Get the numeric rating
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for StarRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_in_range_are_accepted() {
        for value in 1..=5 {
            assert_eq!(StarRating::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert!(StarRating::try_new(0).is_err());
    }

    #[test]
    fn six_is_rejected() {
        assert!(StarRating::try_new(6).is_err());
    }

    #[test]
    fn label_with_leading_digit_parses() {
        assert_eq!(
            StarRating::from_classifier_label("5 stars").map(StarRating::value),
            Some(5)
        );
        assert_eq!(
            StarRating::from_classifier_label("1 star").map(StarRating::value),
            Some(1)
        );
        assert_eq!(
            StarRating::from_classifier_label("3 stars").map(StarRating::value),
            Some(3)
        );
    }

    #[test]
    fn label_without_leading_digit_is_rejected() {
        assert_eq!(StarRating::from_classifier_label("positive"), None);
        assert_eq!(StarRating::from_classifier_label(" 4 stars"), None);
        assert_eq!(StarRating::from_classifier_label(""), None);
    }

    #[test]
    fn label_with_out_of_range_digit_is_rejected() {
        assert_eq!(StarRating::from_classifier_label("0 stars"), None);
        assert_eq!(StarRating::from_classifier_label("9 stars"), None);
    }

    #[test]
    fn ratings_are_ordered() {
        let low = StarRating::try_new(1).unwrap();
        let high = StarRating::try_new(5).unwrap();
        assert!(low < high);
    }

    #[test]
    fn display_is_the_numeral() {
        assert_eq!(StarRating::try_new(4).unwrap().to_string(), "4");
    }

    #[test]
    fn serializes_as_bare_number() {
        let rating = StarRating::try_new(2).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn deserialization_enforces_range() {
        assert!(serde_json::from_str::<StarRating>("3").is_ok());
        assert!(serde_json::from_str::<StarRating>("0").is_err());
        assert!(serde_json::from_str::<StarRating>("6").is_err());
    }
}
