//! Value Objects - Immutable, identity-less domain primitives

mod normalized_text;
mod sentence;
mod sentiment;
mod star_rating;
mod username;

pub use normalized_text::NormalizedText;
pub use sentence::Sentence;
pub use sentiment::{Sentiment, SentimentBucket};
pub use star_rating::StarRating;
pub use username::Username;
