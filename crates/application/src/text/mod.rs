//! Text pipeline - cleaning and sentence segmentation
//!
//! Everything here is pure computation: no I/O, no await points, total
//! over arbitrary input strings.

mod normalizer;
mod segmenter;
mod stopwords;

pub use normalizer::normalize;
pub use segmenter::segment;
