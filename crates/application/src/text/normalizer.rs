//! Text normalizer - the cleaning pipeline ahead of segmentation
//!
//! Four steps, applied in order: lowercase; remove URL, `www.`, mention,
//! and hashtag tokens; strip every character that is not a Latin letter
//! (Spanish accented set included) or whitespace; drop stopwords and
//! rejoin with single spaces. Each step is idempotent on its own output,
//! so the whole pipeline is too.

use std::sync::LazyLock;

use domain::NormalizedText;
use regex::Regex;

use crate::text::stopwords;

/// URLs in scheme form or bare `www.` form
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"(?:https?://|www\.)\S+").expect("Failed to compile URL pattern")
});

/// @mentions and #hashtags
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"[@#]\w+").expect("Failed to compile mention/hashtag pattern")
});

/// Anything that is not a lowercase Latin letter or whitespace
static NON_LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"[^a-záéíóúüñ\s]").expect("Failed to compile letter filter pattern")
});

/// Clean raw caller input down to scoreable words
///
/// Total over any string; empty or all-stopword input yields empty
/// normalized text, which downstream segmentation turns into zero
/// sentences.
///
/// # Examples
///
/// ```
/// use application::normalize;
///
/// let cleaned = normalize("I love this! https://x.co @bob #great");
/// assert_eq!(cleaned.as_str(), "love");
/// ```
pub fn normalize(raw: &str) -> NormalizedText {
    let lowered = raw.to_lowercase();
    let without_urls = URL_PATTERN.replace_all(&lowered, " ");
    let without_tags = TAG_PATTERN.replace_all(&without_urls, " ");
    let letters_only = NON_LETTER_PATTERN.replace_all(&without_tags, "");

    let kept: Vec<&str> = letters_only
        .split_whitespace()
        .filter(|token| !stopwords::is_stopword(token))
        .collect();

    NormalizedText::new(kept.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_input() {
        assert_eq!(normalize("EXCELENTE Producto").as_str(), "excelente producto");
    }

    #[test]
    fn removes_urls() {
        assert_eq!(normalize("great stuff https://x.co/abc?q=1").as_str(), "great stuff");
        assert_eq!(normalize("great stuff www.example.com/page").as_str(), "great stuff");
        assert_eq!(normalize("great stuff HTTP://LOUD.EXAMPLE").as_str(), "great stuff");
    }

    #[test]
    fn removes_mentions_and_hashtags() {
        assert_eq!(normalize("gracias @soporte equipo #genial").as_str(), "gracias equipo");
    }

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(normalize("wonderful!!! 100% worth $20").as_str(), "wonderful worth");
    }

    #[test]
    fn keeps_spanish_accented_letters() {
        assert_eq!(normalize("¡El niño está feliz!").as_str(), "niño feliz");
    }

    #[test]
    fn drops_stopwords_in_both_languages() {
        assert_eq!(normalize("the movie was very good").as_str(), "movie good");
        assert_eq!(normalize("la película fue muy buena").as_str(), "película buena");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("great \t\n  movie").as_str(), "great movie");
    }

    #[test]
    fn empty_input_yields_empty_text() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
    }

    #[test]
    fn all_noise_input_yields_empty_text() {
        assert!(normalize("https://x.co @bob #great").is_empty());
        assert!(normalize("the a of and").is_empty());
        assert!(normalize("12345 !!! ???").is_empty());
    }

    #[test]
    fn scenario_text_normalizes_to_single_word() {
        let cleaned = normalize("I love this! https://x.co @bob #great");
        assert_eq!(cleaned.as_str(), "love");
    }

    #[test]
    fn already_normalized_text_is_untouched() {
        let once = normalize("El servicio fue excelente, volveré pronto.");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
    }
}
