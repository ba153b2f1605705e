//! Lexicon-based sentiment scoring.

use serde::{Deserialize, Serialize};

use super::lexicon::{CompiledCategory, CompiledLexicon};
use super::matcher::MatcherSet;

/// Each distinct positive-lexicon intensity word present raises the
/// multiplier by this much; repeats of the same word do not stack
const INTENSITY_STEP: f32 = 0.3;

/// Weight of a phrase hit relative to a single word
const PHRASE_WEIGHT: f32 = 2.0;

/// Scale applied to both polarities when they are swapped under negation
const NEGATION_DAMPING: f32 = 0.7;

/// Polarity scores for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScores {
    pub positive: f32,
    pub negative: f32,
    pub neutral: f32,
    /// `positive - negative`
    pub overall: f32,
    /// Intensity multiplier applied to polarity hits (starts at 1.0)
    pub intensity: f32,
    pub has_negation: bool,
}

impl Default for SentimentScores {
    fn default() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            overall: 0.0,
            intensity: 1.0,
            has_negation: false,
        }
    }
}

/// Score normalized text against the lexicon.
///
/// Negation is a single flag for the whole text: if any negation token occurs
/// anywhere, the positive and negative totals trade places and both are scaled
/// by 0.7. This is not scoped to the negated clause.
pub fn score(lexicon: &CompiledLexicon, negation: &MatcherSet, text: &str) -> SentimentScores {
    if text.trim().is_empty() {
        return SentimentScores::default();
    }

    let has_negation = negation.any_match(text);
    let multiplier = 1.0 + INTENSITY_STEP * lexicon.intensity.present_count(text) as f32;

    let mut positive = polarity_score(&lexicon.positive, text, multiplier);
    let mut negative = polarity_score(&lexicon.negative, text, multiplier);
    let neutral = lexicon.neutral.words.present_count(text) as f32;

    if has_negation {
        let original_positive = positive;
        positive = negative * NEGATION_DAMPING;
        negative = original_positive * NEGATION_DAMPING;
    }

    SentimentScores {
        positive,
        negative,
        neutral,
        overall: positive - negative,
        intensity: multiplier,
        has_negation,
    }
}

fn polarity_score(category: &CompiledCategory, text: &str, multiplier: f32) -> f32 {
    let word_hits = category.words.present_count(text) as f32;
    let phrase_hits = category
        .phrases
        .iter()
        .filter(|phrase| text.contains(*phrase))
        .count() as f32;
    word_hits * multiplier + phrase_hits * PHRASE_WEIGHT * multiplier
}

/// Lexicon words of one polarity found in the text, in lexicon order
pub fn matched_words<'a>(
    category: &'a CompiledCategory,
    text: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    category.words.matched_terms(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::lexicon::{CompiledContext, CONTEXT_PATTERNS, SENTIMENT_LEXICON};

    fn tables() -> (CompiledLexicon, CompiledContext) {
        (
            CompiledLexicon::new(&SENTIMENT_LEXICON).unwrap(),
            CompiledContext::new(&CONTEXT_PATTERNS).unwrap(),
        )
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_empty_text_is_neutral_default() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "   ");
        assert_eq!(scores, SentimentScores::default());
        assert_eq!(scores.neutral, 1.0);
        assert_eq!(scores.intensity, 1.0);
    }

    #[test]
    fn test_positive_words() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "what a great and happy day");
        assert!(approx(scores.positive, 2.0));
        assert!(approx(scores.negative, 0.0));
        assert!(approx(scores.overall, 2.0));
        assert!(!scores.has_negation);
    }

    #[test]
    fn test_intensity_multiplier_is_shared() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "really happy but very tired");
        assert!(approx(scores.intensity, 1.6));
        assert!(approx(scores.positive, 1.6));
        assert!(approx(scores.negative, 1.6));
        assert!(approx(scores.overall, 0.0));
    }

    #[test]
    fn test_repeated_intensity_word_counts_once() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "very very happy");
        assert!(approx(scores.intensity, 1.3));
        assert!(approx(scores.positive, 1.3));
    }

    #[test]
    fn test_phrases_count_double() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "i am over the moon");
        assert!(approx(scores.positive, 2.0));
    }

    #[test]
    fn test_neutral_words_ignore_multiplier() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "really okay, fine, whatever");
        assert!(approx(scores.neutral, 3.0));
        assert!(approx(scores.intensity, 1.3));
    }

    #[test]
    fn test_negation_swaps_and_damps_globally() {
        let (lexicon, context) = tables();
        let scores = score(&lexicon, &context.negation, "i am not happy");
        assert!(scores.has_negation);
        assert!(approx(scores.positive, 0.0));
        assert!(approx(scores.negative, 0.7));
        assert!(approx(scores.overall, -0.7));

        // Negation far from the sentiment word still swaps
        let scores = score(
            &lexicon,
            &context.negation,
            "no plans this weekend. the weather is great and i feel happy",
        );
        assert!(scores.has_negation);
        assert!(approx(scores.positive, 0.0));
        assert!(approx(scores.negative, 1.4));
    }

    #[test]
    fn test_matched_words_in_lexicon_order() {
        let (lexicon, _) = tables();
        let words: Vec<_> = matched_words(&lexicon.negative, "tired, sad and lonely").collect();
        assert_eq!(words, vec!["sad", "lonely", "tired"]);
    }
}
