//! Context and linguistic feature extraction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::lexicon::CompiledContext;
use super::text::split_sentences;

/// Occurrence counts of temporal markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalCounts {
    pub past: usize,
    pub present: usize,
    pub future: usize,
}

/// Occurrence counts of intensity markers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFactors {
    pub temporal: TemporalCounts,
    pub intensity: IntensityCounts,
}

impl ContextFactors {
    pub fn has_high_intensity(&self) -> bool {
        self.intensity.high > 0
    }

    pub fn has_low_intensity(&self) -> bool {
        self.intensity.low > 0
    }
}

/// Count every temporal and intensity marker occurrence in the text
pub fn analyze_context(context: &CompiledContext, text: &str) -> ContextFactors {
    ContextFactors {
        temporal: TemporalCounts {
            past: context.past.total_count(text),
            present: context.present.total_count(text),
            future: context.future.total_count(text),
        },
        intensity: IntensityCounts {
            high: context.high.total_count(text),
            medium: context.medium.total_count(text),
            low: context.low.total_count(text),
        },
    }
}

/// Surface features of the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticFeatures {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f32,
    pub has_exclamation: bool,
    pub has_question: bool,
    pub has_emoji: bool,
    /// Occurrences of words (longer than two characters) beyond their first
    pub repetition_count: usize,
    /// Uppercase characters over total characters
    pub caps_ratio: f32,
    /// Distinct words over total words
    pub lexical_diversity: f32,
}

/// Extract linguistic features.
///
/// Called on normalized (lowercased) text, so `caps_ratio` is effectively
/// always zero.
pub fn extract(text: &str) -> LinguisticFeatures {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    let sentence_count = split_sentences(text).count();

    let avg_words_per_sentence = word_count as f32 / sentence_count.max(1) as f32;

    let mut seen: HashMap<String, usize> = HashMap::new();
    for word in &words {
        let token = word.trim_matches(|c: char| !c.is_alphanumeric());
        *seen.entry(token.to_string()).or_insert(0) += 1;
    }
    let repetition_count = seen
        .iter()
        .filter(|(word, _)| word.chars().count() > 2)
        .map(|(_, count)| count - 1)
        .sum();
    let lexical_diversity = if word_count == 0 {
        0.0
    } else {
        seen.len() as f32 / word_count as f32
    };

    let total_chars = text.chars().count();
    let caps = text.chars().filter(|c| c.is_uppercase()).count();
    let caps_ratio = if total_chars == 0 {
        0.0
    } else {
        caps as f32 / total_chars as f32
    };

    LinguisticFeatures {
        word_count,
        sentence_count,
        avg_words_per_sentence,
        has_exclamation: text.contains('!'),
        has_question: text.contains('?'),
        has_emoji: text.chars().any(is_emoji),
        repetition_count,
        caps_ratio,
        lexical_diversity,
    }
}

/// Whether a character falls in one of the common emoji blocks
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F300..=0x1F5FF   // symbols & pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport & map
            | 0x1F900..=0x1F9FF // supplemental symbols
            | 0x1FA70..=0x1FAFF // symbols & pictographs extended-a
            | 0x2600..=0x26FF   // misc symbols
            | 0x2700..=0x27BF   // dingbats
            | 0x1F1E6..=0x1F1FF // regional indicators
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::lexicon::CONTEXT_PATTERNS;

    #[test]
    fn test_context_counts_occurrences() {
        let context = CompiledContext::new(&CONTEXT_PATTERNS).unwrap();
        let factors = analyze_context(
            &context,
            "i was so so tired yesterday, but tomorrow will be slightly better",
        );
        assert_eq!(factors.temporal.past, 2);
        assert_eq!(factors.temporal.future, 2);
        assert_eq!(factors.intensity.high, 2);
        assert_eq!(factors.intensity.low, 1);
        assert!(factors.has_high_intensity());
        assert!(factors.has_low_intensity());
    }

    #[test]
    fn test_context_empty() {
        let context = CompiledContext::new(&CONTEXT_PATTERNS).unwrap();
        assert_eq!(analyze_context(&context, "hello"), ContextFactors::default());
    }

    #[test]
    fn test_basic_features() {
        let features = extract("what a day! are you ok? i am fine");
        assert_eq!(features.word_count, 9);
        assert_eq!(features.sentence_count, 3);
        assert!((features.avg_words_per_sentence - 3.0).abs() < 1e-6);
        assert!(features.has_exclamation);
        assert!(features.has_question);
        assert!(!features.has_emoji);
    }

    #[test]
    fn test_repetition_ignores_short_words() {
        let features = extract("so so tired, tired and tired. it is it");
        // "tired" repeats twice; "so" and "it" are too short
        assert_eq!(features.repetition_count, 2);
    }

    #[test]
    fn test_emoji_detection() {
        assert!(extract("party time 🎉").has_emoji);
        assert!(extract("sunny ☀").has_emoji);
        assert!(!extract("plain text :)").has_emoji);
    }

    #[test]
    fn test_caps_ratio_on_normalized_text() {
        assert_eq!(extract("all lowercase here").caps_ratio, 0.0);
        assert!(extract("ABcd").caps_ratio > 0.49);
    }

    #[test]
    fn test_lexical_diversity() {
        let features = extract("one two two");
        assert!((features.lexical_diversity - 2.0 / 3.0).abs() < 1e-6);
    }
}
