//! Keyword matching, mood score aggregation and confidence calibration.

use serde::{Deserialize, Serialize};

use super::features::{ContextFactors, LinguisticFeatures};
use super::lexicon::CompiledContext;
use super::matcher::MatcherSet;
use super::profiles::{Affect, Mood, MoodProfile};
use super::sentiment::SentimentScores;

/// Characters inspected on each side of a keyword hit
const CONTEXT_RADIUS: usize = 30;
/// Added to a keyword's contextual score per high-intensity word nearby
const NEARBY_INTENSITY_BONUS: f32 = 0.5;
/// Applied to a keyword's contextual score when a negation is nearby
const NEARBY_NEGATION_FACTOR: f32 = 0.3;

const BASE_CONFIDENCE: f32 = 0.6;
pub const MAX_CONFIDENCE: f32 = 0.95;

/// Keywords of one mood found in the text
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatches {
    /// Matched keywords, in profile order
    pub keywords: Vec<&'static str>,
    /// Sum of per-keyword contextual scores
    pub contextual_score: f32,
}

/// Match a mood's keywords and weigh each hit by its surroundings.
///
/// Each matched keyword starts at 1.0, gains 0.5 for every high-intensity
/// word within 30 characters, and is scaled by 0.3 when a negation token is
/// within the same window. Returns `None` when no keyword matches.
pub fn match_keywords(
    keywords: &MatcherSet,
    context: &CompiledContext,
    text: &str,
) -> Option<KeywordMatches> {
    let mut matched = Vec::new();
    let mut contextual_score = 0.0;

    for keyword in keywords.iter() {
        let Some(hit) = keyword.find(text) else {
            continue;
        };
        matched.push(keyword.term());

        let window = context_window(text, hit.start(), hit.end(), CONTEXT_RADIUS);
        let mut score = 1.0 + NEARBY_INTENSITY_BONUS * context.high.present_count(window) as f32;
        if context.negation.any_match(window) {
            score *= NEARBY_NEGATION_FACTOR;
        }
        contextual_score += score;
    }

    if matched.is_empty() {
        None
    } else {
        Some(KeywordMatches {
            keywords: matched,
            contextual_score,
        })
    }
}

/// Slice of `text` spanning `radius` characters either side of a byte range
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map_or(0, |(idx, _)| idx);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(idx, _)| end + idx);
    &text[from..to]
}

/// A scored mood candidate
#[derive(Debug, Clone, PartialEq)]
pub struct MoodCandidate {
    pub mood: Mood,
    pub score: f32,
    pub keywords: Vec<&'static str>,
}

/// Combine keyword, sentiment, intensity and punctuation evidence for a mood
pub fn score_candidate(
    profile: &MoodProfile,
    matches: KeywordMatches,
    sentiment: &SentimentScores,
    context: &ContextFactors,
    features: &LinguisticFeatures,
) -> MoodCandidate {
    let mut score = matches.contextual_score * 2.0;

    score += match profile.mood.affect() {
        Affect::Positive => sentiment.positive.max(0.0) * 0.5,
        Affect::Negative => sentiment.negative.max(0.0) * 0.5,
        Affect::Even => sentiment.neutral * 0.3,
        Affect::Unaligned => 0.0,
    };

    if profile.energy > 0.7 && context.has_high_intensity() {
        score += 1.0;
    }
    if profile.energy < 0.5 && context.has_low_intensity() {
        score += 1.0;
    }

    if features.has_exclamation && profile.energy > 0.6 {
        score += 0.5;
    }
    if features.has_question && profile.mood == Mood::Thoughtful {
        score += 0.5;
    }

    MoodCandidate {
        mood: profile.mood,
        score,
        keywords: matches.keywords,
    }
}

/// Sort candidates by score, highest first, dropping non-positive scores.
///
/// The sort is stable, so ties keep profile table order.
pub fn rank(mut candidates: Vec<MoodCandidate>) -> Vec<MoodCandidate> {
    candidates.retain(|c| c.score > 0.0);
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Confidence in a keyword-based classification, capped at 0.95
pub fn confidence(
    matched_keywords: usize,
    sentiment: &SentimentScores,
    features: &LinguisticFeatures,
) -> f32 {
    let words = features.word_count.max(1) as f32;
    let mut confidence = BASE_CONFIDENCE;

    confidence += (matched_keywords as f32 / words * 5.0).min(0.2);
    confidence += (sentiment.overall.abs() / words * 3.0).min(0.15);

    if features.word_count >= 5 {
        confidence += 0.05;
    }
    if features.sentence_count >= 2 {
        confidence += 0.05;
    }
    if features.avg_words_per_sentence > 3.0 {
        confidence += 0.05;
    }

    confidence.min(MAX_CONFIDENCE)
}

/// Nudge a profile's baseline energy by intensity markers and exclamations
pub fn adjust_energy(base: f32, context: &ContextFactors, features: &LinguisticFeatures) -> f32 {
    let mut energy = base;
    if context.has_high_intensity() {
        energy = (energy + 0.1).min(1.0);
    } else if context.has_low_intensity() {
        energy = (energy - 0.1).max(0.0);
    }
    if features.has_exclamation {
        energy = (energy + 0.05).min(1.0);
    }
    energy
}

/// Shift a profile's baseline valence by overall sentiment
pub fn adjust_valence(base: f32, sentiment: &SentimentScores) -> f32 {
    (base + sentiment.overall * 0.05).clamp(0.0, 1.0)
}

/// Ranked candidate as reported in diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodScore {
    pub mood: Mood,
    pub score: f32,
    pub matched_keywords: Vec<String>,
}

impl From<&MoodCandidate> for MoodScore {
    fn from(candidate: &MoodCandidate) -> Self {
        Self {
            mood: candidate.mood,
            score: candidate.score,
            matched_keywords: candidate.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}
