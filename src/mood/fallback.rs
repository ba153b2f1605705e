//! Classification paths used when keyword matching does not produce a mood.
//!
//! [`general_sentiment`] picks happy, sad or chill from aggregate polarity
//! when no mood keyword matched. [`default_result`] is the fixed chill answer
//! returned for unusable input or an internal failure.

use super::features::{ContextFactors, LinguisticFeatures};
use super::lexicon::{CompiledCategory, CompiledLexicon};
use super::profiles::{Mood, TempoRange};
use super::sentiment::{self, SentimentScores};
use super::{round_to, AnalysisDiagnostics, AnalysisError, AnalysisResult};

/// Genres used by the default and neutral-sentiment results
pub const DEFAULT_GENRES: &[&str] = &["lo-fi", "chillhop", "indie", "alternative", "chillout"];
pub const DEFAULT_TEMPO: TempoRange = TempoRange::new(80, 110);
pub const DEFAULT_CONFIDENCE: f32 = 0.7;
pub const DEFAULT_ENERGY: f32 = 0.5;
pub const DEFAULT_VALENCE: f32 = 0.6;

const HAPPY_GENRES: &[&str] = &["pop", "indie", "folk", "acoustic"];
const SAD_GENRES: &[&str] = &["indie", "alternative", "folk", "blues"];

/// Sentiment words reported when classifying by polarity alone
const MAX_SENTIMENT_KEYWORDS: usize = 3;

/// Classify by aggregate sentiment when no mood keyword matched
pub fn general_sentiment(
    lexicon: &CompiledLexicon,
    text: &str,
    sentiment: &SentimentScores,
    context: &ContextFactors,
    features: &LinguisticFeatures,
) -> AnalysisResult {
    let SentimentScores {
        positive,
        negative,
        neutral,
        ..
    } = *sentiment;

    // Under negation the polarity totals were swapped, so the words behind
    // each total come from the opposite list.
    let (positive_source, negative_source) = if sentiment.has_negation {
        (&lexicon.negative, &lexicon.positive)
    } else {
        (&lexicon.positive, &lexicon.negative)
    };

    let mut diagnostics = AnalysisDiagnostics::measured(sentiment, context, features, 0.0);

    let (mood, confidence, energy, valence, genres, tempo, source) =
        if positive > negative && positive > neutral {
            (
                Mood::Happy,
                (0.6 + positive * 0.05).min(0.85),
                if context.has_high_intensity() { 0.8 } else { 0.6 },
                (0.7 + positive * 0.03).min(0.9),
                HAPPY_GENRES,
                TempoRange::new(100, 130),
                positive_source,
            )
        } else if negative > positive {
            (
                Mood::Sad,
                (0.6 + negative * 0.05).min(0.85),
                if context.has_high_intensity() { 0.2 } else { 0.4 },
                (0.3 - negative * 0.03).max(0.1),
                SAD_GENRES,
                TempoRange::new(70, 100),
                negative_source,
            )
        } else {
            diagnostics.general_sentiment = true;
            (
                Mood::Chill,
                (0.6 + neutral * 0.05).min(0.8),
                DEFAULT_ENERGY,
                DEFAULT_VALENCE,
                DEFAULT_GENRES,
                DEFAULT_TEMPO,
                &lexicon.neutral,
            )
        };

    AnalysisResult {
        mood,
        confidence: round_to(confidence, 2),
        genres: to_strings(genres),
        energy: round_to(energy, 3),
        valence: round_to(valence, 3),
        tempo,
        detected_keywords: sentiment_keywords(source, text),
        analysis: diagnostics,
    }
}

fn sentiment_keywords(category: &CompiledCategory, text: &str) -> Vec<String> {
    sentiment::matched_words(category, text)
        .take(MAX_SENTIMENT_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// The fixed chill result returned when analysis cannot proceed.
///
/// Invalid input reports `"default"` as its keyword; internal failures report
/// `"chill"`.
pub fn default_result(reason: &AnalysisError) -> AnalysisResult {
    let keyword = if reason.is_invalid_input() {
        "default"
    } else {
        "chill"
    };

    AnalysisResult {
        mood: Mood::Chill,
        confidence: DEFAULT_CONFIDENCE,
        genres: to_strings(DEFAULT_GENRES),
        energy: DEFAULT_ENERGY,
        valence: DEFAULT_VALENCE,
        tempo: DEFAULT_TEMPO,
        detected_keywords: vec![keyword.to_string()],
        analysis: AnalysisDiagnostics {
            fallback: true,
            error: Some(reason.to_string()),
            ..Default::default()
        },
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
