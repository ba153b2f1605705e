//! Rule-based mood inference.
//!
//! [`MoodEngine`] turns free text into a mood label, a confidence score and
//! the musical parameters (genres, energy, valence, tempo) used to look up
//! matching tracks. It is deterministic, keeps no state between calls, and
//! never fails: unusable input or an internal inconsistency yields the fixed
//! default chill result, flagged as [`Analysis::Fallback`].

pub mod fallback;
pub mod features;
pub mod lexicon;
pub mod matcher;
pub mod profiles;
pub mod scoring;
pub mod sentiment;
pub mod text;

pub use features::{ContextFactors, LinguisticFeatures};
pub use profiles::{
    get_all_profiles, get_profile, get_profile_by_name, EnergyLevel, Mood, MoodProfile,
    TempoFeel, TempoRange, ValenceLevel, MOOD_PROFILES,
};
pub use scoring::MoodScore;
pub use sentiment::SentimentScores;
pub use text::{sanitize, MAX_INPUT_CHARS};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lexicon::{CompiledContext, CompiledLexicon, CONTEXT_PATTERNS, SENTIMENT_LEXICON};
use matcher::MatcherSet;
use scoring::MoodCandidate;

/// Keywords reported for a keyword-based classification
const MAX_DETECTED_KEYWORDS: usize = 5;

/// Reasons the engine fell back to its default result
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("no input text provided")]
    MissingInput,

    #[error("input text is empty")]
    EmptyInput,

    #[error("input text contains no words")]
    UnusableInput,

    #[error("no profile configured for mood '{0}'")]
    UnknownMood(Mood),

    #[error("incomplete musical parameters for mood '{0}'")]
    IncompleteProfile(Mood),

    #[error("{field} out of range: {value}")]
    ScoreOutOfRange { field: &'static str, value: f32 },
}

impl AnalysisError {
    /// Whether the failure was caused by the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::EmptyInput | Self::UnusableInput
        )
    }
}

/// Readability metrics reported alongside a classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complexity {
    pub avg_words_per_sentence: f32,
    pub lexical_diversity: f32,
    /// Matched mood keywords over word count
    pub keyword_density: f32,
}

/// Diagnostic details explaining how a result was reached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDiagnostics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextFactors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linguistic: Option<LinguisticFeatures>,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub sentence_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    /// Ranked candidates from keyword scoring
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mood_scores: Vec<MoodScore>,
    /// Set when neutral sentiment decided the mood
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub general_sentiment: bool,
    /// Set on the default result
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisDiagnostics {
    fn measured(
        sentiment: &SentimentScores,
        context: &ContextFactors,
        features: &LinguisticFeatures,
        keyword_density: f32,
    ) -> Self {
        Self {
            sentiment: Some(*sentiment),
            context: Some(*context),
            linguistic: Some(*features),
            word_count: features.word_count,
            sentence_count: features.sentence_count,
            complexity: Some(Complexity {
                avg_words_per_sentence: features.avg_words_per_sentence,
                lexical_diversity: features.lexical_diversity,
                keyword_density,
            }),
            ..Default::default()
        }
    }
}

/// Mood analysis of a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub mood: Mood,
    /// Confidence (0.0 to 0.95)
    pub confidence: f32,
    pub genres: Vec<String>,
    /// Target energy (0.0 to 1.0)
    pub energy: f32,
    /// Target valence (0.0 to 1.0)
    pub valence: f32,
    pub tempo: TempoRange,
    pub detected_keywords: Vec<String>,
    pub analysis: AnalysisDiagnostics,
}

impl AnalysisResult {
    /// Parameters the music catalog client searches with
    pub fn catalog_query(&self) -> CatalogQuery {
        let genre = self
            .genres
            .first()
            .cloned()
            .unwrap_or_else(|| fallback::DEFAULT_GENRES[0].to_string());

        CatalogQuery {
            genre,
            genres: self.genres.clone(),
            mood: self.mood,
            target_energy: self.energy,
            target_valence: self.valence,
            tempo: self.tempo,
        }
    }
}

/// Track search parameters derived from an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Seed genre (the profile's most representative genre)
    pub genre: String,
    pub genres: Vec<String>,
    pub mood: Mood,
    pub target_energy: f32,
    pub target_valence: f32,
    pub tempo: TempoRange,
}

/// Outcome of [`MoodEngine::analyze`]
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// The text was classified, by keywords or by overall sentiment
    Classified(AnalysisResult),
    /// Analysis could not proceed; `result` is the default chill result
    Fallback {
        result: AnalysisResult,
        reason: AnalysisError,
    },
}

impl Analysis {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            Self::Classified(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            Self::Classified(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&AnalysisError> {
        match self {
            Self::Classified(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Discovery metadata for a supported mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodInfo {
    pub name: Mood,
    pub description: String,
    pub genres: Vec<String>,
    pub energy: EnergyLevel,
    pub valence: ValenceLevel,
    pub tempo: TempoFeel,
    pub tempo_range: TempoRange,
    pub sample_keywords: Vec<String>,
}

impl From<&MoodProfile> for MoodInfo {
    fn from(profile: &MoodProfile) -> Self {
        Self {
            name: profile.mood,
            description: profile.description.to_string(),
            genres: profile.genres.iter().map(|g| g.to_string()).collect(),
            energy: profile.energy_level(),
            valence: profile.valence_level(),
            tempo: profile.tempo_feel(),
            tempo_range: profile.tempo,
            sample_keywords: profile
                .sample_keywords()
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// A mood profile with its keywords compiled
#[derive(Debug)]
struct CompiledProfile {
    profile: &'static MoodProfile,
    keywords: MatcherSet,
}

/// The mood inference engine.
///
/// All matchers are compiled in [`MoodEngine::new`]; analysis only reads
/// them, so one engine can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct MoodEngine {
    profiles: Vec<CompiledProfile>,
    lexicon: CompiledLexicon,
    context: CompiledContext,
}

impl MoodEngine {
    /// Compile every keyword, lexicon and context matcher
    pub fn new() -> Result<Self, regex::Error> {
        let profiles = get_all_profiles()
            .iter()
            .map(|profile| {
                Ok(CompiledProfile {
                    profile,
                    keywords: MatcherSet::new(profile.keywords)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            profiles,
            lexicon: CompiledLexicon::new(&SENTIMENT_LEXICON)?,
            context: CompiledContext::new(&CONTEXT_PATTERNS)?,
        })
    }

    /// Analyze a piece of text
    pub fn analyze(&self, text: &str) -> Analysis {
        self.analyze_input(Some(text))
    }

    /// Analyze optional input; `None` stands for a missing or non-text value
    pub fn analyze_input(&self, input: Option<&str>) -> Analysis {
        let outcome = match input {
            Some(text) => self.try_analyze(text),
            None => Err(AnalysisError::MissingInput),
        };

        conclude(outcome)
    }

    fn try_analyze(&self, raw: &str) -> Result<AnalysisResult, AnalysisError> {
        let text = text::normalize(raw)?;

        let sentiment = sentiment::score(&self.lexicon, &self.context.negation, &text);
        let context = features::analyze_context(&self.context, &text);
        let linguistic = features::extract(&text);

        let candidates = self
            .profiles
            .iter()
            .filter_map(|compiled| {
                let matches = scoring::match_keywords(&compiled.keywords, &self.context, &text)?;
                Some(scoring::score_candidate(
                    compiled.profile,
                    matches,
                    &sentiment,
                    &context,
                    &linguistic,
                ))
            })
            .collect();
        let ranked = scoring::rank(candidates);

        let result = match ranked.first() {
            Some(top) => self.build_result(top, &ranked, &sentiment, &context, &linguistic)?,
            None => fallback::general_sentiment(
                &self.lexicon,
                &text,
                &sentiment,
                &context,
                &linguistic,
            ),
        };

        validate(&result)?;
        Ok(result)
    }

    fn build_result(
        &self,
        top: &MoodCandidate,
        ranked: &[MoodCandidate],
        sentiment: &SentimentScores,
        context: &ContextFactors,
        features: &LinguisticFeatures,
    ) -> Result<AnalysisResult, AnalysisError> {
        let profile = self
            .profile(top.mood)
            .ok_or(AnalysisError::UnknownMood(top.mood))?;

        let matched = top.keywords.len();
        let confidence = scoring::confidence(matched, sentiment, features);
        let energy = scoring::adjust_energy(profile.energy, context, features);
        let valence = scoring::adjust_valence(profile.valence, sentiment);
        let keyword_density = matched as f32 / features.word_count.max(1) as f32;

        let mut diagnostics =
            AnalysisDiagnostics::measured(sentiment, context, features, keyword_density);
        diagnostics.mood_scores = ranked.iter().map(MoodScore::from).collect();

        Ok(AnalysisResult {
            mood: profile.mood,
            confidence: round_to(confidence, 2),
            genres: profile.genres.iter().map(|g| g.to_string()).collect(),
            energy: round_to(energy, 3),
            valence: round_to(valence, 3),
            tempo: profile.tempo,
            detected_keywords: top
                .keywords
                .iter()
                .take(MAX_DETECTED_KEYWORDS)
                .map(|k| k.to_string())
                .collect(),
            analysis: diagnostics,
        })
    }

    fn profile(&self, mood: Mood) -> Option<&'static MoodProfile> {
        self.profiles
            .iter()
            .find(|compiled| compiled.profile.mood == mood)
            .map(|compiled| compiled.profile)
    }

    /// Names of all supported moods, in table order
    pub fn supported_moods(&self) -> Vec<Mood> {
        self.profiles.iter().map(|c| c.profile.mood).collect()
    }

    /// Metadata for every supported mood
    pub fn mood_catalog(&self) -> Vec<MoodInfo> {
        self.profiles
            .iter()
            .map(|c| MoodInfo::from(c.profile))
            .collect()
    }

    /// Metadata for one mood, looked up by name
    pub fn mood_info(&self, name: &str) -> Option<MoodInfo> {
        let mood = name.parse::<Mood>().ok()?;
        self.profile(mood).map(MoodInfo::from)
    }
}

/// Turn a pipeline outcome into the public result, substituting the default
/// chill result for any error
fn conclude(outcome: Result<AnalysisResult, AnalysisError>) -> Analysis {
    match outcome {
        Ok(result) => {
            debug!(
                mood = %result.mood,
                confidence = result.confidence,
                keywords = ?result.detected_keywords,
                "Mood classified"
            );
            Analysis::Classified(result)
        }
        Err(reason) => {
            warn!(error = %reason, "Mood analysis fell back to default result");
            Analysis::Fallback {
                result: fallback::default_result(&reason),
                reason,
            }
        }
    }
}

/// Reject results that break the engine's output ranges
fn validate(result: &AnalysisResult) -> Result<(), AnalysisError> {
    let checks = [
        ("confidence", result.confidence, scoring::MAX_CONFIDENCE),
        ("energy", result.energy, 1.0),
        ("valence", result.valence, 1.0),
    ];
    for (field, value, max) in checks {
        if !(0.0..=max).contains(&value) {
            return Err(AnalysisError::ScoreOutOfRange { field, value });
        }
    }
    if result.tempo.min >= result.tempo.max || result.genres.is_empty() {
        return Err(AnalysisError::IncompleteProfile(result.mood));
    }
    Ok(())
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (value * factor).round() / factor
}
