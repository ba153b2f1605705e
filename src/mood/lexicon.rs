//! Sentiment lexicon and context pattern tables.
//!
//! The raw tables are plain static data. [`CompiledLexicon`] and
//! [`CompiledContext`] turn them into word-boundary matchers once, when the
//! engine is built.

use super::matcher::MatcherSet;

/// Word lists for one sentiment polarity
#[derive(Debug, Clone)]
pub struct SentimentCategory {
    /// Single tokens, matched on word boundaries
    pub words: &'static [&'static str],
    /// Multi-word phrases, matched as substrings
    pub phrases: &'static [&'static str],
    /// Words that amplify the strength of nearby sentiment
    pub intensity: &'static [&'static str],
    /// Punctuation and emoji markers. Informational only, never scored.
    pub modifiers: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub positive: SentimentCategory,
    pub negative: SentimentCategory,
    pub neutral: SentimentCategory,
}

pub const SENTIMENT_LEXICON: SentimentLexicon = SentimentLexicon {
    positive: SentimentCategory {
        words: &[
            "happy", "good", "great", "amazing", "awesome", "wonderful", "fantastic",
            "excellent", "love", "loving", "excited", "joy", "joyful", "glad", "delighted",
            "cheerful", "beautiful", "perfect", "brilliant", "fun", "nice", "lovely", "thrilled",
            "grateful", "blessed", "proud", "peaceful", "calm", "hopeful", "confident", "content",
            "pleased", "best", "incredible",
        ],
        phrases: &[
            "feel good",
            "feeling good",
            "on top of the world",
            "over the moon",
            "cloud nine",
            "best day",
            "good vibes",
            "so much fun",
        ],
        intensity: &[
            "very", "really", "so", "extremely", "absolutely", "incredibly", "totally", "super",
            "truly", "completely",
        ],
        modifiers: &["!", ":)", ":D", "😊", "😄", "🎉", "❤️"],
    },
    negative: SentimentCategory {
        words: &[
            "sad", "bad", "terrible", "awful", "horrible", "hate", "angry", "upset", "depressed",
            "lonely", "miserable", "anxious", "worried", "stressed", "scared", "afraid", "tired",
            "exhausted", "hurt", "cry", "crying", "frustrated", "annoyed", "disappointed",
            "hopeless", "broken", "worst", "pain", "sick", "furious", "nervous", "gloomy", "empty",
            "lost",
        ],
        phrases: &[
            "feel down",
            "feeling down",
            "fed up",
            "broken heart",
            "worst day",
            "under the weather",
            "cant take it",
            "can't take it",
            "falling apart",
            "sick of",
        ],
        intensity: &["terribly", "awfully", "deeply", "horribly", "painfully"],
        modifiers: &[":(", "😢", "😭", "😠", "💔"],
    },
    neutral: SentimentCategory {
        words: &[
            "okay", "ok", "fine", "alright", "normal", "whatever", "average", "meh", "usual",
            "regular", "neutral", "so-so", "moderate",
        ],
        phrases: &[
            "not bad",
            "nothing special",
            "same as usual",
            "just another day",
        ],
        intensity: &["somewhat", "fairly", "kind of"],
        modifiers: &[".", "..."],
    },
};

/// Temporal, intensity and negation markers
#[derive(Debug, Clone)]
pub struct ContextPatterns {
    pub past: &'static [&'static str],
    pub present: &'static [&'static str],
    pub future: &'static [&'static str],
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub low: &'static [&'static str],
    pub negation: &'static [&'static str],
}

pub const CONTEXT_PATTERNS: ContextPatterns = ContextPatterns {
    past: &[
        "was", "were", "yesterday", "ago", "used to", "before", "remembered", "last week",
        "last night", "had",
    ],
    present: &[
        "am", "is", "are", "now", "today", "currently", "right now", "feeling", "this moment",
    ],
    future: &[
        "will", "tomorrow", "going to", "gonna", "soon", "next week", "later", "plan", "hope to",
    ],
    high: &[
        "very", "extremely", "really", "so", "absolutely", "incredibly", "totally", "super",
        "completely", "utterly", "intensely",
    ],
    medium: &["quite", "pretty", "fairly", "rather", "somewhat", "moderately"],
    low: &[
        "slightly", "a bit", "a little", "barely", "kind of", "sort of", "mildly", "hardly",
    ],
    negation: &[
        "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "nowhere", "don't",
        "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't", "wasnt",
        "aren't", "arent", "can't", "cant", "won't", "wont", "couldn't", "couldnt",
        "shouldn't", "shouldnt", "without",
    ],
};

/// A sentiment category with its words pre-compiled
#[derive(Debug)]
pub struct CompiledCategory {
    pub words: MatcherSet,
    pub phrases: &'static [&'static str],
}

impl CompiledCategory {
    fn new(category: &SentimentCategory) -> Result<Self, regex::Error> {
        Ok(Self {
            words: MatcherSet::new(category.words)?,
            phrases: category.phrases,
        })
    }
}

/// Only the positive category's intensity words feed the multiplier; the
/// other intensity lists stay table data.
#[derive(Debug)]
pub struct CompiledLexicon {
    pub positive: CompiledCategory,
    pub negative: CompiledCategory,
    pub neutral: CompiledCategory,
    pub intensity: MatcherSet,
}

impl CompiledLexicon {
    pub fn new(lexicon: &SentimentLexicon) -> Result<Self, regex::Error> {
        Ok(Self {
            positive: CompiledCategory::new(&lexicon.positive)?,
            negative: CompiledCategory::new(&lexicon.negative)?,
            neutral: CompiledCategory::new(&lexicon.neutral)?,
            intensity: MatcherSet::new(lexicon.positive.intensity)?,
        })
    }
}

#[derive(Debug)]
pub struct CompiledContext {
    pub past: MatcherSet,
    pub present: MatcherSet,
    pub future: MatcherSet,
    pub high: MatcherSet,
    pub medium: MatcherSet,
    pub low: MatcherSet,
    pub negation: MatcherSet,
}

impl CompiledContext {
    pub fn new(patterns: &ContextPatterns) -> Result<Self, regex::Error> {
        Ok(Self {
            past: MatcherSet::new(patterns.past)?,
            present: MatcherSet::new(patterns.present)?,
            future: MatcherSet::new(patterns.future)?,
            high: MatcherSet::new(patterns.high)?,
            medium: MatcherSet::new(patterns.medium)?,
            low: MatcherSet::new(patterns.low)?,
            negation: MatcherSet::new(patterns.negation)?,
        })
    }
}
