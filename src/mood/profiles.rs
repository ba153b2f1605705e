//! Mood profile definitions.
//!
//! Each supported mood carries the keywords that trigger it and the musical
//! parameters (genres, energy, valence, tempo) used when it wins. The table
//! order is significant: it breaks ties between equally scored moods.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of moods the engine can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Relaxed,
    Energetic,
    Romantic,
    Nostalgic,
    Anxious,
    Confident,
    Thoughtful,
    Chill,
}

impl Mood {
    /// Every mood, in table order
    pub const ALL: [Mood; 11] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Relaxed,
        Mood::Energetic,
        Mood::Romantic,
        Mood::Nostalgic,
        Mood::Anxious,
        Mood::Confident,
        Mood::Thoughtful,
        Mood::Chill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Romantic => "romantic",
            Mood::Nostalgic => "nostalgic",
            Mood::Anxious => "anxious",
            Mood::Confident => "confident",
            Mood::Thoughtful => "thoughtful",
            Mood::Chill => "chill",
        }
    }

    /// Which sentiment polarity reinforces this mood during scoring
    pub fn affect(self) -> Affect {
        match self {
            Mood::Happy | Mood::Energetic | Mood::Confident => Affect::Positive,
            Mood::Sad | Mood::Angry | Mood::Anxious => Affect::Negative,
            Mood::Relaxed | Mood::Thoughtful => Affect::Even,
            Mood::Romantic | Mood::Nostalgic | Mood::Chill => Affect::Unaligned,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mood name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMoodName(pub String);

impl FromStr for Mood {
    type Err = UnknownMoodName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == needle)
            .ok_or_else(|| UnknownMoodName(s.to_string()))
    }
}

/// Sentiment polarity a mood is aligned with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affect {
    Positive,
    Negative,
    Even,
    Unaligned,
}

/// Tempo range in beats per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoRange {
    pub min: u16,
    pub max: u16,
}

impl TempoRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }
}

/// A mood definition with its trigger keywords and musical parameters
#[derive(Debug, Clone)]
pub struct MoodProfile {
    pub mood: Mood,
    /// Human-readable description for discovery endpoints
    pub description: &'static str,
    /// Lowercase keywords and phrases, matched on word boundaries
    pub keywords: &'static [&'static str],
    /// Genre tags handed to the music catalog, most representative first
    pub genres: &'static [&'static str],
    /// Baseline energy (0.0 to 1.0)
    pub energy: f32,
    /// Baseline valence (0.0 to 1.0)
    pub valence: f32,
    pub tempo: TempoRange,
}

// ============================================================================
// Profiles
// ============================================================================

pub const MOOD_HAPPY: MoodProfile = MoodProfile {
    mood: Mood::Happy,
    description: "Bright, upbeat and feel-good music for when everything is going right",
    keywords: &[
        "happy", "joy", "joyful", "cheerful", "glad", "delighted", "amazing", "awesome",
        "wonderful", "great", "fantastic", "excited", "thrilled", "ecstatic", "elated",
        "blessed", "grateful", "smiling", "smile", "laughing", "sunny", "bright", "good mood",
        "celebrate", "celebrating", "yay", "fun", "lovely", "content", "pleased", "overjoyed",
        "blissful", "upbeat", "good vibes", "on top of the world",
    ],
    genres: &["pop", "dance", "funk", "disco", "house", "reggae"],
    energy: 0.8,
    valence: 0.9,
    tempo: TempoRange::new(110, 140),
};

pub const MOOD_SAD: MoodProfile = MoodProfile {
    mood: Mood::Sad,
    description: "Slow, tender and melancholic songs that sit with the feeling",
    keywords: &[
        "sad", "unhappy", "down", "depressed", "depressing", "lonely", "alone", "heartbroken",
        "crying", "cry", "tears", "miserable", "blue", "gloomy", "hopeless", "grief",
        "grieving", "sorrow", "hurt", "hurting", "empty", "lost", "broken", "melancholy",
        "upset", "devastated", "disappointed", "low", "missing", "regret", "numb", "pain",
        "heavy heart", "feeling down",
    ],
    genres: &["indie", "alternative", "folk", "blues", "acoustic", "singer-songwriter"],
    energy: 0.3,
    valence: 0.2,
    tempo: TempoRange::new(60, 90),
};

pub const MOOD_ANGRY: MoodProfile = MoodProfile {
    mood: Mood::Angry,
    description: "Loud, heavy and cathartic music to burn off frustration",
    keywords: &[
        "angry", "mad", "furious", "rage", "raging", "pissed", "annoyed", "irritated",
        "frustrated", "frustrating", "hate", "hateful", "livid", "outraged", "fuming",
        "resentful", "bitter", "hostile", "aggressive", "enraged", "infuriated", "sick of",
        "fed up", "explode", "scream", "screaming", "irate", "cross", "agitated", "vengeful",
        "betrayed", "disgusted",
    ],
    genres: &["rock", "metal", "punk", "hard-rock", "grunge", "industrial"],
    energy: 0.9,
    valence: 0.2,
    tempo: TempoRange::new(130, 180),
};

pub const MOOD_RELAXED: MoodProfile = MoodProfile {
    mood: Mood::Relaxed,
    description: "Gentle, soothing sounds for unwinding and letting go",
    keywords: &[
        "relaxed", "relaxing", "calm", "peaceful", "serene", "tranquil", "at ease", "unwind",
        "unwinding", "soothing", "gentle", "quiet", "rest", "resting", "lazy", "comfortable",
        "cozy", "easygoing", "zen", "meditate", "meditation", "breathe", "slow", "soft",
        "still", "stress-free", "sunday", "bath", "spa", "nap", "carefree", "balanced",
        "restful",
    ],
    genres: &["ambient", "acoustic", "jazz", "classical", "new-age", "bossanova"],
    energy: 0.3,
    valence: 0.7,
    tempo: TempoRange::new(60, 90),
};

pub const MOOD_ENERGETIC: MoodProfile = MoodProfile {
    mood: Mood::Energetic,
    description: "High-tempo, driving tracks for workouts, parties and momentum",
    keywords: &[
        "energetic", "energized", "pumped", "hyped", "hype", "motivated", "active", "workout",
        "gym", "running", "run", "dance", "dancing", "party", "wild", "adrenaline", "power",
        "powerful", "unstoppable", "alive", "buzzing", "lit", "fired up", "ready to go",
        "intense", "fast", "jump", "move", "moving", "training", "sprint", "electric",
        "charged", "rush",
    ],
    genres: &["electronic", "edm", "dance", "hip-hop", "drum-and-bass", "work-out"],
    energy: 0.9,
    valence: 0.8,
    tempo: TempoRange::new(120, 160),
};

pub const MOOD_ROMANTIC: MoodProfile = MoodProfile {
    mood: Mood::Romantic,
    description: "Warm, intimate music for love, longing and date nights",
    keywords: &[
        "romantic", "love", "in love", "loving", "crush", "date", "dating", "valentine",
        "kiss", "kissing", "sweetheart", "darling", "passion", "passionate", "intimate",
        "tender", "affection", "adore", "adoring", "honeymoon", "wedding", "partner",
        "boyfriend", "girlfriend", "husband", "wife", "candlelight", "flirty", "butterflies",
        "soulmate", "heart", "cuddle", "together", "sensual",
    ],
    genres: &["r-n-b", "soul", "jazz", "romance", "acoustic", "latin"],
    energy: 0.4,
    valence: 0.8,
    tempo: TempoRange::new(70, 110),
};

pub const MOOD_NOSTALGIC: MoodProfile = MoodProfile {
    mood: Mood::Nostalgic,
    description: "Throwbacks and timeless songs that bring the old days back",
    keywords: &[
        "nostalgic", "nostalgia", "memories", "memory", "remember", "remembering",
        "reminisce", "reminiscing", "childhood", "old days", "good old", "back then",
        "throwback", "past", "yesterday", "used to", "miss the", "retro", "vintage",
        "old friends", "school days", "hometown", "years ago", "growing up", "sentimental",
        "old photos", "flashback", "longing", "classic", "those days", "simpler times",
        "way back",
    ],
    genres: &["classic-rock", "oldies", "synth-pop", "soul", "folk", "rock-n-roll"],
    energy: 0.5,
    valence: 0.5,
    tempo: TempoRange::new(80, 120),
};

pub const MOOD_ANXIOUS: MoodProfile = MoodProfile {
    mood: Mood::Anxious,
    description: "Steady, grounding music to take the edge off a racing mind",
    keywords: &[
        "anxious", "anxiety", "nervous", "worried", "worry", "worrying", "stressed", "stress",
        "stressful", "panic", "panicking", "overwhelmed", "tense", "uneasy", "restless",
        "scared", "afraid", "fear", "fearful", "on edge", "jittery", "paranoid", "dread",
        "overthinking", "cant sleep", "can't sleep", "pressure", "deadline", "exam",
        "insecure", "shaky", "freaking out", "nerves", "apprehensive",
    ],
    genres: &["ambient", "classical", "piano", "post-rock", "trip-hop"],
    energy: 0.6,
    valence: 0.3,
    tempo: TempoRange::new(90, 130),
};

pub const MOOD_CONFIDENT: MoodProfile = MoodProfile {
    mood: Mood::Confident,
    description: "Bold, swaggering anthems for owning the moment",
    keywords: &[
        "confident", "confidence", "strong", "bold", "fearless", "proud", "boss", "winning",
        "winner", "success", "successful", "empowered", "brave", "determined", "ambitious",
        "invincible", "badass", "fierce", "dominant", "ready", "capable", "self-assured",
        "killing it", "on fire", "crushing it", "champion", "victorious", "accomplished",
        "swagger", "assertive", "focused", "driven", "hustle", "top of my game",
    ],
    genres: &["hip-hop", "rap", "pop", "funk", "rock", "trap"],
    energy: 0.8,
    valence: 0.8,
    tempo: TempoRange::new(100, 140),
};

pub const MOOD_THOUGHTFUL: MoodProfile = MoodProfile {
    mood: Mood::Thoughtful,
    description: "Reflective, textured music for thinking things through",
    keywords: &[
        "thoughtful", "thinking", "reflective", "reflecting", "pondering", "wondering",
        "contemplative", "contemplating", "introspective", "curious", "philosophical", "deep",
        "meaningful", "meaning", "questioning", "analyzing", "considering", "mindful",
        "wonder", "daydreaming", "dreamy", "musing", "journaling", "learning", "reading",
        "studying", "existential", "perspective", "insight", "consider", "realize",
        "realizing", "introspection",
    ],
    genres: &["classical", "piano", "jazz", "ambient", "post-rock", "indie"],
    energy: 0.4,
    valence: 0.5,
    tempo: TempoRange::new(70, 110),
};

pub const MOOD_CHILL: MoodProfile = MoodProfile {
    mood: Mood::Chill,
    description: "Laid-back beats for hanging out, cruising and doing not much at all",
    keywords: &[
        "chill", "chilling", "chillin", "laid back", "laid-back", "vibe", "vibing", "vibes",
        "easy", "cool", "hanging out", "hangout", "lounge", "lounging", "lowkey", "low-key",
        "smooth", "floating", "cruising", "weekend", "coffee", "rainy day", "evening",
        "late night", "night drive", "no rush", "go with the flow", "kick back", "unbothered",
        "breezy", "sunset", "mellow",
    ],
    genres: &["lo-fi", "chillhop", "indie", "alternative", "chillout"],
    energy: 0.5,
    valence: 0.6,
    tempo: TempoRange::new(80, 110),
};

/// All mood profiles, in tie-break order
pub const MOOD_PROFILES: &[MoodProfile] = &[
    MOOD_HAPPY,
    MOOD_SAD,
    MOOD_ANGRY,
    MOOD_RELAXED,
    MOOD_ENERGETIC,
    MOOD_ROMANTIC,
    MOOD_NOSTALGIC,
    MOOD_ANXIOUS,
    MOOD_CONFIDENT,
    MOOD_THOUGHTFUL,
    MOOD_CHILL,
];

/// Get all mood profiles
pub fn get_all_profiles() -> &'static [MoodProfile] {
    MOOD_PROFILES
}

/// Get the profile for a mood
pub fn get_profile(mood: Mood) -> Option<&'static MoodProfile> {
    MOOD_PROFILES.iter().find(|p| p.mood == mood)
}

/// Get a profile by its name (case-insensitive)
pub fn get_profile_by_name(name: &str) -> Option<&'static MoodProfile> {
    name.parse::<Mood>().ok().and_then(get_profile)
}

// ============================================================================
// Qualitative characterization
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValenceLevel {
    Negative,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempoFeel {
    Slow,
    Moderate,
    Fast,
}

/// Number of keywords exposed as a sample in mood metadata
const SAMPLE_KEYWORDS: usize = 5;

impl MoodProfile {
    pub fn energy_level(&self) -> EnergyLevel {
        if self.energy > 0.7 {
            EnergyLevel::High
        } else if self.energy >= 0.4 {
            EnergyLevel::Medium
        } else {
            EnergyLevel::Low
        }
    }

    pub fn valence_level(&self) -> ValenceLevel {
        if self.valence > 0.6 {
            ValenceLevel::Positive
        } else if self.valence >= 0.4 {
            ValenceLevel::Neutral
        } else {
            ValenceLevel::Negative
        }
    }

    pub fn tempo_feel(&self) -> TempoFeel {
        if self.tempo.min >= 120 {
            TempoFeel::Fast
        } else if self.tempo.max <= 100 {
            TempoFeel::Slow
        } else {
            TempoFeel::Moderate
        }
    }

    /// First few keywords, for documentation and discovery
    pub fn sample_keywords(&self) -> &'static [&'static str] {
        &self.keywords[..self.keywords.len().min(SAMPLE_KEYWORDS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_mood_once() {
        assert_eq!(MOOD_PROFILES.len(), Mood::ALL.len());
        for (profile, mood) in MOOD_PROFILES.iter().zip(Mood::ALL) {
            assert_eq!(profile.mood, mood);
        }
    }

    #[test]
    fn test_profile_invariants() {
        for profile in get_all_profiles() {
            assert!((0.0..=1.0).contains(&profile.energy), "{}", profile.mood);
            assert!((0.0..=1.0).contains(&profile.valence), "{}", profile.mood);
            assert!(profile.tempo.min < profile.tempo.max, "{}", profile.mood);
            assert!(!profile.genres.is_empty(), "{}", profile.mood);
            assert!(
                (30..=40).contains(&profile.keywords.len()),
                "{} has {} keywords",
                profile.mood,
                profile.keywords.len()
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase_and_trimmed() {
        for profile in get_all_profiles() {
            for keyword in profile.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
                assert_eq!(*keyword, keyword.trim());
            }
        }
    }

    #[test]
    fn test_mood_parse_and_display() {
        assert_eq!("Happy".parse::<Mood>(), Ok(Mood::Happy));
        assert_eq!(" chill ".parse::<Mood>(), Ok(Mood::Chill));
        assert!("grumpy".parse::<Mood>().is_err());
        assert_eq!(Mood::Thoughtful.to_string(), "thoughtful");
    }

    #[test]
    fn test_get_profile_by_name() {
        let profile = get_profile_by_name("SAD").unwrap();
        assert_eq!(profile.mood, Mood::Sad);
        assert!(get_profile_by_name("unknown").is_none());
    }

    #[test]
    fn test_qualitative_levels() {
        assert_eq!(MOOD_ANGRY.energy_level(), EnergyLevel::High);
        assert_eq!(MOOD_CHILL.energy_level(), EnergyLevel::Medium);
        assert_eq!(MOOD_SAD.energy_level(), EnergyLevel::Low);

        assert_eq!(MOOD_HAPPY.valence_level(), ValenceLevel::Positive);
        assert_eq!(MOOD_NOSTALGIC.valence_level(), ValenceLevel::Neutral);
        assert_eq!(MOOD_ANXIOUS.valence_level(), ValenceLevel::Negative);

        assert_eq!(MOOD_ENERGETIC.tempo_feel(), TempoFeel::Fast);
        assert_eq!(MOOD_RELAXED.tempo_feel(), TempoFeel::Slow);
        assert_eq!(MOOD_CHILL.tempo_feel(), TempoFeel::Moderate);
    }

    #[test]
    fn test_sample_keywords() {
        assert_eq!(
            MOOD_HAPPY.sample_keywords(),
            &["happy", "joy", "joyful", "cheerful", "glad"]
        );
    }

    #[test]
    fn test_affect_alignment() {
        assert_eq!(Mood::Confident.affect(), Affect::Positive);
        assert_eq!(Mood::Anxious.affect(), Affect::Negative);
        assert_eq!(Mood::Thoughtful.affect(), Affect::Even);
        assert_eq!(Mood::Nostalgic.affect(), Affect::Unaligned);
    }
}
