//! MoodTunes
//!
//! Infers a listener's mood from free-form text and maps it to music
//! parameters (genres, energy, valence, tempo) that drive catalog
//! recommendations. The engine lives in [`mood`]; [`server`] exposes it over
//! HTTP.

pub mod config;
pub mod error;
pub mod mood;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, Result};

pub use mood::{Analysis, AnalysisError, AnalysisResult, Mood, MoodEngine};
