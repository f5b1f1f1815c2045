use serde::{Deserialize, Serialize};

use crate::critique::parser::TierThresholds;

/// Body of `POST /api/critique`.
///
/// Missing fields deserialize as empty strings so they fail validation
/// with the same message as blank ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub filename: String,
}

/// Coarse severity label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastLevel {
    Mild,
    Medium,
    Spicy,
    Nuclear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CritiqueResponse {
    pub critique: String,
    pub score: u32,
    pub roast_level: RoastLevel,
}

impl CritiqueResponse {
    /// The only constructor: the level always comes from `score` via `tiers`.
    pub fn scored(critique: String, score: u32, tiers: &TierThresholds) -> Self {
        Self {
            critique,
            score,
            roast_level: tiers.classify(score),
        }
    }
}
