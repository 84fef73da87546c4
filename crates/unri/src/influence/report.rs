use super::confidence::ConfidenceLevel;
use super::tags::SpecialTag;
use serde::{Deserialize, Serialize};

/// Outcome for one scoring dimension, kept separate so audits can trace the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u8,
    /// Share of the total as a fraction; the three shares sum to 1.0.
    pub weight: f64,
    pub weighted_score: u8,
    pub explanation: String,
}

/// Complete UNRI assessment for one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub total_score: u8,
    pub engagement_velocity: DimensionScore,
    pub semantic_depth: DimensionScore,
    pub cross_platform_bridge: DimensionScore,
    pub confidence: ConfidenceLevel,
    pub confidence_explanation: String,
    pub special_tags: Vec<SpecialTag>,
    pub summary: String,
    pub platform_weight_note: String,
}

impl ScoreReport {
    /// Dimension outcomes in their canonical order, paired with display names.
    pub fn dimensions(&self) -> [(&'static str, &DimensionScore); 3] {
        [
            ("Engagement velocity", &self.engagement_velocity),
            ("Semantic depth", &self.semantic_depth),
            ("Cross-platform bridge", &self.cross_platform_bridge),
        ]
    }

    pub fn has_tag(&self, tag: SpecialTag) -> bool {
        self.special_tags.contains(&tag)
    }
}
