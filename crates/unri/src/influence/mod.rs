//! UNRI (User-Network Resonance Index) scoring for creator media-influence questionnaires.
//!
//! Scoring is a pure, single-pass pipeline: three dimension scorers, a platform weight lookup,
//! weighted aggregation, a confidence estimate over the raw answers, and finally tag detection
//! and narrative generation. Nothing is cached between calls, so the functions here can be
//! shared freely across threads.

mod confidence;
mod dimensions;
pub mod domain;
mod narrative;
pub mod report;
mod tags;
pub mod weights;

#[cfg(test)]
mod tests;

pub use confidence::ConfidenceLevel;
pub use domain::{
    BurstPattern, CommentFrequency, DiscussionScene, EngagementLevel, ExternalDiscussion,
    FollowerTier, InputError, LongCommentRatio, MediaInfluenceInput, MultiPlatformSync, Platform,
    UpdateFrequency,
};
pub use report::{DimensionScore, ScoreReport};
pub use tags::SpecialTag;
pub use weights::PlatformWeights;

use dimensions::DimensionResult;
use tags::ScoreProfile;
use weights::{fraction, weighted_contribution};

/// Questionnaire with every answer at its neutral starting value.
pub fn create_empty_input() -> MediaInfluenceInput {
    MediaInfluenceInput::default()
}

/// Scores a questionnaire. Total for every well-typed input; callers gate on
/// [`MediaInfluenceInput::validate_submission`] beforehand if they need a named account.
pub fn calculate_score(input: &MediaInfluenceInput) -> ScoreReport {
    let weights = PlatformWeights::for_platform(input.platform);

    let engagement = dimensions::engagement_velocity(input);
    let semantic = dimensions::semantic_depth(input);
    let bridge = dimensions::cross_platform_bridge(input);

    let profile = ScoreProfile {
        engagement: engagement.score,
        semantic: semantic.score,
        bridge: bridge.score,
        total: weights.aggregate(engagement.score, semantic.score, bridge.score),
    };

    let confidence = confidence::assess_confidence(input);
    let special_tags = tags::detect_tags(&profile);
    let summary = narrative::summary(input, &profile, &special_tags);

    ScoreReport {
        total_score: profile.total,
        engagement_velocity: dimension_score(engagement, weights.engagement_velocity),
        semantic_depth: dimension_score(semantic, weights.semantic_depth),
        cross_platform_bridge: dimension_score(bridge, weights.cross_platform_bridge),
        confidence: confidence.level,
        confidence_explanation: confidence.explanation,
        special_tags,
        summary,
        platform_weight_note: narrative::platform_weight_note(input.platform),
    }
}

fn dimension_score(result: DimensionResult, percent: u8) -> DimensionScore {
    DimensionScore {
        score: result.score,
        weight: fraction(percent),
        weighted_score: weighted_contribution(result.score, percent),
        explanation: result.explanation,
    }
}
