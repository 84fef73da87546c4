use super::domain::Platform;
use serde::Serialize;

/// Per-platform weight profile, stored in whole percentage points so the three shares always
/// add up to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformWeights {
    pub engagement_velocity: u8,
    pub semantic_depth: u8,
    pub cross_platform_bridge: u8,
}

/// Balanced profile used when no platform-specific tuning applies.
pub const BASELINE_WEIGHTS: PlatformWeights = PlatformWeights {
    engagement_velocity: 35,
    semantic_depth: 35,
    cross_platform_bridge: 30,
};

impl PlatformWeights {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Douyin => Self::new(45, 25, 30),
            Platform::Bilibili => Self::new(35, 40, 25),
            Platform::Xiaoyuzhou => Self::new(20, 50, 30),
            Platform::WeixinVideo => Self::new(30, 30, 40),
            Platform::WeixinGzh => Self::new(30, 40, 30),
            Platform::Other => BASELINE_WEIGHTS,
        }
    }

    const fn new(engagement_velocity: u8, semantic_depth: u8, cross_platform_bridge: u8) -> Self {
        Self {
            engagement_velocity,
            semantic_depth,
            cross_platform_bridge,
        }
    }

    pub fn total_percent(&self) -> u16 {
        u16::from(self.engagement_velocity)
            + u16::from(self.semantic_depth)
            + u16::from(self.cross_platform_bridge)
    }

    /// Combines raw dimension scores into the 0-100 total. The weighted sum is taken in `f64`
    /// over the fractional shares, left to right, and rounded once.
    pub fn aggregate(&self, engagement: u8, semantic: u8, bridge: u8) -> u8 {
        let weighted = contribution(engagement, self.engagement_velocity)
            + contribution(semantic, self.semantic_depth)
            + contribution(bridge, self.cross_platform_bridge);
        to_score(weighted)
    }
}

pub(crate) fn fraction(percent: u8) -> f64 {
    f64::from(percent) / 100.0
}

/// A single dimension's share of the total, rounded on its own for display.
pub(crate) fn weighted_contribution(score: u8, percent: u8) -> u8 {
    to_score(contribution(score, percent))
}

fn contribution(score: u8, percent: u8) -> f64 {
    f64::from(score) * fraction(percent)
}

// halves round away from zero; inputs are never negative
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
