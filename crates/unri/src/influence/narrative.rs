use super::domain::{MediaInfluenceInput, Platform};
use super::tags::{tag_passage, ScoreProfile, SpecialTag};
use super::weights::{PlatformWeights, BASELINE_WEIGHTS};

/// Minimum gap between the strongest and weakest dimension worth calling out.
const IMBALANCE_THRESHOLD: u8 = 20;

fn grade(total: u8) -> &'static str {
    match total {
        0..=39 => "in need of attention",
        40..=54 => "below expectations",
        55..=69 => "average",
        70..=84 => "good",
        _ => "excellent",
    }
}

pub(crate) fn summary(
    input: &MediaInfluenceInput,
    scores: &ScoreProfile,
    tags: &[SpecialTag],
) -> String {
    let mut paragraphs = vec![format!(
        "\"{}\" scores {} on the UNRI composite influence index for {}; overall performance is {}.",
        input.account_name,
        scores.total,
        input.platform.label(),
        grade(scores.total)
    )];

    let dimensions = [
        ("engagement velocity", scores.engagement),
        ("semantic depth", scores.semantic),
        ("cross-platform bridge", scores.bridge),
    ];

    // first maximum and last minimum, so ties resolve in dimension order
    let mut strongest = dimensions[0];
    let mut weakest = dimensions[0];
    for dimension in &dimensions[1..] {
        if dimension.1 > strongest.1 {
            strongest = *dimension;
        }
        if dimension.1 <= weakest.1 {
            weakest = *dimension;
        }
    }

    if strongest.1 - weakest.1 >= IMBALANCE_THRESHOLD {
        paragraphs.push(format!(
            "Its standout strength is {} ({}), while {} ({}) lags behind and has room to grow.",
            strongest.0, strongest.1, weakest.0, weakest.1
        ));
    } else {
        paragraphs.push(
            "The three dimensions are fairly balanced, with no obvious weak spot.".to_string(),
        );
    }

    let passage = tag_passage(tags);
    if !passage.is_empty() {
        paragraphs.push(passage);
    }

    paragraphs.join("\n\n")
}

/// Explains how the platform's weight profile departs from the balanced baseline.
pub(crate) fn platform_weight_note(platform: Platform) -> String {
    let weights = PlatformWeights::for_platform(platform);
    let name = platform.label();

    match platform {
        Platform::Douyin => format!(
            "On {name}, engagement velocity is weighted up to {}% (baseline {}%) because the recommendation algorithm leans heavily on early interaction. Semantic depth drops to {}% since short-video comment sections are naturally shallow.",
            weights.engagement_velocity,
            BASELINE_WEIGHTS.engagement_velocity,
            weights.semantic_depth
        ),
        Platform::Bilibili => format!(
            "On {name}, semantic depth is weighted up to {}% (baseline {}%) because users readily post bullet comments and long replies in a mature comment culture.",
            weights.semantic_depth,
            BASELINE_WEIGHTS.semantic_depth
        ),
        Platform::Xiaoyuzhou => format!(
            "On {name}, semantic depth is weighted up to {}% (baseline {}%) because podcast listeners tend to be deeper and more loyal, leaving higher-quality comments. Engagement velocity drops to {}% since podcasts see less interaction than video platforms by the nature of the medium.",
            weights.semantic_depth,
            BASELINE_WEIGHTS.semantic_depth,
            weights.engagement_velocity
        ),
        Platform::WeixinVideo => format!(
            "On {name}, cross-platform bridge is weighted up to {}% (baseline {}%) because the platform is embedded in the WeChat social graph, where content spreads easily through groups and Moments.",
            weights.cross_platform_bridge,
            BASELINE_WEIGHTS.cross_platform_bridge
        ),
        Platform::WeixinGzh => format!(
            "On {name}, semantic depth is weighted up to {}% (baseline {}%) because readers bring stronger reading habits and a greater willingness to comment.",
            weights.semantic_depth,
            BASELINE_WEIGHTS.semantic_depth
        ),
        Platform::Other => format!(
            "The platform is \"other\", so the balanced default weights apply (engagement velocity {}%, semantic depth {}%, cross-platform bridge {}%). Choosing a specific platform makes the assessment more accurate.",
            weights.engagement_velocity,
            weights.semantic_depth,
            weights.cross_platform_bridge
        ),
    }
}
