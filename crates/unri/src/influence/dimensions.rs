use super::domain::{
    BurstPattern, CommentFrequency, DiscussionScene, EngagementLevel, ExternalDiscussion,
    LongCommentRatio, MediaInfluenceInput, MultiPlatformSync,
};

/// Upper bound on the bonus discussion scenes can add to the bridge score.
const SCENE_BONUS_CAP: u32 = 15;
/// Points each distinct discussion scene adds before the cap.
const SCENE_COUNT_POINTS: u32 = 2;

/// Raw score for a single dimension along with its narrative explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DimensionResult {
    pub score: u8,
    pub explanation: String,
}

fn engagement_level_score(level: EngagementLevel) -> u32 {
    match level {
        EngagementLevel::BelowAverage => 25,
        EngagementLevel::Average => 50,
        EngagementLevel::AboveAverage => 75,
        EngagementLevel::FarAbove => 95,
    }
}

fn burst_pattern_score(pattern: BurstPattern) -> u32 {
    match pattern {
        BurstPattern::Slow => 35,
        BurstPattern::Normal => 60,
        BurstPattern::Explosive => 90,
    }
}

fn long_comment_score(ratio: LongCommentRatio) -> u32 {
    match ratio {
        LongCommentRatio::None => 15,
        LongCommentRatio::Few => 40,
        LongCommentRatio::Some => 70,
        LongCommentRatio::Many => 95,
    }
}

/// Shared by personal-story and debate answers.
fn comment_frequency_score(frequency: CommentFrequency) -> u32 {
    match frequency {
        CommentFrequency::Rare => 20,
        CommentFrequency::Sometimes => 55,
        CommentFrequency::Common => 90,
    }
}

fn external_discussion_score(discussion: ExternalDiscussion) -> u32 {
    match discussion {
        ExternalDiscussion::None => 15,
        ExternalDiscussion::Occasionally => 50,
        ExternalDiscussion::Often => 90,
        // conservative midpoint when the respondent cannot tell
        ExternalDiscussion::Unknown => 40,
    }
}

/// Scene weight in tenths (media 1.0 -> 10).
fn scene_weight_tenths(scene: DiscussionScene) -> u32 {
    match scene {
        DiscussionScene::Media => 10,
        DiscussionScene::Recreate => 9,
        DiscussionScene::Weibo => 8,
        DiscussionScene::Zhihu => 7,
        DiscussionScene::Wechat => 6,
        DiscussionScene::Other => 5,
    }
}

fn round_tenths(value: u32) -> u8 {
    ((value + 5) / 10).min(100) as u8
}

pub(crate) fn engagement_velocity(input: &MediaInfluenceInput) -> DimensionResult {
    let level_score = engagement_level_score(input.engagement_level);
    let burst_score = burst_pattern_score(input.burst_pattern);
    let score = round_tenths(level_score * 7 + burst_score * 3);

    let mut explanation = if score >= 80 {
        "Engagement is very strong: new posts draw a fast, heavy response and the recommendation algorithm amplifies them efficiently."
    } else if score >= 60 {
        "Engagement is healthy and sits in the upper half of accounts this size, giving content a dependable reach."
    } else if score >= 40 {
        "Engagement is ordinary with no clear edge over accounts this size; topic selection or posting times may need tuning."
    } else {
        "Engagement is weak and content reaches few people; revisit topic choice and publishing cadence."
    }
    .to_string();

    if input.burst_pattern == BurstPattern::Slow && level_score >= 50 {
        explanation.push_str(
            " Although posts are slow to take off, they end up with solid interaction, which points to long-tail value.",
        );
    }

    DimensionResult { score, explanation }
}

pub(crate) fn semantic_depth(input: &MediaInfluenceInput) -> DimensionResult {
    let long_comments = long_comment_score(input.long_comment_ratio);
    let personal = comment_frequency_score(input.personal_stories);
    let debate = comment_frequency_score(input.debate_level);
    let score = round_tenths(long_comments * 3 + personal * 4 + debate * 3);

    let mut explanation = if score >= 80 {
        "The comment section is exceptional: viewers share personal experiences, express real emotion and join in-depth discussion, the hallmark of strong resonance."
    } else if score >= 60 {
        "The comment section has real depth; part of the audience responds thoughtfully, showing the content strikes an emotional chord."
    } else if score >= 40 {
        "Comments are mostly short reactions with little in-depth discussion, so participation stays on the surface."
    } else {
        "The comment section is shallow, mostly quick likes and one-line replies, with little genuine emotional connection."
    }
    .to_string();

    if input.personal_stories == CommentFrequency::Common
        && input.long_comment_ratio != LongCommentRatio::Many
    {
        explanation.push_str(
            " Notably, even without many long comments, viewers often answer with personal stories, so the content is hitting an emotional nerve.",
        );
    }

    DimensionResult { score, explanation }
}

/// Bonus in whole points from the observed discussion scenes; zero unless discussion was
/// actually observed.
pub(crate) fn scene_bonus(input: &MediaInfluenceInput) -> u32 {
    if !input.external_discussion.is_observed() {
        return 0;
    }

    let Some(max_weight) = input
        .discussion_scenes
        .iter()
        .map(|scene| scene_weight_tenths(*scene))
        .max()
    else {
        return 0;
    };

    let scene_count = input.discussion_scenes.len() as u32;
    (max_weight + scene_count * SCENE_COUNT_POINTS).min(SCENE_BONUS_CAP)
}

pub(crate) fn cross_platform_bridge(input: &MediaInfluenceInput) -> DimensionResult {
    let base = external_discussion_score(input.external_discussion);
    let score = (base + scene_bonus(input)).min(100) as u8;

    let mut explanation = if score >= 80 {
        "Content travels well beyond its home platform: people elsewhere regularly discuss, cite or repost it, so influence has broken past a single platform."
    } else if score >= 55 {
        "Content occasionally breaks out and draws discussion on other platforms, showing some cross-platform potential."
    } else if score >= 35 {
        "Content mostly circulates on its home platform with limited reach elsewhere, which is normal for most creators."
    } else {
        "No clear cross-platform spread has been observed; influence stays within a single platform."
    }
    .to_string();

    if input.self_multi_platform == MultiPlatformSync::Yes {
        if input.external_discussion.is_observed() {
            explanation.push_str(
                " The creator publishes across platforms and others genuinely pick the content up, so distribution and content quality reinforce each other.",
            );
        } else {
            explanation.push_str(
                " The creator syncs content across platforms, but that is a distribution strategy rather than organic breakout.",
            );
        }
    }

    DimensionResult { score, explanation }
}
