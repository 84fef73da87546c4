use std::collections::BTreeSet;

use crate::influence::domain::{
    BurstPattern, CommentFrequency, DiscussionScene, EngagementLevel, ExternalDiscussion,
    FollowerTier, LongCommentRatio, MediaInfluenceInput, MultiPlatformSync, Platform,
    UpdateFrequency,
};

/// Mid-table douyin account with definite answers everywhere.
pub(super) fn baseline_input() -> MediaInfluenceInput {
    MediaInfluenceInput {
        account_name: "TestAcct".to_string(),
        platform: Platform::Douyin,
        follower_tier: FollowerTier::Growing,
        update_frequency: UpdateFrequency::Weekly,
        engagement_level: EngagementLevel::AboveAverage,
        burst_pattern: BurstPattern::Normal,
        long_comment_ratio: LongCommentRatio::Some,
        personal_stories: CommentFrequency::Sometimes,
        debate_level: CommentFrequency::Sometimes,
        self_multi_platform: MultiPlatformSync::No,
        external_discussion: ExternalDiscussion::None,
        discussion_scenes: BTreeSet::new(),
    }
}

/// Best answer for every question, with every discussion scene selected.
pub(super) fn maximal_input(platform: Platform) -> MediaInfluenceInput {
    MediaInfluenceInput {
        account_name: "Signal Boost".to_string(),
        platform,
        follower_tier: FollowerTier::SuperTop,
        update_frequency: UpdateFrequency::Daily,
        engagement_level: EngagementLevel::FarAbove,
        burst_pattern: BurstPattern::Explosive,
        long_comment_ratio: LongCommentRatio::Many,
        personal_stories: CommentFrequency::Common,
        debate_level: CommentFrequency::Common,
        self_multi_platform: MultiPlatformSync::Yes,
        external_discussion: ExternalDiscussion::Often,
        discussion_scenes: DiscussionScene::ALL.iter().copied().collect(),
    }
}

/// Every combination of answers that moves a score, for exhaustive property checks.
pub(super) fn all_scoring_inputs() -> Vec<MediaInfluenceInput> {
    let scene_sets: Vec<BTreeSet<DiscussionScene>> = vec![
        BTreeSet::new(),
        [DiscussionScene::Other].into_iter().collect(),
        [DiscussionScene::Media].into_iter().collect(),
        DiscussionScene::ALL.iter().copied().collect(),
    ];

    let mut inputs = Vec::new();
    for platform in Platform::ALL {
        for engagement_level in EngagementLevel::ALL {
            for burst_pattern in BurstPattern::ALL {
                for long_comment_ratio in LongCommentRatio::ALL {
                    for personal_stories in CommentFrequency::ALL {
                        for debate_level in CommentFrequency::ALL {
                            for external_discussion in ExternalDiscussion::ALL {
                                for scenes in &scene_sets {
                                    inputs.push(MediaInfluenceInput {
                                        account_name: "Grid".to_string(),
                                        platform: *platform,
                                        engagement_level: *engagement_level,
                                        burst_pattern: *burst_pattern,
                                        long_comment_ratio: *long_comment_ratio,
                                        personal_stories: *personal_stories,
                                        debate_level: *debate_level,
                                        external_discussion: *external_discussion,
                                        discussion_scenes: scenes.clone(),
                                        ..MediaInfluenceInput::default()
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    inputs
}
