use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rejections raised while building a questionnaire from untyped answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unrecognized value '{value}' for {field}")]
    UnrecognizedValue { field: &'static str, value: String },
    #[error("account name is required before scoring")]
    MissingAccountName,
}

/// Declares a closed questionnaire answer set with its wire name and display label.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = InputError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(InputError::UnrecognizedValue {
                        field: $field,
                        value: raw.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    /// Publishing platform the account primarily lives on.
    Platform, "platform" {
        Douyin => "douyin", "Douyin";
        Bilibili => "bilibili", "Bilibili";
        Xiaoyuzhou => "xiaoyuzhou", "Xiaoyuzhou Podcasts";
        WeixinVideo => "weixin_video", "WeChat Channels";
        WeixinGzh => "weixin_gzh", "WeChat Official Accounts";
        Other => "other", "Other platforms";
    }
}

answer_enum! {
    FollowerTier, "follower_tier" {
        Seed => "seed", "Seed (<10K)";
        Growing => "growing", "Growing (10K-100K)";
        Mid => "mid", "Mid-tier (100K-1M)";
        Top => "top", "Top (1M-5M)";
        SuperTop => "super_top", "Super top (>5M)";
    }
}

answer_enum! {
    UpdateFrequency, "update_frequency" {
        Daily => "daily", "Daily";
        Weekly => "weekly", "Weekly";
        Monthly => "monthly", "Monthly";
        Irregular => "irregular", "Irregular";
    }
}

answer_enum! {
    /// Typical interaction level relative to accounts of the same size.
    EngagementLevel, "engagement_level" {
        BelowAverage => "below_avg", "Clearly below average";
        Average => "average", "Close to average";
        AboveAverage => "above_avg", "Clearly above average";
        FarAbove => "far_above", "Far above average";
    }
}

answer_enum! {
    /// How quickly a new post picks up traction.
    BurstPattern, "burst_pattern" {
        Slow => "slow", "Slow burn (picks up after days)";
        Normal => "normal", "Normal (steady growth within 24h)";
        Explosive => "explosive", "Explosive (takes off within hours)";
    }
}

answer_enum! {
    LongCommentRatio, "long_comment_ratio" {
        None => "none", "Almost none";
        Few => "few", "A few";
        Some => "some", "Quite a few";
        Many => "many", "A lot";
    }
}

answer_enum! {
    /// Shared three-step frequency scale for personal stories and debate.
    CommentFrequency, "comment_frequency" {
        Rare => "rare", "Rarely";
        Sometimes => "sometimes", "Sometimes";
        Common => "common", "Commonly";
    }
}

answer_enum! {
    MultiPlatformSync, "self_multi_platform" {
        Yes => "yes", "Yes";
        No => "no", "No";
        Unknown => "unknown", "Not sure";
    }
}

answer_enum! {
    /// Whether other people bring the account's content to other platforms.
    ExternalDiscussion, "external_discussion" {
        None => "none", "Not observed";
        Occasionally => "occasionally", "Occasionally";
        Often => "often", "Often";
        Unknown => "unknown", "Not sure";
    }
}

answer_enum! {
    DiscussionScene, "discussion_scene" {
        Weibo => "weibo", "Trending on Weibo";
        Zhihu => "zhihu", "Cited in Zhihu answers";
        Wechat => "wechat", "Shared in WeChat groups and Moments";
        Media => "media", "Covered by media outlets";
        Recreate => "recreate", "Remixed on other platforms";
        Other => "other", "Other";
    }
}

impl ExternalDiscussion {
    /// Discussion was actually observed, so scene answers carry signal.
    pub fn is_observed(&self) -> bool {
        matches!(self, ExternalDiscussion::Occasionally | ExternalDiscussion::Often)
    }
}

/// One questionnaire answer set. Built fresh for each evaluation; omitted answers take the
/// neutral defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaInfluenceInput {
    pub account_name: String,
    pub platform: Platform,
    pub follower_tier: FollowerTier,
    pub update_frequency: UpdateFrequency,

    pub engagement_level: EngagementLevel,
    pub burst_pattern: BurstPattern,

    pub long_comment_ratio: LongCommentRatio,
    pub personal_stories: CommentFrequency,
    pub debate_level: CommentFrequency,

    pub self_multi_platform: MultiPlatformSync,
    pub external_discussion: ExternalDiscussion,
    pub discussion_scenes: BTreeSet<DiscussionScene>,
}

impl MediaInfluenceInput {
    /// Mirrors the submit gate callers apply before asking for a score.
    pub fn validate_submission(&self) -> Result<(), InputError> {
        if self.account_name.trim().is_empty() {
            return Err(InputError::MissingAccountName);
        }
        Ok(())
    }
}

impl Default for MediaInfluenceInput {
    fn default() -> Self {
        Self {
            account_name: String::new(),
            platform: Platform::Douyin,
            follower_tier: FollowerTier::Growing,
            update_frequency: UpdateFrequency::Weekly,
            engagement_level: EngagementLevel::Average,
            burst_pattern: BurstPattern::Normal,
            long_comment_ratio: LongCommentRatio::Few,
            personal_stories: CommentFrequency::Sometimes,
            debate_level: CommentFrequency::Sometimes,
            self_multi_platform: MultiPlatformSync::Unknown,
            external_discussion: ExternalDiscussion::Unknown,
            discussion_scenes: BTreeSet::new(),
        }
    }
}
