use crate::infra::parse_answer;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use unri::error::AppError;
use unri::influence::{
    calculate_score, create_empty_input, BurstPattern, CommentFrequency, DiscussionScene,
    EngagementLevel, ExternalDiscussion, FollowerTier, LongCommentRatio, MediaInfluenceInput,
    MultiPlatformSync, Platform, ScoreReport, UpdateFrequency,
};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Questionnaire JSON file; individual flags override its answers
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Account name shown in the report
    #[arg(long)]
    pub(crate) account: Option<String>,
    #[arg(long, value_parser = parse_answer::<Platform>)]
    pub(crate) platform: Option<Platform>,
    #[arg(long, value_parser = parse_answer::<FollowerTier>)]
    pub(crate) follower_tier: Option<FollowerTier>,
    #[arg(long, value_parser = parse_answer::<UpdateFrequency>)]
    pub(crate) update_frequency: Option<UpdateFrequency>,
    /// Interaction level relative to similar accounts (below_avg, average, above_avg, far_above)
    #[arg(long, value_parser = parse_answer::<EngagementLevel>)]
    pub(crate) engagement: Option<EngagementLevel>,
    /// How fast posts take off (slow, normal, explosive)
    #[arg(long, value_parser = parse_answer::<BurstPattern>)]
    pub(crate) burst: Option<BurstPattern>,
    /// Share of long comments (none, few, some, many)
    #[arg(long, value_parser = parse_answer::<LongCommentRatio>)]
    pub(crate) long_comments: Option<LongCommentRatio>,
    /// How often commenters share personal stories (rare, sometimes, common)
    #[arg(long, value_parser = parse_answer::<CommentFrequency>)]
    pub(crate) personal_stories: Option<CommentFrequency>,
    /// How often comments turn into debate (rare, sometimes, common)
    #[arg(long, value_parser = parse_answer::<CommentFrequency>)]
    pub(crate) debate: Option<CommentFrequency>,
    /// Whether the creator syncs posts to other platforms (yes, no, unknown)
    #[arg(long, value_parser = parse_answer::<MultiPlatformSync>)]
    pub(crate) self_sync: Option<MultiPlatformSync>,
    /// Whether others discuss the content elsewhere (none, occasionally, often, unknown)
    #[arg(long, value_parser = parse_answer::<ExternalDiscussion>)]
    pub(crate) external_discussion: Option<ExternalDiscussion>,
    /// Observed discussion scene; repeat for several
    #[arg(long = "scene", value_parser = parse_answer::<DiscussionScene>)]
    pub(crate) scenes: Vec<DiscussionScene>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    pub(crate) fn into_input(self) -> Result<MediaInfluenceInput, AppError> {
        let mut input = match &self.input {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                serde_json::from_str::<MediaInfluenceInput>(&raw)?
            }
            None => create_empty_input(),
        };

        if let Some(account) = self.account {
            input.account_name = account;
        }
        if let Some(platform) = self.platform {
            input.platform = platform;
        }
        if let Some(tier) = self.follower_tier {
            input.follower_tier = tier;
        }
        if let Some(frequency) = self.update_frequency {
            input.update_frequency = frequency;
        }
        if let Some(level) = self.engagement {
            input.engagement_level = level;
        }
        if let Some(pattern) = self.burst {
            input.burst_pattern = pattern;
        }
        if let Some(ratio) = self.long_comments {
            input.long_comment_ratio = ratio;
        }
        if let Some(frequency) = self.personal_stories {
            input.personal_stories = frequency;
        }
        if let Some(frequency) = self.debate {
            input.debate_level = frequency;
        }
        if let Some(sync) = self.self_sync {
            input.self_multi_platform = sync;
        }
        if let Some(discussion) = self.external_discussion {
            input.external_discussion = discussion;
        }
        if !self.scenes.is_empty() {
            input.discussion_scenes = self.scenes.into_iter().collect();
        }

        input.validate_submission()?;
        Ok(input)
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let as_json = args.json;
    let input = args.into_input()?;
    let report = calculate_score(&input);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&input, &report);
    }

    Ok(())
}

pub(crate) fn print_template() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&create_empty_input())?);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("UNRI influence scoring demo");

    for input in demo_accounts() {
        println!();
        render_report(&input, &calculate_score(&input));
    }

    Ok(())
}

fn demo_accounts() -> Vec<MediaInfluenceInput> {
    vec![
        MediaInfluenceInput {
            account_name: "Late Shift Podcast".to_string(),
            platform: Platform::Xiaoyuzhou,
            follower_tier: FollowerTier::Seed,
            update_frequency: UpdateFrequency::Weekly,
            engagement_level: EngagementLevel::Average,
            burst_pattern: BurstPattern::Slow,
            long_comment_ratio: LongCommentRatio::Many,
            personal_stories: CommentFrequency::Common,
            debate_level: CommentFrequency::Sometimes,
            self_multi_platform: MultiPlatformSync::No,
            external_discussion: ExternalDiscussion::None,
            discussion_scenes: Default::default(),
        },
        MediaInfluenceInput {
            account_name: "Street Food Atlas".to_string(),
            platform: Platform::Douyin,
            follower_tier: FollowerTier::Top,
            update_frequency: UpdateFrequency::Daily,
            engagement_level: EngagementLevel::FarAbove,
            burst_pattern: BurstPattern::Explosive,
            long_comment_ratio: LongCommentRatio::Few,
            personal_stories: CommentFrequency::Sometimes,
            debate_level: CommentFrequency::Rare,
            self_multi_platform: MultiPlatformSync::Yes,
            external_discussion: ExternalDiscussion::Often,
            discussion_scenes: [DiscussionScene::Weibo, DiscussionScene::Recreate]
                .into_iter()
                .collect(),
        },
    ]
}

pub(crate) fn render_report(input: &MediaInfluenceInput, report: &ScoreReport) {
    println!("UNRI report for {}", input.account_name);
    println!(
        "Platform: {} | Followers: {} | Updates: {}",
        input.platform.label(),
        input.follower_tier.label(),
        input.update_frequency.label()
    );

    println!(
        "\nTotal score: {} (confidence {})",
        report.total_score,
        report.confidence.label()
    );

    println!("\nDimensions");
    for (name, dimension) in report.dimensions() {
        println!(
            "- {}: {} x {:.0}% = {}",
            name,
            dimension.score,
            dimension.weight * 100.0,
            dimension.weighted_score
        );
        println!("  {}", dimension.explanation);
    }

    if report.special_tags.is_empty() {
        println!("\nSpecial tags: none");
    } else {
        println!("\nSpecial tags");
        for tag in &report.special_tags {
            println!("- {}", tag.label());
        }
    }

    println!("\nSummary\n{}", report.summary);
    println!("\nConfidence\n{}", report.confidence_explanation);
    println!("\nPlatform weighting\n{}", report.platform_weight_note);
}
