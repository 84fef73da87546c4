//! End-to-end checks of the public scoring facade and its JSON wire format.

use serde_json::json;
use unri::influence::{
    calculate_score, create_empty_input, BurstPattern, CommentFrequency, ConfidenceLevel,
    DiscussionScene, EngagementLevel, ExternalDiscussion, InputError, LongCommentRatio,
    MediaInfluenceInput, MultiPlatformSync, Platform, ScoreReport, SpecialTag,
};

fn submitted(account: &str) -> MediaInfluenceInput {
    MediaInfluenceInput {
        account_name: account.to_string(),
        ..create_empty_input()
    }
}

#[test]
fn empty_input_matches_documented_defaults() {
    let input = create_empty_input();
    let value = serde_json::to_value(&input).expect("input serializes");

    assert_eq!(
        value,
        json!({
            "account_name": "",
            "platform": "douyin",
            "follower_tier": "growing",
            "update_frequency": "weekly",
            "engagement_level": "average",
            "burst_pattern": "normal",
            "long_comment_ratio": "few",
            "personal_stories": "sometimes",
            "debate_level": "sometimes",
            "self_multi_platform": "unknown",
            "external_discussion": "unknown",
            "discussion_scenes": []
        })
    );
    assert_eq!(input, MediaInfluenceInput::default());
}

#[test]
fn submission_gate_requires_an_account_name() {
    assert_eq!(
        create_empty_input().validate_submission(),
        Err(InputError::MissingAccountName)
    );
    assert_eq!(
        submitted("   ").validate_submission(),
        Err(InputError::MissingAccountName)
    );
    assert!(submitted("Night Owl Radio").validate_submission().is_ok());
}

#[test]
fn partial_json_answers_fall_back_to_neutral_defaults() {
    let input: MediaInfluenceInput = serde_json::from_value(json!({
        "account_name": "Night Owl Radio",
        "platform": "xiaoyuzhou",
        "external_discussion": "occasionally",
        "discussion_scenes": ["zhihu", "media", "zhihu"]
    }))
    .expect("partial questionnaire parses");

    assert_eq!(input.platform, Platform::Xiaoyuzhou);
    assert_eq!(input.self_multi_platform, MultiPlatformSync::Unknown);
    assert_eq!(input.discussion_scenes.len(), 2);
    assert!(input.discussion_scenes.contains(&DiscussionScene::Media));

    let report = calculate_score(&input);
    // occasionally (50) + min(15, 1.0 * 10 + 2 * 2)
    assert_eq!(report.cross_platform_bridge.score, 64);
    assert_eq!(report.confidence, ConfidenceLevel::Medium);
}

#[test]
fn official_account_total_follows_floating_point_weighted_sum() {
    let input = MediaInfluenceInput {
        platform: Platform::WeixinGzh,
        engagement_level: EngagementLevel::FarAbove,
        burst_pattern: BurstPattern::Slow,
        long_comment_ratio: LongCommentRatio::Some,
        personal_stories: CommentFrequency::Rare,
        debate_level: CommentFrequency::Rare,
        external_discussion: ExternalDiscussion::Occasionally,
        discussion_scenes: [DiscussionScene::Wechat].into_iter().collect(),
        ..submitted("Evening Letters")
    };

    let report = calculate_score(&input);

    assert_eq!(report.engagement_velocity.score, 77);
    assert_eq!(report.semantic_depth.score, 35);
    assert_eq!(report.cross_platform_bridge.score, 58);
    // the weighted sum evaluates to 54.49999999999999 in f64
    assert_eq!(report.total_score, 54);
    assert_eq!(report.engagement_velocity.weighted_score, 23);
    assert_eq!(report.semantic_depth.weighted_score, 14);
    assert_eq!(report.cross_platform_bridge.weighted_score, 17);
}

#[test]
fn unknown_enum_values_are_rejected() {
    let parsed = serde_json::from_value::<MediaInfluenceInput>(json!({
        "account_name": "Night Owl Radio",
        "platform": "myspace"
    }));
    assert!(parsed.is_err());

    match "sometimes-ish".parse::<ExternalDiscussion>() {
        Err(InputError::UnrecognizedValue { field, value }) => {
            assert_eq!(field, "external_discussion");
            assert_eq!(value, "sometimes-ish");
        }
        other => panic!("expected unrecognized value, got {other:?}"),
    }
    assert_eq!(
        " Weixin_Video ".parse::<Platform>(),
        Ok(Platform::WeixinVideo)
    );
}

#[test]
fn report_round_trips_through_json_with_snake_case_tags() {
    let input = MediaInfluenceInput {
        platform: Platform::WeixinVideo,
        self_multi_platform: MultiPlatformSync::Yes,
        external_discussion: ExternalDiscussion::Often,
        discussion_scenes: [DiscussionScene::Weibo].into_iter().collect(),
        ..submitted("Harbor Lights")
    };
    let report = calculate_score(&input);
    assert!(report.has_tag(SpecialTag::CrossPlatformStar));

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["confidence"], "high");
    assert_eq!(value["cross_platform_bridge"]["score"], 100);
    assert!(value["special_tags"]
        .as_array()
        .expect("tags array")
        .contains(&json!("cross_platform_star")));

    let decoded: ScoreReport = serde_json::from_value(value).expect("report deserializes");
    assert_eq!(decoded, report);
}

#[test]
fn reports_are_safe_to_compute_across_threads() {
    let handles: Vec<_> = Platform::ALL
        .iter()
        .map(|platform| {
            let input = MediaInfluenceInput {
                platform: *platform,
                ..submitted("Thread Safe")
            };
            std::thread::spawn(move || (calculate_score(&input), input))
        })
        .collect();

    for handle in handles {
        let (report, input) = handle.join().expect("scoring thread completes");
        assert_eq!(report, calculate_score(&input));
    }
}
