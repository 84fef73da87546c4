use super::domain::{ExternalDiscussion, MediaInfluenceInput, MultiPlatformSync, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }

    fn from_penalty(penalty: u8) -> Self {
        match penalty {
            0 => ConfidenceLevel::High,
            1..=2 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }
}

/// Answer that weakens trust in the report, with the penalty it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UncertaintySignal {
    ExternalDiscussionUnknown,
    SelfSyncUnknown,
    UntunedPlatform,
}

impl UncertaintySignal {
    pub fn penalty(&self) -> u8 {
        match self {
            UncertaintySignal::ExternalDiscussionUnknown => 2,
            UncertaintySignal::SelfSyncUnknown => 1,
            UncertaintySignal::UntunedPlatform => 1,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UncertaintySignal::ExternalDiscussionUnknown => {
                "cross-platform discussion is uncertain"
            }
            UncertaintySignal::SelfSyncUnknown => "multi-platform syncing is uncertain",
            UncertaintySignal::UntunedPlatform => {
                "the platform is \"other\", so no tuned weight profile applies"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfidenceAssessment {
    pub level: ConfidenceLevel,
    pub explanation: String,
}

pub(crate) fn uncertainty_signals(input: &MediaInfluenceInput) -> Vec<UncertaintySignal> {
    let mut signals = Vec::new();
    if input.external_discussion == ExternalDiscussion::Unknown {
        signals.push(UncertaintySignal::ExternalDiscussionUnknown);
    }
    if input.self_multi_platform == MultiPlatformSync::Unknown {
        signals.push(UncertaintySignal::SelfSyncUnknown);
    }
    if input.platform == Platform::Other {
        signals.push(UncertaintySignal::UntunedPlatform);
    }
    signals
}

fn total_penalty(signals: &[UncertaintySignal]) -> u8 {
    signals.iter().map(UncertaintySignal::penalty).sum()
}

pub(crate) fn assess_confidence(input: &MediaInfluenceInput) -> ConfidenceAssessment {
    let signals = uncertainty_signals(input);
    let level = ConfidenceLevel::from_penalty(total_penalty(&signals));
    let listed = signals
        .iter()
        .map(UncertaintySignal::description)
        .collect::<Vec<_>>()
        .join(", ");

    let explanation = match level {
        ConfidenceLevel::High => {
            "Every key question has a definite answer, so this assessment is highly reliable."
                .to_string()
        }
        ConfidenceLevel::Medium => format!(
            "The assessment is broadly usable, but some inputs are uncertain: {listed}."
        ),
        ConfidenceLevel::Low => format!(
            "Several key inputs are uncertain ({listed}); treat the result as indicative only and re-run the assessment once more is known."
        ),
    };

    ConfidenceAssessment { level, explanation }
}
