use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialTag {
    HighResonanceLowBurst,
    ViralPotential,
    NicheLeader,
    CrossPlatformStar,
}

impl SpecialTag {
    pub fn label(&self) -> &'static str {
        match self {
            SpecialTag::HighResonanceLowBurst => "High resonance, low burst",
            SpecialTag::ViralPotential => "Breakout potential",
            SpecialTag::NicheLeader => "Niche leader",
            SpecialTag::CrossPlatformStar => "Cross-platform star",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            SpecialTag::HighResonanceLowBurst => {
                "Traffic is unremarkable, yet the audience engages with unusual depth. Accounts like this are easy to undervalue on raw reach metrics but can be especially valuable for deep brand partnerships, audience trust and long-term influence."
            }
            SpecialTag::ViralPotential => {
                "The content already travels across platforms; with a steady stream of strong work it has a real chance of breaking out."
            }
            SpecialTag::NicheLeader => {
                "The account carries strong influence and trust within its vertical. Its audience is not broad, but inside that field it is an opinion leader."
            }
            SpecialTag::CrossPlatformStar => {
                "Influence has broken through platform boundaries and the creator is discussed on several platforms, a true breakout creator."
            }
        }
    }
}

/// Score snapshot the tag rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScoreProfile {
    pub engagement: u8,
    pub semantic: u8,
    pub bridge: u8,
    pub total: u8,
}

type TagRule = (SpecialTag, fn(&ScoreProfile) -> bool);

fn high_resonance_low_burst(p: &ScoreProfile) -> bool {
    p.engagement <= 55 && p.semantic >= 70 && p.total >= 60
}

fn viral_potential(p: &ScoreProfile) -> bool {
    p.bridge >= 70 && (50..75).contains(&p.total)
}

fn niche_leader(p: &ScoreProfile) -> bool {
    p.semantic >= 85 && p.bridge < 50 && p.engagement >= 50
}

fn cross_platform_star(p: &ScoreProfile) -> bool {
    p.bridge >= 85
}

/// Evaluated in order; report tags and their explanations follow this order.
const TAG_RULES: &[TagRule] = &[
    (SpecialTag::HighResonanceLowBurst, high_resonance_low_burst),
    (SpecialTag::ViralPotential, viral_potential),
    (SpecialTag::NicheLeader, niche_leader),
    (SpecialTag::CrossPlatformStar, cross_platform_star),
];

pub(crate) fn detect_tags(profile: &ScoreProfile) -> Vec<SpecialTag> {
    TAG_RULES
        .iter()
        .filter(|(_, applies)| applies(profile))
        .map(|(tag, _)| *tag)
        .collect()
}

pub(crate) fn tag_passage(tags: &[SpecialTag]) -> String {
    tags.iter()
        .map(SpecialTag::explanation)
        .collect::<Vec<_>>()
        .join(" ")
}
