//! Recommendation selection: fixed threshold rules over a full score set.
//!
//! Rules are evaluated independently, emitted in declaration order and capped at
//! `MAX_RECOMMENDATIONS`. If no rule fires the two default recommendations are returned.

use serde::{Deserialize, Serialize};

use crate::models::scores::TraitScores;
use crate::models::traits::{CultureDimension, OceanDimension, TraitId, ValuesDimension};

pub const MAX_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    /// `None` for the generic defaults.
    #[serde(rename = "trait")]
    pub trait_id: Option<TraitId>,
    pub score: Option<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Threshold {
    Above(u8),
    Below(u8),
}

impl Threshold {
    fn matches(self, score: u8) -> bool {
        match self {
            Threshold::Above(t) => score > t,
            Threshold::Below(t) => score < t,
        }
    }
}

struct Rule {
    trait_id: TraitId,
    threshold: Threshold,
    text: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Openness),
        threshold: Threshold::Above(70),
        text: "Seek roles with room for innovation, research or creative problem-solving.",
    },
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Conscientiousness),
        threshold: Threshold::Above(70),
        text: "Look for ownership of deliverables in teams with clear processes and quality standards.",
    },
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Extraversion),
        threshold: Threshold::Above(70),
        text: "Client-facing, facilitation or team-lead responsibilities will play to your energy.",
    },
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Extraversion),
        threshold: Threshold::Below(30),
        text: "Protect blocks of focused, low-interruption time and favour written, async communication.",
    },
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Agreeableness),
        threshold: Threshold::Above(70),
        text: "Cross-functional and mentoring roles suit your cooperative style.",
    },
    Rule {
        trait_id: TraitId::Ocean(OceanDimension::Neuroticism),
        threshold: Threshold::Above(70),
        text: "A stable, predictable environment with regular feedback will help you do your best work.",
    },
    Rule {
        trait_id: TraitId::Culture(CultureDimension::UncertaintyAvoidance),
        threshold: Threshold::Below(30),
        text: "You are comfortable with ambiguity; startups and fast-changing projects are a good fit.",
    },
    Rule {
        trait_id: TraitId::Culture(CultureDimension::UncertaintyAvoidance),
        threshold: Threshold::Above(70),
        text: "Prefer organisations with well-defined roles, documented processes and clear plans.",
    },
    Rule {
        trait_id: TraitId::Values(ValuesDimension::Innovation),
        threshold: Threshold::Above(70),
        text: "Volunteer for pilots, prototypes and experimental initiatives.",
    },
    Rule {
        trait_id: TraitId::Values(ValuesDimension::Autonomy),
        threshold: Threshold::Above(70),
        text: "Negotiate for self-directed work with outcome-based goals rather than close oversight.",
    },
    Rule {
        trait_id: TraitId::Values(ValuesDimension::Collaboration),
        threshold: Threshold::Above(70),
        text: "Choose team-based environments with shared goals and frequent collaboration.",
    },
];

const DEFAULT_RECOMMENDATIONS: [&str; 2] = [
    "Explore a variety of team environments to discover the working style that suits you best.",
    "Use these results as a starting point for a development conversation with your manager.",
];

pub fn build_recommendations(scores: &TraitScores) -> Vec<Recommendation> {
    let fired: Vec<Recommendation> = RULES
        .iter()
        .filter_map(|rule| {
            let score = scores.get(rule.trait_id);
            rule.threshold.matches(score).then(|| Recommendation {
                text: rule.text.to_string(),
                trait_id: Some(rule.trait_id),
                score: Some(score),
            })
        })
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if fired.is_empty() {
        return DEFAULT_RECOMMENDATIONS
            .iter()
            .map(|text| Recommendation {
                text: text.to_string(),
                trait_id: None,
                score: None,
            })
            .collect();
    }
    fired
}
