use serde::{Deserialize, Serialize};

use crate::insights::bands::BadgeBand;
use crate::insights::labels::{describe, narrative_insight, style_tagline};
use crate::insights::recommendations::{build_recommendations, Recommendation};
use crate::models::scores::{CultureScores, OceanScores, TraitScores, ValuesScores};
use crate::models::traits::TraitId;

/// Display-ready view of one trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitInsight {
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
    pub score: u8,
    pub badge: BadgeBand,
    pub label: String,
    pub explanation: String,
    pub tagline: String,
    pub insight: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub ocean: OceanScores,
    pub culture: CultureScores,
    pub values: ValuesScores,
    pub traits: Vec<TraitInsight>,
    pub recommendations: Vec<Recommendation>,
}

pub fn build_report(scores: &TraitScores) -> ProfileReport {
    let traits = TraitId::all()
        .into_iter()
        .map(|trait_id| trait_insight(trait_id, scores.get(trait_id)))
        .collect();

    ProfileReport {
        ocean: scores.ocean,
        culture: scores.culture,
        values: scores.values,
        traits,
        recommendations: build_recommendations(scores),
    }
}

fn trait_insight(trait_id: TraitId, score: u8) -> TraitInsight {
    let description = describe(trait_id, score);
    TraitInsight {
        trait_id,
        score,
        badge: description.badge,
        label: description.label,
        explanation: description.explanation,
        tagline: style_tagline(trait_id, score),
        insight: narrative_insight(trait_id, score),
    }
}
