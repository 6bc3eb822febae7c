//! Trait labels, explanations, style taglines and narrative insight sentences.
//!
//! Each output has its own band scheme:
//! - `describe`          → badge scheme over the per-category label tables
//! - `style_tagline`     → style scheme over the tagline table (OCEAN and culture only)
//! - `narrative_insight` → narrative 5-way scheme
//!
//! Lookups never fail. The label tables cover every trait and badge band; the tagline
//! table does not, and a missing tagline falls back to `"<Band> (<score>)"`.

use serde::{Deserialize, Serialize};

use crate::insights::bands::{
    badge_band, fallback_label, narrative_band, style_band, BadgeBand, NarrativeBand, StyleBand,
};
use crate::models::traits::{CultureDimension, OceanDimension, TraitId, ValuesDimension};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDescription {
    pub label: String,
    pub explanation: String,
    pub badge: BadgeBand,
}

type LabelEntry = (&'static str, &'static str);

pub fn describe(trait_id: TraitId, score: u8) -> TraitDescription {
    let badge = badge_band(score);
    let (label, explanation) = label_entry(trait_id, badge);
    TraitDescription {
        label: label.to_string(),
        explanation: explanation.to_string(),
        badge,
    }
}

pub fn style_tagline(trait_id: TraitId, score: u8) -> String {
    let band = style_band(score);
    tagline_entry(trait_id, band)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_label(band.label(), score))
}

pub fn narrative_insight(trait_id: TraitId, score: u8) -> String {
    let band = narrative_band(score);
    let emphasis = match band {
        NarrativeBand::VeryHigh => "This is a defining part of how you work.",
        NarrativeBand::High => "This is a clear strength that shapes your working style.",
        NarrativeBand::Moderate => "You express this trait in balance, adapting to the situation.",
        NarrativeBand::Low => "This trait plays a smaller role in how you approach work.",
        NarrativeBand::VeryLow => "You lean strongly toward the opposite end of this trait.",
    };
    format!(
        "Your {} score of {score} is {}. {emphasis}",
        trait_id.name(),
        band.label().to_lowercase()
    )
}

fn label_entry(trait_id: TraitId, band: BadgeBand) -> LabelEntry {
    match trait_id {
        TraitId::Ocean(d) => ocean_label(d, band),
        TraitId::Culture(d) => culture_label(d, band),
        TraitId::Values(d) => values_label(d, band),
    }
}

fn ocean_label(dimension: OceanDimension, band: BadgeBand) -> LabelEntry {
    use crate::insights::bands::BadgeBand::*;
    use crate::models::traits::OceanDimension::*;
    match (dimension, band) {
        (Openness, High) => (
            "Creative Explorer",
            "Curious and imaginative; energised by new ideas, approaches and experiences.",
        ),
        (Openness, Moderate) => (
            "Practical Innovator",
            "Open to new ideas when they have a clear use; balances novelty with proven methods.",
        ),
        (Openness, Low) => (
            "Grounded Traditionalist",
            "Prefers familiar, proven approaches and concrete, practical problems.",
        ),
        (Conscientiousness, High) => (
            "Disciplined Achiever",
            "Organised, dependable and goal-driven; plans ahead and follows through.",
        ),
        (Conscientiousness, Moderate) => (
            "Flexible Planner",
            "Plans when it matters but adapts comfortably when priorities shift.",
        ),
        (Conscientiousness, Low) => (
            "Spontaneous Adapter",
            "Prefers flexibility over structure; comfortable improvising as things unfold.",
        ),
        (Extraversion, High) => (
            "Energetic Connector",
            "Draws energy from people; outgoing, talkative and comfortable leading groups.",
        ),
        (Extraversion, Moderate) => (
            "Adaptive Communicator",
            "Comfortable in groups and working alone; adjusts to the setting.",
        ),
        (Extraversion, Low) => (
            "Reflective Thinker",
            "Recharges through solitude; prefers focused work and small, deep conversations.",
        ),
        (Agreeableness, High) => (
            "Supportive Collaborator",
            "Warm, cooperative and considerate; puts team harmony first.",
        ),
        (Agreeableness, Moderate) => (
            "Balanced Partner",
            "Cooperative by default but willing to push back when it matters.",
        ),
        (Agreeableness, Low) => (
            "Candid Challenger",
            "Direct and sceptical; comfortable with debate and tough decisions.",
        ),
        (Neuroticism, High) => (
            "Sensitive Responder",
            "Feels stress and setbacks strongly; benefits from stability and regular feedback.",
        ),
        (Neuroticism, Moderate) => (
            "Steady Realist",
            "Generally composed, with occasional stress under heavy pressure.",
        ),
        (Neuroticism, Low) => (
            "Calm Anchor",
            "Emotionally stable and resilient; stays composed under pressure.",
        ),
    }
}

fn culture_label(dimension: CultureDimension, band: BadgeBand) -> LabelEntry {
    use crate::insights::bands::BadgeBand::*;
    use crate::models::traits::CultureDimension::*;
    match (dimension, band) {
        (PowerDistance, High) => (
            "Structured Hierarchy",
            "Comfortable with clear chains of command and defined authority.",
        ),
        (PowerDistance, Moderate) => (
            "Pragmatic Structure",
            "Accepts hierarchy where it helps but values accessible leadership.",
        ),
        (PowerDistance, Low) => (
            "Flat Collaboration",
            "Prefers egalitarian teams where anyone can challenge a decision.",
        ),
        (Individualism, High) => (
            "Independent Achiever",
            "Values personal goals, autonomy and individual recognition.",
        ),
        (Individualism, Moderate) => (
            "Team-Aware Individual",
            "Balances personal ambition with commitment to the group.",
        ),
        (Individualism, Low) => (
            "Group Loyalist",
            "Prioritises team goals, loyalty and shared success.",
        ),
        (Masculinity, High) => (
            "Competitive Driver",
            "Motivated by achievement, winning and visible results.",
        ),
        (Masculinity, Moderate) => (
            "Balanced Achiever",
            "Values results and relationships in roughly equal measure.",
        ),
        (Masculinity, Low) => (
            "Quality-of-Life Advocate",
            "Values cooperation, care and work-life balance over competition.",
        ),
        (UncertaintyAvoidance, High) => (
            "Process Guardian",
            "Prefers clear rules, predictable plans and little ambiguity.",
        ),
        (UncertaintyAvoidance, Moderate) => (
            "Measured Risk-Taker",
            "Accepts some ambiguity when there is a sensible plan behind it.",
        ),
        (UncertaintyAvoidance, Low) => (
            "Ambiguity Navigator",
            "Comfortable with change, uncertainty and loosely defined problems.",
        ),
        (LongTermOrientation, High) => (
            "Strategic Planner",
            "Focuses on long-term goals, persistence and future rewards.",
        ),
        (LongTermOrientation, Moderate) => (
            "Balanced Horizon",
            "Weighs long-term strategy against near-term results.",
        ),
        (LongTermOrientation, Low) => (
            "Here-and-Now Doer",
            "Focuses on immediate results and quick wins.",
        ),
        (Indulgence, High) => (
            "Enjoyment Seeker",
            "Values fun, optimism and the freedom to enjoy work.",
        ),
        (Indulgence, Moderate) => (
            "Balanced Enjoyer",
            "Enjoys a positive atmosphere while keeping discipline in view.",
        ),
        (Indulgence, Low) => (
            "Restrained Professional",
            "Values restraint, duty and a serious, focused workplace.",
        ),
    }
}

fn values_label(dimension: ValuesDimension, band: BadgeBand) -> LabelEntry {
    use crate::insights::bands::BadgeBand::*;
    use crate::models::traits::ValuesDimension::*;
    match (dimension, band) {
        (Innovation, High) => (
            "Innovation Champion",
            "Motivated by experimentation, new products and creative freedom.",
        ),
        (Innovation, Moderate) => (
            "Selective Innovator",
            "Supports change when it clearly improves outcomes.",
        ),
        (Innovation, Low) => (
            "Stability Keeper",
            "Values proven processes and incremental improvement.",
        ),
        (Collaboration, High) => (
            "Team Builder",
            "Thrives on shared work, open communication and collective wins.",
        ),
        (Collaboration, Moderate) => (
            "Situational Collaborator",
            "Collaborates readily but also values independent work.",
        ),
        (Collaboration, Low) => (
            "Solo Contributor",
            "Most effective with clearly owned, independent work.",
        ),
        (Autonomy, High) => (
            "Self-Directed Owner",
            "Wants ownership, freedom to decide and minimal oversight.",
        ),
        (Autonomy, Moderate) => (
            "Guided Independent",
            "Values independence within clear goals and occasional check-ins.",
        ),
        (Autonomy, Low) => (
            "Direction Seeker",
            "Prefers clear direction, close guidance and shared decisions.",
        ),
        (Quality, High) => (
            "Quality Guardian",
            "Holds high standards for precision, thoroughness and correctness.",
        ),
        (Quality, Moderate) => (
            "Pragmatic Finisher",
            "Balances quality with speed depending on the stakes.",
        ),
        (Quality, Low) => (
            "Speed Optimizer",
            "Prefers shipping quickly and iterating over polishing.",
        ),
        (CustomerFocus, High) => (
            "Customer Advocate",
            "Motivated by serving people and understanding their needs.",
        ),
        (CustomerFocus, Moderate) => (
            "Customer-Aware Contributor",
            "Keeps customers in mind while focusing on internal work.",
        ),
        (CustomerFocus, Low) => (
            "Internal Specialist",
            "Most engaged by internal, technical or behind-the-scenes work.",
        ),
    }
}

/// Style taglines exist for OCEAN and culture traits; values traits use the fallback.
fn tagline_entry(trait_id: TraitId, band: StyleBand) -> Option<&'static str> {
    use crate::insights::bands::StyleBand::*;
    let tagline = match trait_id {
        TraitId::Ocean(d) => match (d, band) {
            (OceanDimension::Openness, Higher) => "You chase new ideas and fresh approaches.",
            (OceanDimension::Openness, Balanced) => "You mix curiosity with practicality.",
            (OceanDimension::Openness, Lower) => "You trust what has been proven to work.",
            (OceanDimension::Conscientiousness, Higher) => "You plan the work and work the plan.",
            (OceanDimension::Conscientiousness, Balanced) => "You structure what needs structure.",
            (OceanDimension::Conscientiousness, Lower) => "You keep options open and adapt on the fly.",
            (OceanDimension::Extraversion, Higher) => "You think out loud and energise the room.",
            (OceanDimension::Extraversion, Balanced) => "You move easily between people and focus time.",
            (OceanDimension::Extraversion, Lower) => "You do your best thinking in quiet focus.",
            (OceanDimension::Agreeableness, Higher) => "You lead with empathy and cooperation.",
            (OceanDimension::Agreeableness, Balanced) => "You cooperate without losing your voice.",
            (OceanDimension::Agreeableness, Lower) => "You say what you think and test every idea.",
            (OceanDimension::Neuroticism, Higher) => "You feel pressure early and notice risks first.",
            (OceanDimension::Neuroticism, Balanced) => "You stay level with the occasional wobble.",
            (OceanDimension::Neuroticism, Lower) => "You stay calm when others feel the heat.",
        },
        TraitId::Culture(d) => match (d, band) {
            (CultureDimension::PowerDistance, Higher) => "You work best with clear lines of authority.",
            (CultureDimension::PowerDistance, Balanced) => "You respect structure but expect access.",
            (CultureDimension::PowerDistance, Lower) => "You prefer flat teams and open challenge.",
            (CultureDimension::Individualism, Higher) => "You own your goals and your results.",
            (CultureDimension::Individualism, Balanced) => "You balance personal and team success.",
            (CultureDimension::Individualism, Lower) => "You put the team's success first.",
            (CultureDimension::Masculinity, Higher) => "You are driven by winning and achievement.",
            (CultureDimension::Masculinity, Balanced) => "You weigh results and relationships evenly.",
            (CultureDimension::Masculinity, Lower) => "You value care and balance over competition.",
            (CultureDimension::UncertaintyAvoidance, Higher) => "You like clear rules and predictable plans.",
            (CultureDimension::UncertaintyAvoidance, Balanced) => "You handle ambiguity when there is a plan.",
            (CultureDimension::UncertaintyAvoidance, Lower) => "You are at home in ambiguity.",
            (CultureDimension::LongTermOrientation, Higher) => "You invest today for tomorrow's payoff.",
            (CultureDimension::LongTermOrientation, Balanced) => "You balance quick wins with long bets.",
            (CultureDimension::LongTermOrientation, Lower) => "You focus on results you can see now.",
            (CultureDimension::Indulgence, Higher) => "You bring energy and enjoyment to work.",
            (CultureDimension::Indulgence, Balanced) => "You enjoy work while keeping focus.",
            (CultureDimension::Indulgence, Lower) => "You keep things serious and disciplined.",
        },
        TraitId::Values(_) => return None,
    };
    Some(tagline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_uses_badge_scheme() {
        let open = TraitId::Ocean(OceanDimension::Openness);
        assert_eq!(describe(open, 70).label, "Creative Explorer");
        assert_eq!(describe(open, 69).label, "Practical Innovator");
        assert_eq!(describe(open, 39).label, "Grounded Traditionalist");
        assert_eq!(describe(open, 70).badge, BadgeBand::High);
    }

    #[test]
    fn test_every_trait_has_a_label_in_every_badge_band() {
        for trait_id in TraitId::all() {
            for score in [10, 55, 90] {
                let d = describe(trait_id, score);
                assert!(!d.label.contains('('), "{trait_id:?} fell back at {score}");
                assert!(!d.explanation.is_empty());
            }
        }
    }

    #[test]
    fn test_style_tagline_uses_style_scheme() {
        let extraversion = TraitId::Ocean(OceanDimension::Extraversion);
        assert_eq!(
            style_tagline(extraversion, 35),
            "You do your best thinking in quiet focus."
        );
        assert_eq!(
            style_tagline(extraversion, 36),
            "You move easily between people and focus time."
        );
        assert_eq!(
            style_tagline(extraversion, 65),
            "You think out loud and energise the room."
        );
    }

    #[test]
    fn test_values_tagline_falls_back_to_band_and_score() {
        let quality = TraitId::Values(ValuesDimension::Quality);
        assert_eq!(style_tagline(quality, 55), "Balanced (55)");
        assert_eq!(style_tagline(quality, 20), "Lower (20)");
        assert_eq!(style_tagline(quality, 90), "Higher (90)");
    }

    #[test]
    fn test_culture_taglines_present() {
        for d in CultureDimension::ALL {
            for score in [20, 50, 80] {
                assert!(!style_tagline(TraitId::Culture(d), score).contains('('));
            }
        }
    }

    #[test]
    fn test_narrative_insight_uses_five_way_scheme() {
        let quality = TraitId::Values(ValuesDimension::Quality);
        assert!(narrative_insight(quality, 85).contains("is very high"));
        assert!(narrative_insight(quality, 75).contains("is high"));
        assert!(narrative_insight(quality, 55).contains("is moderate"));
        assert!(narrative_insight(quality, 35).contains("is low"));
        assert!(narrative_insight(quality, 10).contains("is very low"));
        assert!(narrative_insight(quality, 85).starts_with("Your Quality score of 85"));
    }
}
