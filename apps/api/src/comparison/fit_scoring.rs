//! Fit Scoring: pluggable, trait-based scorer comparing a candidate with a team.
//!
//! Default: `DistanceFitScorer` (mean absolute gap over all sixteen traits).
//!
//! `AppState` holds an `Arc<dyn FitScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::assessment::derived::derive_profile;
use crate::comparison::team::{team_average, validate_members, MemberProfile, TeamError};
use crate::insights::bands::{badge_band, BadgeBand};
use crate::models::scores::TraitScores;
use crate::models::traits::TraitId;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Candidate vs team on a single trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitGap {
    #[serde(rename = "trait")]
    pub trait_id: TraitId,
    pub candidate_score: u8,
    pub team_score: u8,
    pub difference: i16, // candidate − team
}

impl TraitGap {
    fn magnitude(&self) -> u16 {
        self.difference.unsigned_abs()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub candidate: String,
    pub overall_score: u8,                // 0 – 100
    pub badge: BadgeBand,
    pub aligned: Vec<TraitGap>,           // |gap| ≤ 10
    pub complementary: Vec<TraitGap>,     // 10 < |gap| ≤ 25
    pub gaps: Vec<TraitGap>,              // |gap| > 25, largest first
    pub recommendation: String,
    pub scorer_backend: String,
}

const ALIGNED_MAX_GAP: u16 = 10;
const COMPLEMENTARY_MAX_GAP: u16 = 25;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the comparison backend without touching handlers.
pub trait FitScorer: Send + Sync {
    fn score(&self, candidate: &MemberProfile, team: &[MemberProfile])
        -> Result<FitReport, TeamError>;
}

// ────────────────────────────────────────────────────────────────────────────
// DistanceFitScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. Team profile = mean member OCEAN, culture/values derived from the mean
/// 2. Candidate profile = candidate OCEAN, culture/values derived
/// 3. Per trait gap = candidate − team
/// 4. overall_score = round(100 − mean |gap|)
/// 5. Classify traits: aligned (≤10), complementary (≤25), gap (>25)
pub struct DistanceFitScorer;

impl FitScorer for DistanceFitScorer {
    fn score(
        &self,
        candidate: &MemberProfile,
        team: &[MemberProfile],
    ) -> Result<FitReport, TeamError> {
        validate_members(std::slice::from_ref(candidate))?;
        validate_members(team)?;
        let team_mean = team_average(team).ok_or(TeamError::NoMembers)?;
        Ok(compute_distance_fit(
            &candidate.name,
            &derive_profile(candidate.ocean),
            &derive_profile(team_mean),
        ))
    }
}

fn compute_distance_fit(name: &str, candidate: &TraitScores, team: &TraitScores) -> FitReport {
    let mut aligned = Vec::new();
    let mut complementary = Vec::new();
    let mut gaps = Vec::new();
    let mut total_gap = 0_u32;

    let traits = TraitId::all();
    for trait_id in &traits {
        let candidate_score = candidate.get(*trait_id);
        let team_score = team.get(*trait_id);
        let gap = TraitGap {
            trait_id: *trait_id,
            candidate_score,
            team_score,
            difference: candidate_score as i16 - team_score as i16,
        };
        total_gap += gap.magnitude() as u32;

        match gap.magnitude() {
            m if m <= ALIGNED_MAX_GAP => aligned.push(gap),
            m if m <= COMPLEMENTARY_MAX_GAP => complementary.push(gap),
            _ => gaps.push(gap),
        }
    }

    // Stable sort keeps trait order among equal gaps.
    gaps.sort_by_key(|g| std::cmp::Reverse(g.magnitude()));

    let mean_gap = total_gap as f64 / traits.len() as f64;
    let overall_score = (100.0 - mean_gap).round().clamp(0.0, 100.0) as u8;
    let badge = badge_band(overall_score);
    let recommendation = build_recommendation(name, overall_score, badge, &gaps, &complementary);

    FitReport {
        candidate: name.to_string(),
        overall_score,
        badge,
        aligned,
        complementary,
        gaps,
        recommendation,
        scorer_backend: "distance".to_string(),
    }
}

/// Builds a human-readable recommendation from the overall badge and largest differences.
fn build_recommendation(
    name: &str,
    score: u8,
    badge: BadgeBand,
    gaps: &[TraitGap],
    complementary: &[TraitGap],
) -> String {
    let focus = if gaps.is_empty() { complementary } else { gaps };
    let top: Vec<&str> = focus.iter().take(3).map(|g| g.trait_id.name()).collect();
    let differences = if top.is_empty() {
        "no major differences".to_string()
    } else {
        top.join(", ")
    };

    match badge {
        BadgeBand::High => format!(
            "Strong fit ({score}/100). {name} closely matches how the team works."
        ),
        BadgeBand::Moderate => format!(
            "Moderate fit ({score}/100). Explore expectations around: {differences}."
        ),
        BadgeBand::Low => format!(
            "Low fit ({score}/100). Significant differences in: {differences}. Discuss working-style expectations before proceeding."
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scores::OceanScores;
    use crate::models::traits::OceanDimension;

    fn member(name: &str, o: u8, c: u8, e: u8, a: u8, n: u8) -> MemberProfile {
        MemberProfile {
            name: name.to_string(),
            ocean: OceanScores {
                openness: o,
                conscientiousness: c,
                extraversion: e,
                agreeableness: a,
                neuroticism: n,
            },
        }
    }

    #[test]
    fn test_identical_profiles_score_100() {
        let team = vec![member("ana", 60, 70, 40, 55, 35)];
        let report = DistanceFitScorer
            .score(&member("cand", 60, 70, 40, 55, 35), &team)
            .unwrap();
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.badge, BadgeBand::High);
        assert_eq!(report.aligned.len(), 16);
        assert!(report.gaps.is_empty());
        assert!(report.recommendation.contains("Strong fit"));
        assert!(report.recommendation.contains("cand"));
    }

    #[test]
    fn test_opposite_profiles_score_low() {
        let team = vec![member("ana", 100, 100, 100, 100, 100)];
        let report = DistanceFitScorer
            .score(&member("cand", 0, 0, 0, 0, 0), &team)
            .unwrap();
        assert!(report.overall_score < 40, "got {}", report.overall_score);
        assert_eq!(report.badge, BadgeBand::Low);
        assert!(!report.gaps.is_empty());
        assert!(report.recommendation.starts_with("Low fit"));
    }

    #[test]
    fn test_gap_classification_thresholds() {
        // Only openness differs in OCEAN; derived traits shift too.
        let team = vec![member("ana", 50, 50, 50, 50, 50)];
        let report = DistanceFitScorer
            .score(&member("cand", 80, 50, 50, 50, 50), &team)
            .unwrap();
        let open = report
            .gaps
            .iter()
            .find(|g| g.trait_id == TraitId::Ocean(OceanDimension::Openness))
            .expect("openness gap of 30 is a gap");
        assert_eq!(open.difference, 30);
        // innovation = 50 + 0.6*30 = 68 → gap 18 → complementary
        assert!(report
            .complementary
            .iter()
            .any(|g| g.trait_id.name() == "Innovation" && g.difference == 18));
        // individualism = 50 + 0.3*30 = 59 → gap 9 → aligned
        assert!(report
            .aligned
            .iter()
            .any(|g| g.trait_id.name() == "Individualism" && g.difference == 9));
    }

    #[test]
    fn test_gaps_sorted_largest_first() {
        let team = vec![member("ana", 50, 50, 50, 50, 50)];
        let report = DistanceFitScorer
            .score(&member("cand", 90, 50, 10, 50, 50), &team)
            .unwrap();
        let magnitudes: Vec<u16> = report.gaps.iter().map(|g| g.magnitude()).collect();
        let mut sorted = magnitudes.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(magnitudes, sorted);
    }

    #[test]
    fn test_candidate_compared_with_team_mean() {
        let team = vec![
            member("ana", 40, 50, 50, 50, 50),
            member("ben", 60, 50, 50, 50, 50),
        ];
        let report = DistanceFitScorer
            .score(&member("cand", 50, 50, 50, 50, 50), &team)
            .unwrap();
        assert_eq!(report.overall_score, 100);
    }

    #[test]
    fn test_empty_team_is_error() {
        let err = DistanceFitScorer
            .score(&member("cand", 50, 50, 50, 50, 50), &[])
            .unwrap_err();
        assert_eq!(err, TeamError::NoMembers);
    }

    #[test]
    fn test_out_of_range_candidate_is_error() {
        let team = vec![member("ana", 50, 50, 50, 50, 50)];
        let err = DistanceFitScorer
            .score(&member("cand", 50, 50, 50, 50, 255), &team)
            .unwrap_err();
        assert!(matches!(err, TeamError::ScoreOutOfRange { .. }));
    }

    #[test]
    fn test_scorer_backend_label_is_distance() {
        let team = vec![member("ana", 50, 50, 50, 50, 50)];
        let report = DistanceFitScorer
            .score(&member("cand", 50, 50, 50, 50, 50), &team)
            .unwrap();
        assert_eq!(report.scorer_backend, "distance");
    }

    #[test]
    fn test_recommendation_moderate_lists_differences() {
        let gaps = vec![TraitGap {
            trait_id: TraitId::Ocean(OceanDimension::Extraversion),
            candidate_score: 20,
            team_score: 60,
            difference: -40,
        }];
        let rec = build_recommendation("cand", 65, BadgeBand::Moderate, &gaps, &[]);
        assert!(rec.contains("65"));
        assert!(rec.contains("Extraversion"));
    }

    #[test]
    fn test_recommendation_without_differences() {
        let rec = build_recommendation("cand", 50, BadgeBand::Moderate, &[], &[]);
        assert!(rec.contains("no major differences"));
    }
}
