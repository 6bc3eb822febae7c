use serde::{Deserialize, Serialize};

use crate::models::traits::{CultureDimension, OceanDimension, TraitId, ValuesDimension};

/// Upper bound shared by every score in the system.
pub const MAX_SCORE: u8 = 100;

/// OCEAN dimension scores, each 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OceanScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl OceanScores {
    pub fn get(&self, dimension: OceanDimension) -> u8 {
        match dimension {
            OceanDimension::Openness => self.openness,
            OceanDimension::Conscientiousness => self.conscientiousness,
            OceanDimension::Extraversion => self.extraversion,
            OceanDimension::Agreeableness => self.agreeableness,
            OceanDimension::Neuroticism => self.neuroticism,
        }
    }

    pub fn set(&mut self, dimension: OceanDimension, score: u8) {
        let score = score.min(MAX_SCORE);
        match dimension {
            OceanDimension::Openness => self.openness = score,
            OceanDimension::Conscientiousness => self.conscientiousness = score,
            OceanDimension::Extraversion => self.extraversion = score,
            OceanDimension::Agreeableness => self.agreeableness = score,
            OceanDimension::Neuroticism => self.neuroticism = score,
        }
    }

    /// Returns the first dimension above 100, if any.
    /// Scores arriving over the wire are only bounded by `u8`.
    pub fn out_of_range(&self) -> Option<(OceanDimension, u8)> {
        OceanDimension::ALL
            .into_iter()
            .map(|d| (d, self.get(d)))
            .find(|(_, s)| *s > MAX_SCORE)
    }
}

/// Cultural preference scores, each 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureScores {
    pub power_distance: u8,
    pub individualism: u8,
    pub masculinity: u8,
    pub uncertainty_avoidance: u8,
    pub long_term_orientation: u8,
    pub indulgence: u8,
}

impl CultureScores {
    pub fn get(&self, dimension: CultureDimension) -> u8 {
        match dimension {
            CultureDimension::PowerDistance => self.power_distance,
            CultureDimension::Individualism => self.individualism,
            CultureDimension::Masculinity => self.masculinity,
            CultureDimension::UncertaintyAvoidance => self.uncertainty_avoidance,
            CultureDimension::LongTermOrientation => self.long_term_orientation,
            CultureDimension::Indulgence => self.indulgence,
        }
    }
}

/// Work-values scores, each 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesScores {
    pub innovation: u8,
    pub collaboration: u8,
    pub autonomy: u8,
    pub quality: u8,
    pub customer_focus: u8,
}

impl ValuesScores {
    pub fn get(&self, dimension: ValuesDimension) -> u8 {
        match dimension {
            ValuesDimension::Innovation => self.innovation,
            ValuesDimension::Collaboration => self.collaboration,
            ValuesDimension::Autonomy => self.autonomy,
            ValuesDimension::Quality => self.quality,
            ValuesDimension::CustomerFocus => self.customer_focus,
        }
    }
}

/// The full score set for one person or one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub ocean: OceanScores,
    pub culture: CultureScores,
    pub values: ValuesScores,
}

impl TraitScores {
    pub fn get(&self, trait_id: TraitId) -> u8 {
        match trait_id {
            TraitId::Ocean(d) => self.ocean.get(d),
            TraitId::Culture(d) => self.culture.get(d),
            TraitId::Values(d) => self.values.get(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps_to_max_score() {
        let mut scores = OceanScores::default();
        scores.set(OceanDimension::Openness, 250);
        assert_eq!(scores.openness, 100);
    }

    #[test]
    fn test_out_of_range_reports_first_offender() {
        let scores = OceanScores {
            openness: 50,
            conscientiousness: 101,
            extraversion: 50,
            agreeableness: 200,
            neuroticism: 50,
        };
        assert_eq!(
            scores.out_of_range(),
            Some((OceanDimension::Conscientiousness, 101))
        );
        assert_eq!(OceanScores::default().out_of_range(), None);
    }

    #[test]
    fn test_culture_scores_serialize_camel_case() {
        let value = serde_json::to_value(CultureScores::default()).unwrap();
        assert!(value.get("powerDistance").is_some());
        assert!(value.get("longTermOrientation").is_some());
        let value = serde_json::to_value(ValuesScores::default()).unwrap();
        assert!(value.get("customerFocus").is_some());
    }
}
