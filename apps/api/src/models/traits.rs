use serde::{Deserialize, Serialize};

/// The five OCEAN (Big Five) personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OceanDimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl OceanDimension {
    pub const ALL: [OceanDimension; 5] = [
        OceanDimension::Openness,
        OceanDimension::Conscientiousness,
        OceanDimension::Extraversion,
        OceanDimension::Agreeableness,
        OceanDimension::Neuroticism,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OceanDimension::Openness => "Openness",
            OceanDimension::Conscientiousness => "Conscientiousness",
            OceanDimension::Extraversion => "Extraversion",
            OceanDimension::Agreeableness => "Agreeableness",
            OceanDimension::Neuroticism => "Neuroticism",
        }
    }
}

/// Hofstede-style cultural preference dimensions derived from OCEAN scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CultureDimension {
    PowerDistance,
    Individualism,
    Masculinity,
    UncertaintyAvoidance,
    LongTermOrientation,
    Indulgence,
}

impl CultureDimension {
    pub const ALL: [CultureDimension; 6] = [
        CultureDimension::PowerDistance,
        CultureDimension::Individualism,
        CultureDimension::Masculinity,
        CultureDimension::UncertaintyAvoidance,
        CultureDimension::LongTermOrientation,
        CultureDimension::Indulgence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CultureDimension::PowerDistance => "Power Distance",
            CultureDimension::Individualism => "Individualism",
            CultureDimension::Masculinity => "Masculinity",
            CultureDimension::UncertaintyAvoidance => "Uncertainty Avoidance",
            CultureDimension::LongTermOrientation => "Long-Term Orientation",
            CultureDimension::Indulgence => "Indulgence",
        }
    }
}

/// Workplace values dimensions derived from OCEAN scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValuesDimension {
    Innovation,
    Collaboration,
    Autonomy,
    Quality,
    CustomerFocus,
}

impl ValuesDimension {
    pub const ALL: [ValuesDimension; 5] = [
        ValuesDimension::Innovation,
        ValuesDimension::Collaboration,
        ValuesDimension::Autonomy,
        ValuesDimension::Quality,
        ValuesDimension::CustomerFocus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValuesDimension::Innovation => "Innovation",
            ValuesDimension::Collaboration => "Collaboration",
            ValuesDimension::Autonomy => "Autonomy",
            ValuesDimension::Quality => "Quality",
            ValuesDimension::CustomerFocus => "Customer Focus",
        }
    }
}

/// Any scored trait, keyed by category.
///
/// Serializes as the bare dimension key (`"openness"`, `"powerDistance"`, `"customerFocus"`)
/// so API payloads stay flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitId {
    Ocean(OceanDimension),
    Culture(CultureDimension),
    Values(ValuesDimension),
}

impl TraitId {
    /// All sixteen traits in display order: OCEAN, culture, values.
    pub fn all() -> Vec<TraitId> {
        OceanDimension::ALL
            .into_iter()
            .map(TraitId::Ocean)
            .chain(CultureDimension::ALL.into_iter().map(TraitId::Culture))
            .chain(ValuesDimension::ALL.into_iter().map(TraitId::Values))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            TraitId::Ocean(d) => d.name(),
            TraitId::Culture(d) => d.name(),
            TraitId::Values(d) => d.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_traits_has_sixteen_unique_entries() {
        let all = TraitId::all();
        assert_eq!(all.len(), 16);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_trait_id_serializes_as_flat_key() {
        let json = serde_json::to_string(&TraitId::Culture(CultureDimension::PowerDistance)).unwrap();
        assert_eq!(json, "\"powerDistance\"");
        let json = serde_json::to_string(&TraitId::Ocean(OceanDimension::Openness)).unwrap();
        assert_eq!(json, "\"openness\"");
    }

    #[test]
    fn test_trait_id_deserializes_each_category() {
        let t: TraitId = serde_json::from_str("\"customerFocus\"").unwrap();
        assert_eq!(t, TraitId::Values(ValuesDimension::CustomerFocus));
        let t: TraitId = serde_json::from_str("\"neuroticism\"").unwrap();
        assert_eq!(t, TraitId::Ocean(OceanDimension::Neuroticism));
        assert!(serde_json::from_str::<TraitId>("\"charisma\"").is_err());
    }
}
