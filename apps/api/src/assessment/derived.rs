//! Derived scores: culture and work-values dimensions as fixed linear blends of OCEAN.
//!
//! Every field is `50 + Σ weight × (ocean[dim] − 50)`, rounded, then clamped to 0 – 100.
//! The weights are fixed product constants.

use crate::models::scores::{CultureScores, OceanScores, TraitScores, ValuesScores};
use crate::models::traits::{CultureDimension, OceanDimension, ValuesDimension};

use crate::models::traits::OceanDimension::{
    Agreeableness as A, Conscientiousness as C, Extraversion as E, Neuroticism as N, Openness as O,
};

/// Neutral midpoint every blend is centred on.
const MIDPOINT: f64 = 50.0;

type Blend = &'static [(OceanDimension, f64)];

pub fn culture_weights(dimension: CultureDimension) -> Blend {
    match dimension {
        CultureDimension::PowerDistance => &[(C, 0.3), (N, 0.2)],
        CultureDimension::Individualism => &[(E, 0.4), (O, 0.3)],
        CultureDimension::Masculinity => &[(E, 0.3), (A, -0.2)],
        CultureDimension::UncertaintyAvoidance => &[(C, 0.4), (N, 0.3)],
        CultureDimension::LongTermOrientation => &[(C, 0.5), (O, 0.2)],
        CultureDimension::Indulgence => &[(E, 0.3), (N, -0.4)],
    }
}

pub fn values_weights(dimension: ValuesDimension) -> Blend {
    match dimension {
        ValuesDimension::Innovation => &[(O, 0.6), (E, 0.2)],
        ValuesDimension::Collaboration => &[(A, 0.5), (E, 0.3)],
        ValuesDimension::Autonomy => &[(E, -0.2), (C, 0.4)],
        ValuesDimension::Quality => &[(C, 0.6), (N, 0.2)],
        ValuesDimension::CustomerFocus => &[(A, 0.4), (E, 0.3)],
    }
}

pub fn derive_culture(ocean: &OceanScores) -> CultureScores {
    let score = |d| blend(ocean, culture_weights(d));
    CultureScores {
        power_distance: score(CultureDimension::PowerDistance),
        individualism: score(CultureDimension::Individualism),
        masculinity: score(CultureDimension::Masculinity),
        uncertainty_avoidance: score(CultureDimension::UncertaintyAvoidance),
        long_term_orientation: score(CultureDimension::LongTermOrientation),
        indulgence: score(CultureDimension::Indulgence),
    }
}

pub fn derive_values(ocean: &OceanScores) -> ValuesScores {
    let score = |d| blend(ocean, values_weights(d));
    ValuesScores {
        innovation: score(ValuesDimension::Innovation),
        collaboration: score(ValuesDimension::Collaboration),
        autonomy: score(ValuesDimension::Autonomy),
        quality: score(ValuesDimension::Quality),
        customer_focus: score(ValuesDimension::CustomerFocus),
    }
}

/// OCEAN plus both derived score sets.
pub fn derive_profile(ocean: OceanScores) -> TraitScores {
    TraitScores {
        culture: derive_culture(&ocean),
        values: derive_values(&ocean),
        ocean,
    }
}

fn blend(ocean: &OceanScores, weights: Blend) -> u8 {
    let raw = weights.iter().fold(MIDPOINT, |acc, (dimension, weight)| {
        acc + weight * (ocean.get(*dimension) as f64 - MIDPOINT)
    });
    raw.round().clamp(0.0, 100.0) as u8
}
