//! Band classification: three independent threshold schemes over 0 – 100 scores.
//!
//! The schemes feed different outputs and use different cut points:
//! - Badge (badge colour):      `<40` low, `40–69` moderate, `>=70` high
//! - Style (style tagline):     `<=35` lower, `36–64` balanced, `>=65` higher
//! - Narrative (insight text):  `<30`, `30–49`, `50–69`, `70–79`, `>=80`
//!
//! Callers pick the scheme that matches the output
//! they are producing. Classifying a badge with the style scheme is a bug.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeBand {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleBand {
    Lower,
    Balanced,
    Higher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandScheme {
    Badge,
    Style,
    Narrative,
}

/// Result of [`classify`], tagged with the scheme that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "scheme", content = "band", rename_all = "snake_case")]
pub enum Band {
    Badge(BadgeBand),
    Style(StyleBand),
    Narrative(NarrativeBand),
}

pub fn badge_band(score: u8) -> BadgeBand {
    match score {
        s if s >= 70 => BadgeBand::High,
        s if s >= 40 => BadgeBand::Moderate,
        _ => BadgeBand::Low,
    }
}

pub fn style_band(score: u8) -> StyleBand {
    match score {
        s if s <= 35 => StyleBand::Lower,
        s if s >= 65 => StyleBand::Higher,
        _ => StyleBand::Balanced,
    }
}

pub fn narrative_band(score: u8) -> NarrativeBand {
    match score {
        s if s >= 80 => NarrativeBand::VeryHigh,
        s if s >= 70 => NarrativeBand::High,
        s if s >= 50 => NarrativeBand::Moderate,
        s if s >= 30 => NarrativeBand::Low,
        _ => NarrativeBand::VeryLow,
    }
}

pub fn classify(score: u8, scheme: BandScheme) -> Band {
    match scheme {
        BandScheme::Badge => Band::Badge(badge_band(score)),
        BandScheme::Style => Band::Style(style_band(score)),
        BandScheme::Narrative => Band::Narrative(narrative_band(score)),
    }
}

impl BadgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeBand::Low => "Low",
            BadgeBand::Moderate => "Moderate",
            BadgeBand::High => "High",
        }
    }
}

impl StyleBand {
    pub fn label(&self) -> &'static str {
        match self {
            StyleBand::Lower => "Lower",
            StyleBand::Balanced => "Balanced",
            StyleBand::Higher => "Higher",
        }
    }
}

impl NarrativeBand {
    pub fn label(&self) -> &'static str {
        match self {
            NarrativeBand::VeryLow => "Very Low",
            NarrativeBand::Low => "Low",
            NarrativeBand::Moderate => "Moderate",
            NarrativeBand::High => "High",
            NarrativeBand::VeryHigh => "Very High",
        }
    }
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Badge(b) => b.label(),
            Band::Style(b) => b.label(),
            Band::Narrative(b) => b.label(),
        }
    }
}

/// Generic text used when a lookup table has no entry, e.g. `"Moderate (55)"`.
pub fn fallback_label(band: &str, score: u8) -> String {
    format!("{band} ({score})")
}
