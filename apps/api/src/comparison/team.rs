//! Team profiles: aggregate member OCEAN scores into one comparable profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assessment::derived::derive_profile;
use crate::models::scores::{OceanScores, TraitScores};
use crate::models::traits::OceanDimension;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub ocean: OceanScores,
}

#[derive(Debug, Error, PartialEq)]
pub enum TeamError {
    #[error("A team needs at least one member")]
    NoMembers,

    #[error("Member '{name}' has {dimension} score {score}; scores must be 0-100")]
    ScoreOutOfRange {
        name: String,
        dimension: &'static str,
        score: u8,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionSpread {
    pub dimension: OceanDimension,
    pub min: u8,
    pub max: u8,
    pub spread: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub member_count: usize,
    /// Mean OCEAN with culture and values derived from that mean.
    pub average: TraitScores,
    pub spread: Vec<DimensionSpread>,
    pub most_pronounced: OceanDimension,
    pub least_pronounced: OceanDimension,
}

/// Rejects any member whose OCEAN scores fall outside 0 – 100.
pub fn validate_members(members: &[MemberProfile]) -> Result<(), TeamError> {
    for member in members {
        if let Some((dimension, score)) = member.ocean.out_of_range() {
            return Err(TeamError::ScoreOutOfRange {
                name: member.name.clone(),
                dimension: dimension.name(),
                score,
            });
        }
    }
    Ok(())
}

/// Per-dimension mean, rounded. `None` for an empty team.
pub fn team_average(members: &[MemberProfile]) -> Option<OceanScores> {
    if members.is_empty() {
        return None;
    }
    let mut average = OceanScores::default();
    for dimension in OceanDimension::ALL {
        let sum: u32 = members.iter().map(|m| m.ocean.get(dimension) as u32).sum();
        let mean = sum as f64 / members.len() as f64;
        average.set(dimension, mean.round() as u8);
    }
    Some(average)
}

pub fn summarize_team(name: &str, members: &[MemberProfile]) -> Result<TeamProfile, TeamError> {
    validate_members(members)?;
    let mean = team_average(members).ok_or(TeamError::NoMembers)?;

    let spread = OceanDimension::ALL
        .into_iter()
        .map(|dimension| {
            let scores = members.iter().map(|m| m.ocean.get(dimension));
            let min = scores.clone().min().unwrap_or(0);
            let max = scores.max().unwrap_or(0);
            DimensionSpread {
                dimension,
                min,
                max,
                spread: max - min,
            }
        })
        .collect();

    // Ties resolve to the earliest dimension in OCEAN order.
    let most_pronounced = OceanDimension::ALL
        .into_iter()
        .rev()
        .max_by_key(|d| mean.get(*d))
        .unwrap_or(OceanDimension::Openness);
    let least_pronounced = OceanDimension::ALL
        .into_iter()
        .min_by_key(|d| mean.get(*d))
        .unwrap_or(OceanDimension::Openness);

    Ok(TeamProfile {
        name: name.to_string(),
        member_count: members.len(),
        average: derive_profile(mean),
        spread,
        most_pronounced,
        least_pronounced,
    })
}
