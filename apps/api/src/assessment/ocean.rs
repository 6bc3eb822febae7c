//! OCEAN aggregation: raw Likert responses to five 0 – 100 dimension scores.
//!
//! Algorithm:
//! 1. Look up each answer's dimension in the question bank (unknown ids are skipped)
//! 2. Reverse-keyed items contribute `6 - r`
//! 3. Per dimension: `round(mean * 20)`, so mean 1 → 20 and mean 5 → 100
//! 4. A dimension with no answers scores 0

use crate::assessment::questions::QuestionBank;
use crate::models::responses::ResponseSet;
use crate::models::scores::OceanScores;
use crate::models::traits::OceanDimension;

/// Likert mean → 0 – 100 scale factor.
const LIKERT_SCALE: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: u32,
    count: u32,
}

pub fn aggregate_ocean(bank: &QuestionBank, responses: &ResponseSet) -> OceanScores {
    let mut tallies = [Tally::default(); 5];

    for (question_id, response) in responses.iter() {
        if let Some((dimension, value)) = bank.score_response(question_id, response) {
            let tally = &mut tallies[slot(dimension)];
            tally.sum += value as u32;
            tally.count += 1;
        }
    }

    let mut scores = OceanScores::default();
    for dimension in OceanDimension::ALL {
        let Tally { sum, count } = tallies[slot(dimension)];
        if count > 0 {
            let mean = sum as f64 / count as f64;
            scores.set(dimension, (mean * LIKERT_SCALE).round() as u8);
        }
    }
    scores
}

/// Number of answers whose question id is known to the bank.
pub fn count_recognized(bank: &QuestionBank, responses: &ResponseSet) -> usize {
    responses
        .iter()
        .filter(|(id, _)| bank.lookup(id).is_some())
        .count()
}

fn slot(dimension: OceanDimension) -> usize {
    match dimension {
        OceanDimension::Openness => 0,
        OceanDimension::Conscientiousness => 1,
        OceanDimension::Extraversion => 2,
        OceanDimension::Agreeableness => 3,
        OceanDimension::Neuroticism => 4,
    }
}
