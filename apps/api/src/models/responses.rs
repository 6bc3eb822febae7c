use std::collections::HashMap;

use thiserror::Error;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ResponseError {
    #[error("Response for '{question_id}' must be between 1 and 5, got {value}")]
    OutOfRange { question_id: String, value: i64 },
}

/// Validated questionnaire answers: question id → Likert response in `[1, 5]`.
///
/// Only constructible through [`ResponseSet::from_raw`], so every value the
/// aggregator sees is already in range. Ids are kept as given; ids the question
/// bank does not know (including blank ones) are skipped at aggregation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    answers: HashMap<String, u8>,
}

impl ResponseSet {
    pub fn from_raw(raw: HashMap<String, i64>) -> Result<Self, ResponseError> {
        let mut answers = HashMap::with_capacity(raw.len());
        for (question_id, value) in raw {
            if value < LIKERT_MIN as i64 || value > LIKERT_MAX as i64 {
                return Err(ResponseError::OutOfRange { question_id, value });
            }
            answers.insert(question_id, value as u8);
        }
        Ok(Self { answers })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
