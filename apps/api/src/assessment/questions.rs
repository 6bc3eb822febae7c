//! Question bank: maps question ids to OCEAN dimensions and marks reverse-keyed items.
//!
//! The built-in bank is the canonical 40-item questionnaire (`ocean_1` … `ocean_40`).
//! Items cycle E, A, C, N, O; every second block of five is reverse-keyed, which gives
//! each dimension four forward and four reverse items.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::responses::{LIKERT_MAX, LIKERT_MIN};
use crate::models::traits::OceanDimension;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub dimension: OceanDimension,
    #[serde(default)]
    pub reverse_scored: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum QuestionBankError {
    #[error("Question bank is empty")]
    Empty,

    #[error("Question id must not be empty")]
    EmptyId,

    #[error("Duplicate question id '{0}'")]
    DuplicateId(String),
}

/// Immutable after construction; shared across requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

/// Item order defines the dimension cycle below.
const BUILTIN_ITEMS: [&str; 40] = [
    "I am the life of the party.",
    "I sympathize with others' feelings.",
    "I get chores done right away.",
    "I have frequent mood swings.",
    "I have a vivid imagination.",
    "I don't talk a lot.",
    "I am not interested in other people's problems.",
    "I often forget to put things back in their proper place.",
    "I am relaxed most of the time.",
    "I am not interested in abstract ideas.",
    "I talk to a lot of different people at parties.",
    "I feel others' emotions.",
    "I like order.",
    "I get upset easily.",
    "I have excellent ideas.",
    "I keep in the background.",
    "I am not really interested in others.",
    "I make a mess of things.",
    "I seldom feel blue.",
    "I have difficulty understanding abstract ideas.",
    "I feel comfortable around people.",
    "I take time out for others.",
    "I pay attention to details.",
    "I worry about things.",
    "I am quick to understand things.",
    "I have little to say.",
    "I insult people.",
    "I leave my belongings around.",
    "I am rarely irritated.",
    "I do not have a good imagination.",
    "I start conversations.",
    "I make people feel at ease.",
    "I follow a schedule.",
    "I get stressed out easily.",
    "I spend time reflecting on things.",
    "I don't like to draw attention to myself.",
    "I feel little concern for others.",
    "I shirk my duties.",
    "I remain calm under pressure.",
    "I avoid philosophical discussions.",
];

const DIMENSION_CYCLE: [OceanDimension; 5] = [
    OceanDimension::Extraversion,
    OceanDimension::Agreeableness,
    OceanDimension::Conscientiousness,
    OceanDimension::Neuroticism,
    OceanDimension::Openness,
];

impl QuestionBank {
    /// The canonical 40-item bank.
    pub fn builtin() -> Self {
        let questions: Vec<Question> = BUILTIN_ITEMS
            .iter()
            .enumerate()
            .map(|(i, text)| Question {
                id: format!("ocean_{}", i + 1),
                text: text.to_string(),
                dimension: DIMENSION_CYCLE[i % DIMENSION_CYCLE.len()],
                reverse_scored: (i / DIMENSION_CYCLE.len()) % 2 == 1,
            })
            .collect();
        // Ids are `ocean_1..=40`, unique by construction.
        let index = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self { questions, index }
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }
        let index = build_index(&questions)?;
        Ok(Self { questions, index })
    }

    /// Loads a bank from a JSON array of questions.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank '{}'", path.display()))?;
        let questions: Vec<Question> = serde_json::from_str(&raw)
            .with_context(|| format!("Question bank '{}' is not valid JSON", path.display()))?;
        let bank = Self::from_questions(questions)
            .with_context(|| format!("Question bank '{}' is invalid", path.display()))?;
        Ok(bank)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn lookup(&self, question_id: &str) -> Option<&Question> {
        self.index.get(question_id).map(|&i| &self.questions[i])
    }

    /// Dimension and reverse-adjusted value for one answer, or `None` for unknown ids.
    /// Reverse-keyed items contribute `6 - r`.
    pub fn score_response(&self, question_id: &str, response: u8) -> Option<(OceanDimension, u8)> {
        let question = self.lookup(question_id)?;
        let value = if question.reverse_scored {
            (LIKERT_MAX + LIKERT_MIN) - response
        } else {
            response
        };
        Some((question.dimension, value))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn build_index(questions: &[Question]) -> Result<HashMap<String, usize>, QuestionBankError> {
    let mut index = HashMap::with_capacity(questions.len());
    for (i, q) in questions.iter().enumerate() {
        if q.id.trim().is_empty() {
            return Err(QuestionBankError::EmptyId);
        }
        if index.insert(q.id.clone(), i).is_some() {
            return Err(QuestionBankError::DuplicateId(q.id.clone()));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn question(id: &str, dimension: OceanDimension, reverse_scored: bool) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Item {id}"),
            dimension,
            reverse_scored,
        }
    }

    #[test]
    fn test_builtin_has_forty_items_eight_per_dimension() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.len(), 40);
        for d in OceanDimension::ALL {
            let items: Vec<_> = bank.questions().iter().filter(|q| q.dimension == d).collect();
            assert_eq!(items.len(), 8, "{d:?} should have 8 items");
            let reversed = items.iter().filter(|q| q.reverse_scored).count();
            assert_eq!(reversed, 4, "{d:?} should have 4 reverse-keyed items");
        }
    }

    #[test]
    fn test_builtin_index_resolves_every_item() {
        let bank = QuestionBank::builtin();
        for (i, q) in bank.questions().iter().enumerate() {
            assert_eq!(q.id, format!("ocean_{}", i + 1));
            assert_eq!(bank.lookup(&q.id), Some(q));
        }
        // Same items through the validating constructor: no duplicate or blank ids.
        let rebuilt = QuestionBank::from_questions(bank.questions().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 40);
    }

    #[test]
    fn test_ocean_6_is_reverse_keyed_extraversion() {
        let bank = QuestionBank::builtin();
        let q = bank.lookup("ocean_6").unwrap();
        assert_eq!(q.dimension, OceanDimension::Extraversion);
        assert!(q.reverse_scored);
        assert_eq!(
            bank.score_response("ocean_6", 1),
            Some((OceanDimension::Extraversion, 5))
        );
    }

    #[test]
    fn test_forward_item_passes_value_through() {
        let bank = QuestionBank::builtin();
        assert_eq!(
            bank.score_response("ocean_5", 4),
            Some((OceanDimension::Openness, 4))
        );
    }

    #[test]
    fn test_unknown_id_scores_none() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.score_response("ocean_41", 3), None);
        assert_eq!(bank.score_response("custom_q", 3), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = QuestionBank::from_questions(vec![
            question("q1", OceanDimension::Openness, false),
            question("q1", OceanDimension::Neuroticism, true),
        ])
        .unwrap_err();
        assert_eq!(err, QuestionBankError::DuplicateId("q1".to_string()));
    }

    #[test]
    fn test_empty_bank_rejected() {
        assert_eq!(
            QuestionBank::from_questions(vec![]).unwrap_err(),
            QuestionBankError::Empty
        );
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "q1", "text": "I enjoy art.", "dimension": "openness"}},
                {{"id": "q2", "text": "I am messy.", "dimension": "conscientiousness", "reverse_scored": true}}
            ]"#
        )
        .unwrap();

        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.lookup("q1").unwrap().reverse_scored);
        assert_eq!(
            bank.score_response("q2", 2),
            Some((OceanDimension::Conscientiousness, 4))
        );
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "q1", "text": "x", "dimension": "charisma"}}]"#).unwrap();
        let err = QuestionBank::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = QuestionBank::load(Path::new("/nonexistent/bank.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read question bank"));
    }
}
