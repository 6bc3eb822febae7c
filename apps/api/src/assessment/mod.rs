// Assessment scoring: question bank, OCEAN aggregation, derived culture/values scores.
// Everything below handlers is pure and synchronous.

pub mod derived;
pub mod handlers;
pub mod ocean;
pub mod questions;
