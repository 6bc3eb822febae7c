// Insight layer: band classification, labels and taglines, recommendations,
// and the assembled per-profile report.

pub mod bands;
pub mod handlers;
pub mod labels;
pub mod recommendations;
pub mod report;
