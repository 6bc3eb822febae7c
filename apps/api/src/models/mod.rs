pub mod responses;
pub mod scores;
pub mod traits;
