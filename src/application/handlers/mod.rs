//! Command and query handlers, grouped by workflow.

pub mod approval;
pub mod fee;
pub mod reporting;
pub mod review_answer;
