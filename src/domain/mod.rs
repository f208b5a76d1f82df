//! Domain layer - pure types and business rules, no I/O.

pub mod center;
pub mod foundation;
pub mod lector;
pub mod reporting;
