//! Center aggregate and its owned entities.

mod approved_file;
mod center;
mod fee;
mod review;

pub use approved_file::{ApprovedFile, ProofParent};
pub use center::Center;
pub use fee::{reconcile_fees, CenterFee, FeeReconciliation, PeriodType};
pub use review::ReviewAnswer;
