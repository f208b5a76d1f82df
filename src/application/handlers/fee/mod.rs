//! Fee lifecycle handlers.
//!
//! User-facing fee deletion is always soft (issued-membership history
//! references fee rows); the bulk update is a full replace-by-diff.

mod delete_center_fee;
mod update_center_fees;

#[cfg(test)]
pub(crate) mod mocks;

pub use delete_center_fee::{DeleteCenterFeeCommand, DeleteCenterFeeHandler};
pub use update_center_fees::{FeeDetail, UpdateCenterFeesCommand, UpdateCenterFeesHandler};
