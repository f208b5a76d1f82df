//! Foundation value objects shared across the domain.

mod errors;
mod ids;
mod ownership;
mod page;
mod principal;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind};
pub use ids::{AnswerId, CenterId, FeeId, FileId, LectorId, PostId, ReviewId, UserId};
pub use ownership::OwnedByUser;
pub use page::{paginate, Page, Paginated};
pub use principal::{Principal, Role};
pub use timestamp::Timestamp;
