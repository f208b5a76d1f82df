//! Port traits - contracts between the application core and its collaborators.

mod approved_file_repository;
mod blob_storage;
mod center_repository;
mod fee_repository;
mod lector_repository;
mod post_reader;
mod review_answer_repository;
mod review_reader;
mod token_verifier;
mod user_repository;

pub use approved_file_repository::ApprovedFileRepository;
pub use blob_storage::BlobStorage;
pub use center_repository::CenterRepository;
pub use fee_repository::FeeRepository;
pub use lector_repository::LectorRepository;
pub use post_reader::{PostReader, PostView};
pub use review_answer_repository::ReviewAnswerRepository;
pub use review_reader::{ReviewHead, ReviewReader, ReviewView};
pub use token_verifier::TokenVerifier;
pub use user_repository::UserRepository;
