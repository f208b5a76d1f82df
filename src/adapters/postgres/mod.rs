//! PostgreSQL adapters - sqlx-backed implementations of the repository
//! and reader ports.

mod approved_file_repository;
mod center_repository;
mod fee_repository;
mod lector_repository;
mod post_reader;
mod review_answer_repository;
mod review_reader;
mod user_repository;

pub use approved_file_repository::PostgresApprovedFileRepository;
pub use center_repository::PostgresCenterRepository;
pub use fee_repository::PostgresFeeRepository;
pub use lector_repository::PostgresLectorRepository;
pub use post_reader::PostgresPostReader;
pub use review_answer_repository::PostgresReviewAnswerRepository;
pub use review_reader::PostgresReviewReader;
pub use user_repository::PostgresUserRepository;
