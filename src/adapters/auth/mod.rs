//! Authentication adapters - TokenVerifier implementations.

mod jwt;
mod mock;

pub use jwt::JwtTokenVerifier;
pub use mock::MockTokenVerifier;
