//! Bearer-token authentication
//!
//! Tokens are issued by the account service; this backend only verifies them
//! to identify the caller of a write.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtVerifier};
pub use middleware::AuthUser;
