pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export the pieces handlers and binaries actually touch.
pub use extractors::AuthenticatedUserId;
pub use middleware::{authorize, AuthMiddleware};
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims, TokenKeys};

/// Payload of a login request. Both fields are required; a body missing
/// either never reaches the handler.
///
/// `Debug` is hand-written with the password redacted, same treatment as the
/// credential record's hash.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response after a successful login: the bearer token and nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}
