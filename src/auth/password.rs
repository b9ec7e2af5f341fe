use crate::error::ApiError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a password for a new credential record. Uses the default bcrypt
/// cost; fixtures that need to be fast can call bcrypt directly with a lower
/// one.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hashed_password)?)
}
