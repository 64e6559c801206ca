//! Password storage for accounts.
//!
//! Only hashing lives here: nothing in the service checks a password back
//! against its hash yet.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{AppError, AppResult};

/// Hash `password` into the PHC string stored in `users.password_hash`.
///
/// Argon2id with default parameters and a fresh random salt per call.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default())
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))
}
