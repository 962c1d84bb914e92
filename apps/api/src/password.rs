//! Password hashing with Argon2id.
//!
//! Hashing is CPU-bound; the async wrappers run it on tokio's blocking pool.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

/// A valid hash of a throwaway password, verified against when the user
/// does not exist so both login failure paths cost the same.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("tienda-dummy-password").ok());

/// Builds the dummy hash now instead of on the first unknown-user login.
pub fn prepare_dummy_hash() {
    LazyLock::force(&DUMMY_HASH);
}

/// Hash a password for storage (PHC string format).
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored hash.
///
/// An unparseable stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Burns one verification's worth of work; always returns `false`.
pub fn verify_dummy(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("Hashing task failed: {}", e)))?
}

/// [`verify_password`] on the blocking pool. `None` runs the dummy check.
pub async fn verify_password_blocking(
    password: String,
    hash: Option<String>,
) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => verify_dummy(&password),
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret!").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("s3cret!", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_dummy_hash_prepared_up_front() {
        prepare_dummy_hash();
        assert!(DUMMY_HASH
            .as_deref()
            .is_some_and(|hash| hash.starts_with("$argon2id$")));
    }

    #[test]
    fn test_dummy_never_verifies() {
        assert!(!verify_dummy("tienda-dummy-password"));
    }

    #[tokio::test]
    async fn test_blocking_wrappers() {
        let hash = hash_password_blocking("s3cret!".to_string()).await.unwrap();

        assert!(verify_password_blocking("s3cret!".to_string(), Some(hash.clone()))
            .await
            .unwrap());
        assert!(!verify_password_blocking("nope".to_string(), Some(hash))
            .await
            .unwrap());
        assert!(!verify_password_blocking("s3cret!".to_string(), None)
            .await
            .unwrap());
    }
}
