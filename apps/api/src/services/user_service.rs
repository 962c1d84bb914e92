//! User registration and login.
//!
//! Login only checks credentials; no session or token is issued.

use tracing::{info, warn};

use tienda_core::validation::{validate_password, validate_username};
use tienda_core::{NewUser, User};
use tienda_store::{Store, StoreError};

use crate::error::{ApiError, ApiResult};
use crate::password::{hash_password_blocking, verify_password_blocking};

/// Message for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// User operations.
#[derive(Debug, Clone)]
pub struct UserService {
    store: Store,
}

impl UserService {
    pub fn new(store: Store) -> Self {
        UserService { store }
    }

    /// Registers a user. The returned user serializes without its hash.
    ///
    /// Surrounding whitespace is stripped from the username, so `" ana "`
    /// and `"ana"` are the same account.
    pub async fn register(&self, username: String, password: String) -> ApiResult<User> {
        let username = username.trim().to_string();
        validate_username(&username)?;
        validate_password(&password)?;

        // Cheap pre-check; the insert below is what enforces uniqueness
        if self.store.users().get_by_username(&username).is_ok() {
            return Err(StoreError::duplicate("username", username).into());
        }

        let password_hash = hash_password_blocking(password).await?;
        let user = self.store.users().insert(NewUser {
            username,
            password_hash,
        })?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks credentials. Unknown users and wrong passwords fail the same way.
    pub async fn login(&self, username: &str, password: String) -> ApiResult<User> {
        let username = username.trim();
        let user = self.store.users().get_by_username(username).ok();
        let hash = user.as_ref().map(|u| u.password_hash.clone());

        let verified = verify_password_blocking(password, hash).await?;

        match user {
            Some(user) if verified => {
                info!(user_id = %user.id, username = %user.username, "Login succeeded");
                Ok(user)
            }
            _ => {
                warn!(username = %username, "Login failed");
                Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UserService {
        UserService::new(Store::new())
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let service = service();
        let user = service
            .register("ana".to_string(), "s3cret!".to_string())
            .await
            .unwrap();

        assert_eq!(user.username, "ana");
        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "s3cret!");

        let logged_in = service.login("ana", "s3cret!".to_string()).await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let service = service();

        assert!(matches!(
            service.register("  ".to_string(), "s3cret!".to_string()).await,
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            service.register("ana".to_string(), String::new()).await,
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            service.register("ana".to_string(), "abc".to_string()).await,
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let service = service();
        let first = service
            .register("ana".to_string(), "s3cret!".to_string())
            .await
            .unwrap();

        let err = service
            .register("ana".to_string(), "different!".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        // Original password still works, the new one does not
        let user = service.login("ana", "s3cret!".to_string()).await.unwrap();
        assert_eq!(user.id, first.id);
        assert!(service.login("ana", "different!".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_username_whitespace_is_stripped() {
        let service = service();
        let user = service
            .register(" ana ".to_string(), "s3cret!".to_string())
            .await
            .unwrap();
        assert_eq!(user.username, "ana");

        let err = service
            .register("ana".to_string(), "other-pass".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        let logged_in = service.login("ana ", "s3cret!".to_string()).await.unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_login_failures_look_identical() {
        let service = service();
        service
            .register("ana".to_string(), "s3cret!".to_string())
            .await
            .unwrap();

        let wrong_password = service.login("ana", "nope!!".to_string()).await.unwrap_err();
        let unknown_user = service.login("bob", "s3cret!".to_string()).await.unwrap_err();

        assert!(matches!(wrong_password, ApiError::Unauthorized(_)));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), INVALID_CREDENTIALS);
    }
}
