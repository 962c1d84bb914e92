//! # User Repository
//!
//! Users are keyed by username. The uniqueness check and the insert happen
//! under the same lock, so two concurrent registrations of one name cannot
//! both succeed.

use chrono::Utc;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::new_id;
use crate::store::Store;
use tienda_core::{NewUser, User};

/// Repository for registered users.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(store: Store) -> Self {
        UserRepository { store }
    }

    /// Inserts a user with a fresh id and creation time.
    ///
    /// ## Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(StoreError::Duplicate)` - Username taken; existing user untouched
    pub fn insert(&self, new_user: NewUser) -> StoreResult<User> {
        let mut data = self.store.lock();
        if data.users.contains_key(&new_user.username) {
            return Err(StoreError::duplicate("username", new_user.username));
        }

        let user = User {
            id: new_id(),
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        data.users.insert(user.username.clone(), user.clone());
        drop(data);

        debug!(id = %user.id, username = %user.username, "Inserted user");
        Ok(user)
    }

    /// Looks a user up by username.
    pub fn get_by_username(&self, username: &str) -> StoreResult<User> {
        self.store
            .lock()
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| StoreError::not_found("User", username))
    }
}
