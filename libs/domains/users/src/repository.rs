use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails with [`UserError::DuplicateEmail`] if the email is taken
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Exact, case-sensitive email lookup
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    by_email: HashMap<String, User>,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Emails are unique and compared exactly, same as the `users.email` constraint.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                next_id: 1,
                by_email: HashMap::new(),
            })),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.by_email.contains_key(&user.email) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        let id = store.next_id;
        store.next_id += 1;

        let user = User {
            id,
            email: user.email,
            password_hash: user.password_hash,
        };
        store.by_email.insert(user.email.clone(), user.clone());

        tracing::info!(user_id = id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.by_email.get(email).cloned())
    }
}
