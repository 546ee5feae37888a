use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::domain::errors::DomainError;
use crate::domain::repositories::UserRepository;
use crate::domain::user::User;

/// User registry. Operator accounts; deliberately decoupled from the
/// league roster side.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Creates an enabled account with a hashed credential.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), DomainError> {
        if self.users.exists_by_username(username).await? {
            return Err(DomainError::UserAlreadyExists(username.to_string()));
        }
        let user = User {
            username: username.to_string(),
            password_hash: self.hasher.hash(password)?,
            enabled: true,
        };
        self.users.insert(user).await
    }

    /// Replaces the stored hash once the old password verifies.
    pub async fn change_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;

        if !self.hasher.verify(old_password, &user.password_hash)? {
            return Err(DomainError::WrongPassword);
        }

        let new_hash = self.hasher.hash(new_password)?;
        self.users.update_password(username, &new_hash).await
    }
}
