use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::user::User;

/// Repository contract for operator accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    async fn insert(&self, user: User) -> Result<(), DomainError>;

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<(), DomainError>;
}
