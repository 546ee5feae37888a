// Password hashing capability
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::errors::DomainError;

/// Opaque password-hashing capability consumed by the user registry.
///
/// The registry never sees plaintext handling details; swapping the
/// algorithm is an implementation change behind this trait.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a storable digest.
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Verifies a plaintext password against a stored digest.
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, DomainError>;
}

/// bcrypt-backed [`PasswordHasher`].
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Lower costs are for tests only.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        hash(plaintext, self.cost).map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, DomainError> {
        verify(plaintext, digest).map_err(|e| DomainError::Internal(e.to_string()))
    }
}
