// Credential handling. Hashing only — session/token protocols live with
// the calling transport, not here.

pub mod password;

pub use password::{BcryptPasswordHasher, PasswordHasher};
