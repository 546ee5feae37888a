/// An operator account, keyed by username.
///
/// Separate concern from the league roster; nothing in the club/team side
/// references users. The password is stored only as a hash produced by the
/// injected hashing capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub enabled: bool,
}
