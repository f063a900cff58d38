use crate::error::Result;

/// One-way password hashing.
///
/// The store never hashes on its own; callers that seed or migrate admin
/// users supply an implementation.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}
