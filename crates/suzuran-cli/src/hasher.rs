//! bcrypt-backed password hashing.

use suzuran_core::admin_user::PasswordHasher;
use suzuran_core::error::{Result, SuzuranError};

/// Hashes with bcrypt at the library's default cost, producing `$2b$` hashes
/// that verify alongside the `$2a$` hashes already on disk.
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    #[cfg(test)]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| SuzuranError::internal(format!("bcrypt hash failed: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| SuzuranError::validation(format!("invalid bcrypt hash: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = BcryptHasher::with_cost(4);
        let hash = hasher.hash("admin").unwrap();
        assert!(hash.starts_with("$2"));
        assert!(hasher.verify("admin", &hash).unwrap());
        assert!(!hasher.verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_error() {
        assert!(BcryptHasher::with_cost(4).verify("admin", "plain").is_err());
    }
}
