use super::model::AdminUser;
use crate::error::Result;
use crate::repository::Repository;

/// Repository over admin accounts.
#[async_trait::async_trait]
pub trait AdminUserRepository: Repository<AdminUser> {
    /// Exact, case-sensitive username lookup. Returns the first match.
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>>;

    /// Inserts `{username, password_hash}` unless a user with that name exists.
    ///
    /// The existence check and the insert happen under the same writer lock,
    /// so repeated or concurrent calls leave exactly one record.
    /// Returns whether a record was inserted.
    async fn ensure_default_admin_user(&self, username: &str, password_hash: &str)
    -> Result<bool>;
}
