//! Admin user persistence.

use async_trait::async_trait;
use suzuran_core::admin_user::{AdminUser, AdminUserRepository, CreateAdminUserRequest};
use suzuran_core::error::Result;
use suzuran_core::record::Record;
use suzuran_core::repository::Repository;
use tracing::info;

use crate::json_repository::{JsonRepository, fresh_id};
use crate::storage::Mutation;

#[async_trait]
impl AdminUserRepository for JsonRepository<AdminUser> {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUser>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|user| user.username == username))
    }

    async fn ensure_default_admin_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let input = CreateAdminUserRequest {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        let ids = self.id_generator();
        let inserted = self
            .modify(move |users| {
                if users.iter().any(|user| user.username == input.username) {
                    return Ok(Mutation::Skip(false));
                }
                let id = fresh_id(ids.as_ref(), users);
                users.push(AdminUser::from_create(id, input, ""));
                Ok(Mutation::Write(true))
            })
            .await?;
        if inserted {
            info!(username, "Seeded default admin user");
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonRepository::<AdminUser>::new(temp_dir.path());

        assert!(repo.ensure_default_admin_user("admin", "$2b$10$x").await.unwrap());
        assert!(!repo.ensure_default_admin_user("admin", "$2b$10$y").await.unwrap());

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password_hash, "$2b$10$x");
    }

    #[tokio::test]
    async fn test_find_by_username_is_exact() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonRepository::<AdminUser>::new(temp_dir.path());
        repo.ensure_default_admin_user("admin", "h").await.unwrap();

        assert!(repo.find_by_username("admin").await.unwrap().is_some());
        assert!(repo.find_by_username("Admin").await.unwrap().is_none());
        assert!(repo.find_by_username("adm").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_seeding_inserts_once() {
        let temp_dir = TempDir::new().unwrap();
        let repo = std::sync::Arc::new(JsonRepository::<AdminUser>::new(temp_dir.path()));

        let a = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.ensure_default_admin_user("admin", "h").await })
        };
        let b = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.ensure_default_admin_user("admin", "h").await })
        };
        let inserted = [a.await.unwrap().unwrap(), b.await.unwrap().unwrap()];

        assert_eq!(inserted.iter().filter(|i| **i).count(), 1);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
