//! Generic repository trait shared by every entity kind.
//!
//! Entity-specific traits (`CharacterRepository`, `AdminUserRepository`) extend
//! this one; the remaining kinds expose it through a per-kind alias trait.

use crate::error::Result;
use crate::record::Record;

/// An abstract repository over one collection of records.
///
/// This trait defines the contract for persisting and retrieving records,
/// decoupling callers from the specific storage mechanism.
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Id allocation on create
/// - Serializing writers to the same collection
/// - Surfacing unreadable storage as an error, never as an empty collection
#[async_trait::async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Returns every record in storage order.
    async fn list(&self) -> Result<Vec<R>>;

    /// Finds a record by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(R))`: Record found
    /// - `Ok(None)`: Record not found
    /// - `Err(SuzuranError)`: Storage could not be read
    async fn find_by_id(&self, id: &str) -> Result<Option<R>>;

    /// Allocates an id, builds the record, appends and persists it.
    async fn create(&self, input: R::Create) -> Result<R>;

    /// Merges `patch` over the stored record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(R))`: The record after the merge
    /// - `Ok(None)`: No record with that id
    /// - `Err(SuzuranError)`: Storage could not be read or written
    async fn update(&self, id: &str, patch: R::Update) -> Result<Option<R>>;

    /// Removes the record with `id`.
    ///
    /// Returns `Ok(false)` when nothing was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}
