//! Generic JSON-file repository.
//!
//! One `JsonRepository<R>` serves every entity kind. The record type decides
//! the file name, how a create request becomes a record, and how an update
//! merges; this module owns the I/O and the writer discipline.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use suzuran_core::character::{Character, CharacterRepository};
use suzuran_core::clock::{Clock, SystemClock};
use suzuran_core::error::{Result, SuzuranError};
use suzuran_core::id::{Base36IdGenerator, IdGenerator};
use suzuran_core::record::Record;
use suzuran_core::repository::Repository;
use tokio::sync::Mutex;
use tokio::task;
use tracing::debug;

use crate::paths::SuzuranPaths;
use crate::storage::{JsonCollection, Mutation};

/// Repository over one collection file.
///
/// # Features
///
/// - **Single writer**: `create`, `update` and `delete` serialize on an
///   in-process mutex and the collection's advisory file lock
/// - **Atomic writes**: Whole-file rewrite through tmp file + fsync + rename
/// - **Change detection**: An update that changes nothing is not written
/// - **Async-safe**: File I/O runs on `tokio::task::spawn_blocking`
pub struct JsonRepository<R: Record> {
    collection: JsonCollection<R>,
    write_lock: Mutex<()>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl<R: Record> JsonRepository<R> {
    /// Creates a repository over `<data_dir>/<kind file name>`.
    pub fn new(data_dir: &Path) -> Self {
        Self::with_collection(JsonCollection::new(SuzuranPaths::collection_file(
            data_dir,
            R::KIND,
        )))
    }

    pub fn with_collection(collection: JsonCollection<R>) -> Self {
        Self {
            collection,
            write_lock: Mutex::new(()),
            ids: Arc::new(Base36IdGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub(crate) fn id_generator(&self) -> Arc<dyn IdGenerator> {
        self.ids.clone()
    }

    pub fn collection(&self) -> &JsonCollection<R> {
        &self.collection
    }

    /// Creates the backing file if it does not exist yet.
    pub async fn ensure_exists(&self) -> Result<()> {
        let collection = self.collection.clone();
        run_blocking(move || collection.ensure_exists()).await
    }

    /// Runs `f` as a locked read-modify-write on the collection.
    pub(crate) async fn modify<F, O>(&self, f: F) -> Result<O>
    where
        F: FnOnce(&mut Vec<R>) -> Result<Mutation<O>> + Send + 'static,
        O: Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let collection = self.collection.clone();
        run_blocking(move || collection.update(f)).await
    }
}

/// Runs blocking file I/O off the async executor.
pub(crate) async fn run_blocking<F, O>(f: F) -> Result<O>
where
    F: FnOnce() -> Result<O> + Send + 'static,
    O: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| SuzuranError::internal(format!("Failed to spawn blocking task: {}", e)))?
}

/// Generates an id not already present in `records`.
pub(crate) fn fresh_id<R: Record>(ids: &dyn IdGenerator, records: &[R]) -> String {
    let taken: HashSet<&str> = records.iter().map(Record::id).collect();
    loop {
        let id = ids.generate();
        if !taken.contains(id.as_str()) {
            return id;
        }
    }
}

#[async_trait]
impl<R: Record> Repository<R> for JsonRepository<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let collection = self.collection.clone();
        run_blocking(move || collection.read_all()).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<R>> {
        Ok(self.list().await?.into_iter().find(|record| record.id() == id))
    }

    async fn create(&self, input: R::Create) -> Result<R> {
        let ids = self.ids.clone();
        let clock = self.clock.clone();
        let record = self
            .modify(move |records| {
                let id = fresh_id(ids.as_ref(), records);
                let record = R::from_create(id, input, &clock.now());
                records.push(record.clone());
                Ok(Mutation::Write(record))
            })
            .await?;
        debug!(kind = %R::KIND, id = record.id(), "Created record");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: R::Update) -> Result<Option<R>> {
        let target = id.to_string();
        let clock = self.clock.clone();
        let updated = self
            .modify(move |records| {
                let Some(stored) = records.iter_mut().find(|record| record.id() == target) else {
                    return Ok(Mutation::Skip(None));
                };
                let mut merged = stored.clone();
                merged.apply_update(&patch);
                if merged == *stored {
                    return Ok(Mutation::Skip(Some(merged)));
                }
                merged.touch(&clock.now());
                *stored = merged.clone();
                Ok(Mutation::Write(Some(merged)))
            })
            .await?;
        match &updated {
            Some(_) => debug!(kind = %R::KIND, id, "Updated record"),
            None => debug!(kind = %R::KIND, id, "Update target not found"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let target = id.to_string();
        let removed = self
            .modify(move |records| {
                let before = records.len();
                records.retain(|record| record.id() != target);
                if records.len() == before {
                    Ok(Mutation::Skip(false))
                } else {
                    Ok(Mutation::Write(true))
                }
            })
            .await?;
        debug!(kind = %R::KIND, id, removed, "Delete");
        Ok(removed)
    }
}

#[async_trait]
impl CharacterRepository for JsonRepository<Character> {}
