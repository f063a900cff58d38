//! Faction domain module.

mod model;

pub use model::{CreateFactionRequest, Faction, UpdateFactionRequest};

use crate::repository::Repository;

pub trait FactionRepository: Repository<Faction> {}

impl<T: Repository<Faction> + ?Sized> FactionRepository for T {}
