//! Rarity domain module.
//!
//! A rarity is a named rank (`SSR`, `SR`, ...) with a numeric value used for
//! ordering and an optional display image.

mod model;
mod request;

pub use model::Rarity;
pub use request::{CreateRarityRequest, UpdateRarityRequest};

use crate::repository::Repository;

/// Repository over the rarity collection.
pub trait RarityRepository: Repository<Rarity> {}

impl<T: Repository<Rarity> + ?Sized> RarityRepository for T {}
