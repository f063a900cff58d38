//! Tarot domain module.

mod model;

pub use model::{
    CreateTarotRequest, LEGACY_ICON_PREFIX, Tarot, TarotAcquisitionMethod, UpdateTarotRequest,
    normalize_legacy_icon,
};

use crate::repository::Repository;

pub trait TarotRepository: Repository<Tarot> {}

impl<T: Repository<Tarot> + ?Sized> TarotRepository for T {}
