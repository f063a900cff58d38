//! Equipment domain module.

mod acquisition;
mod model;

pub use acquisition::{ACQUISITION_SEPARATOR, join_acquisition_methods, split_acquisition_methods};
pub use model::{
    CreateEquipmentRequest, Equipment, EquipmentCategory, EquipmentWeaponType,
    UpdateEquipmentRequest,
};

use crate::repository::Repository;

pub trait EquipmentRepository: Repository<Equipment> {}

impl<T: Repository<Equipment> + ?Sized> EquipmentRepository for T {}
