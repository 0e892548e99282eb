//! SeaORM entity definitions for the `faculty` schema
//!
//! These are database-specific entities separate from domain models.

pub mod department_user;
pub mod entity_user;
pub mod image;
pub mod person;

pub use department_user::Entity as DepartmentUserEntity;
pub use entity_user::Entity as EntityUserEntity;
pub use image::Entity as ImageEntity;
pub use person::{Entity as PersonEntity, Model as PersonModel};
