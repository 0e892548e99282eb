//! Person database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Membership, Person};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "faculty", table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub individuals_id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub rank: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entity_user::Entity")]
    EntityUser,
    #[sea_orm(has_one = "super::image::Entity")]
    Image,
    #[sea_orm(has_many = "super::department_user::Entity")]
    DepartmentUser,
}

impl Related<super::entity_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntityUser.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::department_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DepartmentUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert database model to domain entity
    pub fn into_person(self, image: Option<String>, memberships: Vec<Membership>) -> Person {
        Person {
            id: self.individuals_id,
            first_name: self.first_name,
            last_name: self.last_name,
            display_name: self.display_name,
            email: self.email,
            rank: self.rank,
            image,
            memberships,
        }
    }
}
