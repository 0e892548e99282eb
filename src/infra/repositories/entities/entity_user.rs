//! Membership of a person in an organizational unit (center, department).

use sea_orm::entity::prelude::*;

use crate::domain::Membership;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "faculty", table_name = "entity_user")]
pub struct Model {
    /// Namespaced unit id, e.g. `centers:metalab`
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_entities_id: String,
    /// Person id
    #[sea_orm(primary_key, auto_increment = false)]
    pub entities_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::EntitiesId",
        to = "super::person::Column::IndividualsId"
    )]
    Person,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Membership {
    fn from(model: Model) -> Self {
        Membership {
            parent_entity: model.parent_entities_id,
            role_name: model.role_name,
        }
    }
}
