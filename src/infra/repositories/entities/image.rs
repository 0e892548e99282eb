//! Uploaded profile photo.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "faculty", table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub imageable_id: String,
    /// File name under the uploads directory
    pub src: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::ImageableId",
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
