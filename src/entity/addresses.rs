//! 地址实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub street: String,
    pub number: String,
    pub unit: Option<String>,
    pub district: String,
    pub city: String,
    pub region: String,
    #[sea_orm(unique)]
    pub student_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_address(self) -> crate::models::addresses::entities::Address {
        use crate::models::addresses::entities::Address;

        Address {
            id: self.id,
            street: self.street,
            number: self.number,
            unit: self.unit,
            district: self.district,
            city: self.city,
            region: self.region,
            student_id: self.student_id,
        }
    }
}
