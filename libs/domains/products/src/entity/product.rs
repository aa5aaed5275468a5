use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use super::category;

/// Row in the `products` table; `name` is backed by `idx_products_name_unique`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// A product row joined with its (optional) category
impl From<(Model, Option<category::Model>)> for crate::models::Product {
    fn from((model, category): (Model, Option<category::Model>)) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            category: category.map(|c| c.name),
        }
    }
}

impl From<crate::models::NewProduct> for ActiveModel {
    fn from(input: crate::models::NewProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            category_id: Set(input.category_id),
        }
    }
}
