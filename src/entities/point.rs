use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A reported waste-dumping site. Rows are append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: i32,
    pub name: String,
    pub classification_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub registration_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
