use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub price: String,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub users: String,
    pub release_date: String,
    pub features: Vec<String>,
    pub gallery: Vec<String>,
    pub image_url: String,
    pub product_url: Option<String>,
    pub status: String,
    pub role: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub review: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
