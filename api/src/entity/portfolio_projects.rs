use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub gallery: Vec<String>,
    pub results: Vec<String>,
    pub tech: Vec<String>,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub publish_date: String,
    pub link: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub review: Option<String>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
