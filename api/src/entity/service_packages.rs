use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price_label: String,
    pub target: Option<String>,
    pub features: Vec<String>,
    pub duration: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub optional_note: Option<String>,
    pub popular: bool,
    pub sort_order: i32,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
