use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub short_title: String,
    pub long_title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub position: i32,
    pub locked: bool,
    pub team_id: i32,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
