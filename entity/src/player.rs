use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
    /// One of `goalie`, `defender` or `forward`.
    pub position: String,
    /// Either `left` or `right`.
    pub hand: String,
    pub birth_date: Option<Date>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub hidden: bool,
    pub team_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
