use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `game`, `training` or `other`.
    pub kind: String,
    pub date: DateTimeUtc,
    pub arena_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
    pub home_team_id: Option<i32>,
    pub visitor_team_id: Option<i32>,
    pub first_period_home: Option<i32>,
    pub first_period_visitor: Option<i32>,
    pub second_period_home: Option<i32>,
    pub second_period_visitor: Option<i32>,
    pub third_period_home: Option<i32>,
    pub third_period_visitor: Option<i32>,
    pub final_home: Option<i32>,
    pub final_visitor: Option<i32>,
    /// One of `draw`, `overtime` or `penalties` when the game went past regulation.
    pub overtime: Option<String>,
    pub team_id: i32,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
