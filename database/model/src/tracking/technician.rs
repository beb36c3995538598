//! Technician account with its cached performance snapshot.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "technician")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: i32,
    pub current_role: i32,
    /// Role codes this account may switch to, json array.
    pub allowed_roles: Json,
    pub department: String,
    pub specialization: Option<String>,
    pub is_active: bool,
    pub total_tasks_completed: i32,
    pub average_productivity: f64,
    pub average_efficiency: f64,
    pub utilization_rate: f64,
    pub created_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
