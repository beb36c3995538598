//! Logged work session linking one technician to one job order.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub technician_id: Uuid,
    pub job_order_id: Uuid,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    pub units_completed: i32,
    /// Serial numbers of the finished units, json array.
    pub serial_numbers: Json,
    pub status: i32,
    pub review: i32,
    pub reviewed_by: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_note: Option<String>,
    pub efficiency: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// Issues raised during the session, json array.
    pub issues: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::technician::Entity",
        from = "Column::TechnicianId",
        to = "super::technician::Column::Id"
    )]
    Technician,
    #[sea_orm(
        belongs_to = "super::job_order::Entity",
        from = "Column::JobOrderId",
        to = "super::job_order::Column::Id"
    )]
    JobOrder,
}

impl Related<super::technician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl Related<super::job_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
