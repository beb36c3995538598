mod job_order;
mod notification;
mod task;
mod technician;

pub mod prelude {
    pub use super::{
        job_order::{
            ActiveModel as JobOrderActiveModel, Column as JobOrderColumn, Entity as JobOrderEntity,
            Model as JobOrderModel, PrimaryKey as JobOrderPrimaryKey, Relation as JobOrderRelation,
        },
        notification::{
            ActiveModel as NotificationActiveModel, Column as NotificationColumn,
            Entity as NotificationEntity, Model as NotificationModel,
            PrimaryKey as NotificationPrimaryKey, Relation as NotificationRelation,
        },
        task::{
            ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as TaskEntity,
            Model as TaskModel, PrimaryKey as TaskPrimaryKey, Relation as TaskRelation,
        },
        technician::{
            ActiveModel as TechnicianActiveModel, Column as TechnicianColumn,
            Entity as TechnicianEntity, Model as TechnicianModel,
            PrimaryKey as TechnicianPrimaryKey, Relation as TechnicianRelation,
        },
    };
}
