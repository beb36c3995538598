use chrono::{DateTime, Utc};
use database_model::tracking::prelude::*;
use domain_tracking::{
    model::entity::{
        task::{ReviewStatus, TaskStatus},
        Task,
    },
    repository::{DBRepository, MutableRepository, ReadOnlyRepository, TaskRepo},
};
use sea_orm::{prelude::*, ActiveValue::Set, QueryOrder};

use crate::infrastructure::database::OrmRepo;

fn to_active_model(entity: &Task) -> TaskActiveModel {
    TaskActiveModel {
        id: Set(entity.id),
        technician_id: Set(entity.technician_id),
        job_order_id: Set(entity.job_order_id),
        start_time: Set(entity.start_time),
        end_time: Set(entity.end_time),
        units_completed: Set(entity.units_completed),
        serial_numbers: Set(serde_json::json!(entity.serial_numbers)),
        status: Set(entity.status as i32),
        review: Set(entity.review as i32),
        reviewed_by: Set(entity.reviewed_by),
        review_note: Set(entity.review_note.clone()),
        efficiency: Set(entity.efficiency),
        notes: Set(entity.notes.clone()),
        issues: Set(serde_json::json!(entity.issues)),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Task> for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Task> {
        TaskEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow::anyhow!("There is no such task with id: {id}"))?
            .try_into()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Task>> {
        TaskEntity::find()
            .order_by_desc(TaskColumn::StartTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Task> for OrmRepo {
    async fn insert(&self, entity: Task) -> anyhow::Result<Task> {
        to_active_model(&entity).insert(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn update(&self, entity: Task) -> anyhow::Result<Task> {
        to_active_model(&entity).update(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(TaskEntity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

impl DBRepository<Task> for OrmRepo {}

#[async_trait::async_trait]
impl TaskRepo for OrmRepo {
    async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>> {
        TaskEntity::find()
            .filter(TaskColumn::TechnicianId.eq(technician_id))
            .order_by_desc(TaskColumn::StartTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_by_job_order(&self, job_order_id: Uuid) -> anyhow::Result<Vec<Task>> {
        TaskEntity::find()
            .filter(TaskColumn::JobOrderId.eq(job_order_id))
            .order_by_desc(TaskColumn::StartTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_pending_review(&self, department: Option<String>) -> anyhow::Result<Vec<Task>> {
        let mut select = TaskEntity::find()
            .filter(TaskColumn::Status.eq(TaskStatus::Completed as i32))
            .filter(TaskColumn::Review.eq(ReviewStatus::Pending as i32));
        if let Some(department) = department {
            select = select
                .inner_join(TechnicianEntity)
                .filter(TechnicianColumn::Department.eq(department));
        }
        select
            .order_by_asc(TaskColumn::EndTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_approved_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>> {
        TaskEntity::find()
            .filter(TaskColumn::TechnicianId.eq(technician_id))
            .filter(TaskColumn::Review.eq(ReviewStatus::Approved as i32))
            .order_by_desc(TaskColumn::StartTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_approved_since(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Task>> {
        TaskEntity::find()
            .filter(TaskColumn::Review.eq(ReviewStatus::Approved as i32))
            .filter(TaskColumn::EndTime.gte(since))
            .order_by_desc(TaskColumn::EndTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}
