use database_model::tracking::prelude::*;
use domain_tracking::{
    model::{
        entity::{
            job_order::{JobOrderStatus, JobPriority},
            JobOrder,
        },
        vo::JobOrderFilter,
    },
    repository::{DBRepository, JobOrderRepo, MutableRepository, ReadOnlyRepository},
};
use sea_orm::{
    prelude::*,
    sea_query::{BinOper, Expr},
    ActiveValue::Set,
    QueryOrder,
};

use crate::infrastructure::database::OrmRepo;

fn to_active_model(entity: &JobOrder) -> JobOrderActiveModel {
    JobOrderActiveModel {
        id: Set(entity.id),
        job_number: Set(entity.job_number.clone()),
        device_type: Set(entity.device_type.clone()),
        device_model: Set(entity.device_model.clone()),
        quantity: Set(entity.quantity),
        completed_count: Set(entity.completed_count),
        due_date: Set(entity.due_date),
        priority: Set(entity.priority as i32),
        status: Set(entity.status as i32),
        assignee_id: Set(entity.assignee_id),
        created_time: Set(entity.created_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<JobOrder> for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<JobOrder> {
        JobOrderEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow::anyhow!("There is no such job order with id: {id}"))?
            .try_into()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<JobOrder>> {
        JobOrderEntity::find()
            .order_by_asc(JobOrderColumn::DueDate)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<JobOrder> for OrmRepo {
    async fn insert(&self, entity: JobOrder) -> anyhow::Result<JobOrder> {
        to_active_model(&entity).insert(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn update(&self, entity: JobOrder) -> anyhow::Result<JobOrder> {
        to_active_model(&entity).update(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(JobOrderEntity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

impl DBRepository<JobOrder> for OrmRepo {}

#[async_trait::async_trait]
impl JobOrderRepo for OrmRepo {
    async fn get_by_job_number(&self, job_number: &str) -> anyhow::Result<Option<JobOrder>> {
        JobOrderEntity::find()
            .filter(JobOrderColumn::JobNumber.eq(job_number))
            .one(self.db.get_connection())
            .await?
            .map(TryInto::try_into)
            .transpose()
    }

    async fn query(&self, filter: &JobOrderFilter) -> anyhow::Result<Vec<JobOrder>> {
        let mut select = JobOrderEntity::find();
        if let Some(status) = filter.status {
            select = select.filter(JobOrderColumn::Status.eq(status as i32));
        }
        if let Some(priority) = filter.priority {
            select = select.filter(JobOrderColumn::Priority.eq(priority as i32));
        }
        if let Some(assignee_id) = filter.assignee_id {
            select = select.filter(JobOrderColumn::AssigneeId.eq(assignee_id));
        }
        select
            .order_by_asc(JobOrderColumn::DueDate)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn get_open(&self) -> anyhow::Result<Vec<JobOrder>> {
        JobOrderEntity::find()
            .filter(JobOrderColumn::Status.is_not_in([
                JobOrderStatus::Completed as i32,
                JobOrderStatus::Cancelled as i32,
            ]))
            .order_by_asc(JobOrderColumn::DueDate)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn accumulate_units(&self, id: Uuid, units: i32) -> anyhow::Result<Option<JobOrder>> {
        // Single conditional update: concurrent approvals serialize on the
        // row and the quantity bound can not be overshot.
        let result = JobOrderEntity::update_many()
            .col_expr(
                JobOrderColumn::CompletedCount,
                Expr::col(JobOrderColumn::CompletedCount).add(units),
            )
            .filter(JobOrderColumn::Id.eq(id))
            .filter(
                Expr::col(JobOrderColumn::CompletedCount)
                    .add(units)
                    .binary(BinOper::SmallerThanOrEqual, Expr::col(JobOrderColumn::Quantity)),
            )
            .exec(self.db.get_connection())
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(ReadOnlyRepository::<JobOrder>::get_by_id(self, id).await?))
    }
}
