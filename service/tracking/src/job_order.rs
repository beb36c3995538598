use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_tracking::{
    command::{CreateJobOrderCommand, UpdateJobOrderCommand},
    exception::{TrackingException, TrackingResult},
    model::{
        entity::{job_order::JobOrderStatus, JobOrder},
        vo::JobOrderFilter,
    },
    repository::JobOrderRepo,
    service::JobOrderService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct JobOrderServiceImpl {
    job_order_repo: Arc<dyn JobOrderRepo>,
}

impl JobOrderServiceImpl {
    async fn get_or_not_found(&self, id: Uuid) -> TrackingResult<JobOrder> {
        self.job_order_repo.get_by_id(id).await.map_err(|_| TrackingException::NotFound {
            entity: "job order",
            id,
        })
    }
}

#[async_trait]
impl JobOrderService for JobOrderServiceImpl {
    async fn create(&self, cmd: CreateJobOrderCommand) -> TrackingResult<JobOrder> {
        if cmd.quantity <= 0 {
            return Err(TrackingException::Validation {
                message: "quantity must be positive".to_string(),
            });
        }
        if self.job_order_repo.get_by_job_number(&cmd.job_number).await?.is_some() {
            return Err(TrackingException::DuplicateJobNumber {
                job_number: cmd.job_number,
            });
        }
        let order = JobOrder {
            id: Uuid::new_v4(),
            job_number: cmd.job_number,
            device_type: cmd.device_type,
            device_model: cmd.device_model,
            quantity: cmd.quantity,
            completed_count: 0,
            due_date: cmd.due_date,
            priority: cmd.priority,
            status: JobOrderStatus::Pending,
            assignee_id: cmd.assignee_id,
            created_time: Utc::now(),
        };
        let order = self.job_order_repo.insert(order).await?;
        self.job_order_repo.save_changed().await?;
        tracing::info!(job_order = %order.id, number = %order.job_number, "Job order created.");
        Ok(order)
    }

    async fn list(&self, filter: JobOrderFilter) -> TrackingResult<Vec<JobOrder>> {
        Ok(self.job_order_repo.query(&filter).await?)
    }

    async fn get(&self, id: Uuid) -> TrackingResult<JobOrder> {
        self.get_or_not_found(id).await
    }

    async fn update(&self, id: Uuid, cmd: UpdateJobOrderCommand) -> TrackingResult<JobOrder> {
        let mut order = self.get_or_not_found(id).await?;
        if let Some(device_type) = cmd.device_type {
            order.device_type = device_type;
        }
        if let Some(device_model) = cmd.device_model {
            order.device_model = device_model;
        }
        if let Some(due_date) = cmd.due_date {
            order.due_date = due_date;
        }
        if let Some(priority) = cmd.priority {
            order.priority = priority;
        }
        // Status comes from outside, it is never derived here.
        if let Some(status) = cmd.status {
            order.status = status;
        }
        if cmd.assignee_id.is_some() {
            order.assignee_id = cmd.assignee_id;
        }
        let order = self.job_order_repo.update(order).await?;
        self.job_order_repo.save_changed().await?;
        Ok(order)
    }

    async fn cancel(&self, id: Uuid) -> TrackingResult<JobOrder> {
        let mut order = self.get_or_not_found(id).await?;
        if order.status == JobOrderStatus::Completed {
            return Err(TrackingException::Validation {
                message: format!("job order: {} is already completed", id),
            });
        }
        order.status = JobOrderStatus::Cancelled;
        let order = self.job_order_repo.update(order).await?;
        self.job_order_repo.save_changed().await?;
        tracing::info!(job_order = %id, "Job order cancelled.");
        Ok(order)
    }
}
