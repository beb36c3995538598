use std::sync::Arc;

use async_trait::async_trait;
use domain_tracking::{
    exception::{TrackingException, TrackingResult},
    model::entity::{
        job_order::JobOrderStatus,
        notification::{NotificationPriority, NotificationType},
        task::{ReviewStatus, TaskStatus},
        Task,
    },
    repository::{JobOrderRepo, TaskRepo},
    service::{MetricsService, NotificationService, ReviewService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ReviewServiceImpl {
    task_repo: Arc<dyn TaskRepo>,
    job_order_repo: Arc<dyn JobOrderRepo>,
    metrics_service: Arc<dyn MetricsService>,
    notification_service: Arc<dyn NotificationService>,
}

impl ReviewServiceImpl {
    async fn reviewable_task(&self, task_id: Uuid) -> TrackingResult<Task> {
        let task = self.task_repo.get_by_id(task_id).await.map_err(|_| {
            TrackingException::NotFound {
                entity: "task",
                id: task_id,
            }
        })?;
        if task.status != TaskStatus::Completed {
            return Err(TrackingException::Validation {
                message: format!("task: {} is not a completed submission", task_id),
            });
        }
        if task.review != ReviewStatus::Pending {
            return Err(TrackingException::AlreadyReviewed { id: task_id });
        }
        Ok(task)
    }
}

#[async_trait]
impl ReviewService for ReviewServiceImpl {
    async fn pending(&self, department: Option<String>) -> TrackingResult<Vec<Task>> {
        Ok(self.task_repo.get_pending_review(department).await?)
    }

    async fn approve(
        &self,
        task_id: Uuid,
        reviewer_id: Uuid,
        note: Option<String>,
    ) -> TrackingResult<Task> {
        let mut task = self.reviewable_task(task_id).await?;

        // Units reach the job order before the task is marked approved, so a
        // failed quantity guard leaves the submission pending and untouched.
        if task.units_completed > 0 {
            let order = self
                .job_order_repo
                .accumulate_units(task.job_order_id, task.units_completed)
                .await?;
            match order {
                Some(order) => {
                    if order.completed_count >= order.quantity
                        && order.status != JobOrderStatus::Completed
                    {
                        let mut order = order;
                        order.status = JobOrderStatus::Completed;
                        self.job_order_repo.update(order).await?;
                        self.job_order_repo.save_changed().await?;
                    }
                }
                None => {
                    let order = self
                        .job_order_repo
                        .get_by_id(task.job_order_id)
                        .await
                        .map_err(|_| TrackingException::NotFound {
                            entity: "job order",
                            id: task.job_order_id,
                        })?;
                    return Err(TrackingException::QuantityExceeded {
                        id: order.id,
                        quantity: order.quantity,
                        attempted: i64::from(order.completed_count)
                            + i64::from(task.units_completed),
                    });
                }
            }
        }

        task.review = ReviewStatus::Approved;
        task.reviewed_by = Some(reviewer_id);
        task.review_note = note;
        let task = self.task_repo.update(task).await?;
        self.task_repo.save_changed().await?;

        self.metrics_service.refresh_snapshot(task.technician_id).await?;
        self.notification_service
            .push(
                task.technician_id,
                NotificationType::TaskApproved,
                NotificationPriority::Normal,
                "Work session approved",
                &format!("Your submission of {} units was approved.", task.units_completed),
                task.id,
            )
            .await?;
        tracing::info!(task = %task.id, reviewer = %reviewer_id, "Task approved.");
        Ok(task)
    }

    async fn reject(
        &self,
        task_id: Uuid,
        reviewer_id: Uuid,
        note: String,
    ) -> TrackingResult<Task> {
        if note.trim().is_empty() {
            return Err(TrackingException::Validation {
                message: "a rejection needs a note".to_string(),
            });
        }
        let mut task = self.reviewable_task(task_id).await?;
        task.review = ReviewStatus::Rejected;
        task.reviewed_by = Some(reviewer_id);
        task.review_note = Some(note.clone());
        let task = self.task_repo.update(task).await?;
        self.task_repo.save_changed().await?;

        self.notification_service
            .push(
                task.technician_id,
                NotificationType::TaskRejected,
                NotificationPriority::High,
                "Work session rejected",
                &note,
                task.id,
            )
            .await?;
        tracing::info!(task = %task.id, reviewer = %reviewer_id, "Task rejected.");
        Ok(task)
    }
}
