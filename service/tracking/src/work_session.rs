use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_tracking::{
    command::{CompleteTaskCommand, StartTaskCommand},
    exception::{TrackingException, TrackingResult},
    model::{
        entity::{
            notification::{NotificationPriority, NotificationType},
            task::{ReviewStatus, TaskStatus},
            Task,
        },
        vo::metrics,
    },
    repository::{JobOrderRepo, TaskRepo, TechnicianRepo},
    service::{NotificationService, WorkSessionService},
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct WorkSessionServiceImpl {
    task_repo: Arc<dyn TaskRepo>,
    job_order_repo: Arc<dyn JobOrderRepo>,
    technician_repo: Arc<dyn TechnicianRepo>,
    notification_service: Arc<dyn NotificationService>,
}

impl WorkSessionServiceImpl {
    /// A session is only visible to the technician who opened it.
    async fn owned_task(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task> {
        let task = self.task_repo.get_by_id(task_id).await.map_err(|_| {
            TrackingException::NotFound {
                entity: "task",
                id: task_id,
            }
        })?;
        if task.technician_id != technician_id {
            return Err(TrackingException::NotFound {
                entity: "task",
                id: task_id,
            });
        }
        Ok(task)
    }

    async fn transition(
        &self,
        task_id: Uuid,
        technician_id: Uuid,
        from: &[TaskStatus],
        to: TaskStatus,
    ) -> TrackingResult<Task> {
        let mut task = self.owned_task(task_id, technician_id).await?;
        if !from.contains(&task.status) {
            return Err(TrackingException::InvalidStatusChange {
                id: task_id,
                from: task.status,
                to,
            });
        }
        task.status = to;
        let task = self.task_repo.update(task).await?;
        self.task_repo.save_changed().await?;
        Ok(task)
    }
}

#[async_trait]
impl WorkSessionService for WorkSessionServiceImpl {
    async fn start(&self, technician_id: Uuid, cmd: StartTaskCommand) -> TrackingResult<Task> {
        let technician =
            self.technician_repo.get_by_id(technician_id).await.map_err(|_| {
                TrackingException::NotFound {
                    entity: "technician",
                    id: technician_id,
                }
            })?;
        if !technician.is_active {
            return Err(TrackingException::InactiveTechnician { id: technician_id });
        }
        let job_order =
            self.job_order_repo.get_by_id(cmd.job_order_id).await.map_err(|_| {
                TrackingException::NotFound {
                    entity: "job order",
                    id: cmd.job_order_id,
                }
            })?;
        if !job_order.is_open() {
            return Err(TrackingException::JobOrderClosed { id: job_order.id });
        }

        let task = Task {
            id: Uuid::new_v4(),
            technician_id,
            job_order_id: job_order.id,
            start_time: Utc::now(),
            notes: cmd.notes,
            ..Task::default()
        };
        let task = self.task_repo.insert(task).await?;
        self.task_repo.save_changed().await?;
        tracing::info!(task = %task.id, job_order = %job_order.id, "Work session started.");
        Ok(task)
    }

    async fn pause(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task> {
        self.transition(task_id, technician_id, &[TaskStatus::InProgress], TaskStatus::Paused)
            .await
    }

    async fn resume(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task> {
        self.transition(task_id, technician_id, &[TaskStatus::Paused], TaskStatus::InProgress)
            .await
    }

    async fn complete(
        &self,
        task_id: Uuid,
        technician_id: Uuid,
        cmd: CompleteTaskCommand,
    ) -> TrackingResult<Task> {
        if cmd.units_completed < 0 {
            return Err(TrackingException::Validation {
                message: "unitsCompleted must not be negative".to_string(),
            });
        }
        let mut task = self.owned_task(task_id, technician_id).await?;
        if !matches!(task.status, TaskStatus::InProgress | TaskStatus::Paused) {
            return Err(TrackingException::InvalidStatusChange {
                id: task_id,
                from: task.status,
                to: TaskStatus::Completed,
            });
        }

        task.status = TaskStatus::Completed;
        task.review = ReviewStatus::Pending;
        task.end_time = Some(Utc::now());
        task.units_completed = cmd.units_completed;
        task.serial_numbers = cmd.serial_numbers;
        task.efficiency = metrics::clamp_efficiency(cmd.efficiency);
        task.issues = cmd.issues;
        if cmd.notes.is_some() {
            task.notes = cmd.notes;
        }
        let task = self.task_repo.update(task).await?;
        self.task_repo.save_changed().await?;

        let technician =
            self.technician_repo.get_by_id(technician_id).await.map_err(|_| {
                TrackingException::NotFound {
                    entity: "technician",
                    id: technician_id,
                }
            })?;
        for supervisor in self.technician_repo.get_supervisors(&technician.department).await? {
            self.notification_service
                .push(
                    supervisor.id,
                    NotificationType::TaskSubmitted,
                    NotificationPriority::Normal,
                    "Work session submitted",
                    &format!(
                        "{} logged {} units and is waiting for review.",
                        technician.name, task.units_completed
                    ),
                    task.id,
                )
                .await?;
        }
        Ok(task)
    }

    async fn cancel(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task> {
        self.transition(
            task_id,
            technician_id,
            &[TaskStatus::InProgress, TaskStatus::Paused],
            TaskStatus::Cancelled,
        )
        .await
    }

    async fn tasks_of_technician(&self, technician_id: Uuid) -> TrackingResult<Vec<Task>> {
        Ok(self.task_repo.get_by_technician(technician_id).await?)
    }

    async fn tasks_of_job_order(&self, job_order_id: Uuid) -> TrackingResult<Vec<Task>> {
        Ok(self.task_repo.get_by_job_order(job_order_id).await?)
    }
}
