use uuid::Uuid;

use crate::{
    command::{CompleteTaskCommand, StartTaskCommand},
    exception::TrackingResult,
    model::entity::Task,
};

/// Lifecycle of a technician's logged work session.
#[async_trait::async_trait]
pub trait WorkSessionService: Send + Sync {
    async fn start(&self, technician_id: Uuid, cmd: StartTaskCommand) -> TrackingResult<Task>;
    async fn pause(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task>;
    async fn resume(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task>;
    /// Close the session and queue it for supervisor review.
    async fn complete(
        &self,
        task_id: Uuid,
        technician_id: Uuid,
        cmd: CompleteTaskCommand,
    ) -> TrackingResult<Task>;
    async fn cancel(&self, task_id: Uuid, technician_id: Uuid) -> TrackingResult<Task>;
    async fn tasks_of_technician(&self, technician_id: Uuid) -> TrackingResult<Vec<Task>>;
    async fn tasks_of_job_order(&self, job_order_id: Uuid) -> TrackingResult<Vec<Task>>;
}
