use uuid::Uuid;

use crate::{exception::TrackingResult, model::entity::Task};

/// Supervisor review over submitted work sessions.
#[async_trait::async_trait]
pub trait ReviewService: Send + Sync {
    async fn pending(&self, department: Option<String>) -> TrackingResult<Vec<Task>>;
    /// Approve a submission: units reach the job order, the technician's
    /// snapshot is refreshed, the submitter is notified.
    async fn approve(
        &self,
        task_id: Uuid,
        reviewer_id: Uuid,
        note: Option<String>,
    ) -> TrackingResult<Task>;
    /// Reject a submission with a note. Rejected units never reach the job
    /// order.
    async fn reject(&self, task_id: Uuid, reviewer_id: Uuid, note: String) -> TrackingResult<Task>;
}
