use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::entity::Task;

use super::DBRepository;

#[async_trait::async_trait]
pub trait TaskRepo: Send + Sync + DBRepository<Task> {
    async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>>;
    async fn get_by_job_order(&self, job_order_id: Uuid) -> anyhow::Result<Vec<Task>>;
    /// Completed sessions awaiting review, optionally narrowed to the
    /// submitting technician's department.
    async fn get_pending_review(&self, department: Option<String>) -> anyhow::Result<Vec<Task>>;
    async fn get_approved_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>>;
    async fn get_approved_since(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Task>>;
}
