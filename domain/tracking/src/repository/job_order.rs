use uuid::Uuid;

use crate::model::{entity::JobOrder, vo::JobOrderFilter};

use super::DBRepository;

#[async_trait::async_trait]
pub trait JobOrderRepo: Send + Sync + DBRepository<JobOrder> {
    async fn get_by_job_number(&self, job_number: &str) -> anyhow::Result<Option<JobOrder>>;
    async fn query(&self, filter: &JobOrderFilter) -> anyhow::Result<Vec<JobOrder>>;
    /// Orders that are neither completed nor cancelled.
    async fn get_open(&self) -> anyhow::Result<Vec<JobOrder>>;
    /// Accumulate approved units into `completed_count` with a single
    /// conditional update. `None` means the guard failed: the accumulated
    /// count would exceed `quantity` and nothing was written.
    async fn accumulate_units(&self, id: Uuid, units: i32) -> anyhow::Result<Option<JobOrder>>;
}
