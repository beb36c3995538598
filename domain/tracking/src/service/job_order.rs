use uuid::Uuid;

use crate::{
    command::{CreateJobOrderCommand, UpdateJobOrderCommand},
    exception::TrackingResult,
    model::{entity::JobOrder, vo::JobOrderFilter},
};

#[async_trait::async_trait]
pub trait JobOrderService: Send + Sync {
    async fn create(&self, cmd: CreateJobOrderCommand) -> TrackingResult<JobOrder>;
    async fn list(&self, filter: JobOrderFilter) -> TrackingResult<Vec<JobOrder>>;
    async fn get(&self, id: Uuid) -> TrackingResult<JobOrder>;
    async fn update(&self, id: Uuid, cmd: UpdateJobOrderCommand) -> TrackingResult<JobOrder>;
    async fn cancel(&self, id: Uuid) -> TrackingResult<JobOrder>;
}
