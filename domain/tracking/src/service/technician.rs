use uuid::Uuid;

use crate::{
    command::UpdateTechnicianCommand, exception::TrackingResult, model::entity::Technician,
};

#[async_trait::async_trait]
pub trait TechnicianService: Send + Sync {
    async fn list(&self, include_inactive: bool) -> TrackingResult<Vec<Technician>>;
    async fn get(&self, id: Uuid) -> TrackingResult<Technician>;
    async fn update(&self, id: Uuid, cmd: UpdateTechnicianCommand) -> TrackingResult<Technician>;
    /// Soft delete; the account stays for history but can no longer log in
    /// or log work.
    async fn deactivate(&self, id: Uuid) -> TrackingResult<()>;
}
