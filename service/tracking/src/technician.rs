use std::sync::Arc;

use async_trait::async_trait;
use domain_tracking::{
    command::UpdateTechnicianCommand,
    exception::{TrackingException, TrackingResult},
    model::entity::Technician,
    repository::TechnicianRepo,
    service::TechnicianService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct TechnicianServiceImpl {
    technician_repo: Arc<dyn TechnicianRepo>,
}

impl TechnicianServiceImpl {
    async fn get_or_not_found(&self, id: Uuid) -> TrackingResult<Technician> {
        self.technician_repo.get_by_id(id).await.map_err(|_| TrackingException::NotFound {
            entity: "technician",
            id,
        })
    }
}

#[async_trait]
impl TechnicianService for TechnicianServiceImpl {
    async fn list(&self, include_inactive: bool) -> TrackingResult<Vec<Technician>> {
        Ok(if include_inactive {
            self.technician_repo.get_all().await?
        } else {
            self.technician_repo.get_active().await?
        })
    }

    async fn get(&self, id: Uuid) -> TrackingResult<Technician> {
        self.get_or_not_found(id).await
    }

    async fn update(&self, id: Uuid, cmd: UpdateTechnicianCommand) -> TrackingResult<Technician> {
        let mut technician = self.get_or_not_found(id).await?;
        if let Some(name) = cmd.name {
            technician.name = name;
        }
        if let Some(department) = cmd.department {
            technician.department = department;
        }
        if cmd.specialization.is_some() {
            technician.specialization = cmd.specialization;
        }
        let technician = self.technician_repo.update(technician).await?;
        self.technician_repo.save_changed().await?;
        Ok(technician)
    }

    async fn deactivate(&self, id: Uuid) -> TrackingResult<()> {
        let mut technician = self.get_or_not_found(id).await?;
        technician.is_active = false;
        self.technician_repo.update(technician).await?;
        self.technician_repo.save_changed().await?;
        tracing::info!(technician = %id, "Technician deactivated.");
        Ok(())
    }
}
