use uuid::Uuid;

use crate::model::{entity::Technician, vo::metrics::PerformanceSnapshot};

use super::DBRepository;

#[async_trait::async_trait]
pub trait TechnicianRepo: Send + Sync + DBRepository<Technician> {
    async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<Technician>>;
    async fn get_by_employee_id(&self, employee_id: &str) -> anyhow::Result<Option<Technician>>;
    async fn get_active(&self) -> anyhow::Result<Vec<Technician>>;
    /// Active supervisors of a department, the review fan-out targets.
    async fn get_supervisors(&self, department: &str) -> anyhow::Result<Vec<Technician>>;
    async fn update_snapshot(&self, id: Uuid, snapshot: PerformanceSnapshot)
        -> anyhow::Result<()>;
}
