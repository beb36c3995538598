pub mod auth;
pub mod dashboard;
pub mod metrics;

use serde::Deserialize;
use uuid::Uuid;

use crate::model::entity::job_order::{JobOrderStatus, JobPriority};

/// Job order listing filter. Every field is optional; absent means "any".
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrderFilter {
    pub status: Option<JobOrderStatus>,
    pub priority: Option<JobPriority>,
    pub assignee_id: Option<Uuid>,
}
