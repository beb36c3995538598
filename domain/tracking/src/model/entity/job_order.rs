use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A manufacturing batch with a target quantity and due date.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrder {
    pub id: Uuid,
    pub job_number: String,
    pub device_type: String,
    pub device_model: String,
    pub quantity: i32,
    pub completed_count: i32,
    pub due_date: DateTime<Utc>,
    pub priority: JobPriority,
    pub status: JobOrderStatus,
    pub assignee_id: Option<Uuid>,
    pub created_time: DateTime<Utc>,
}

impl JobOrder {
    /// Still accepts work sessions.
    pub fn is_open(&self) -> bool {
        !matches!(
            self.status,
            JobOrderStatus::Completed | JobOrderStatus::Cancelled
        )
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.quantity <= 0 {
            return 0.0;
        }
        f64::from(self.completed_count) / f64::from(self.quantity)
    }
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JobPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum JobOrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delayed,
    Cancelled,
}

impl TryFrom<database_model::tracking::prelude::JobOrderModel> for JobOrder {
    type Error = anyhow::Error;

    fn try_from(
        model: database_model::tracking::prelude::JobOrderModel,
    ) -> Result<Self, Self::Error> {
        use num_traits::FromPrimitive;

        Ok(Self {
            id: model.id,
            job_number: model.job_number,
            device_type: model.device_type,
            device_model: model.device_model,
            quantity: model.quantity,
            completed_count: model.completed_count,
            due_date: model.due_date,
            priority: JobPriority::from_i32(model.priority)
                .ok_or(anyhow::anyhow!("Unknown priority code: {}", model.priority))?,
            status: JobOrderStatus::from_i32(model.status)
                .ok_or(anyhow::anyhow!("Unknown job order status code: {}", model.status))?,
            assignee_id: model.assignee_id,
            created_time: model.created_time,
        })
    }
}
