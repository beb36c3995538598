//! Typed commands handed from the API layer to the services.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::entity::{
    job_order::{JobOrderStatus, JobPriority},
    technician::Role,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTechnicianCommand {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Defaults to the primary role alone.
    #[serde(default)]
    pub allowed_roles: Vec<Role>,
    pub department: String,
    pub specialization: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTechnicianCommand {
    pub name: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobOrderCommand {
    pub job_number: String,
    pub device_type: String,
    pub device_model: String,
    pub quantity: i32,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub priority: JobPriority,
    pub assignee_id: Option<Uuid>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobOrderCommand {
    pub device_type: Option<String>,
    pub device_model: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<JobPriority>,
    /// Externally set, never derived.
    pub status: Option<JobOrderStatus>,
    pub assignee_id: Option<Uuid>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTaskCommand {
    pub job_order_id: Uuid,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskCommand {
    pub units_completed: i32,
    #[serde(default)]
    pub serial_numbers: Vec<String>,
    /// Client-reported quality percentage, clamped server-side.
    pub efficiency: f64,
    pub notes: Option<String>,
    #[serde(default)]
    pub issues: Vec<String>,
}
