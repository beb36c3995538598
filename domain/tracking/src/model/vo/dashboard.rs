use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::model::{
    entity::{
        job_order::{JobOrderStatus, JobPriority},
        Task,
    },
    vo::metrics::PerformanceSnapshot,
};

/// Supervisor/planner view of one technician: the cached snapshot plus the
/// task history it was derived from.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianPerformance {
    pub technician_id: Uuid,
    pub snapshot: PerformanceSnapshot,
    pub tasks: Vec<Task>,
}

/// Planner-facing aggregate over the reporting window.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub window_days: u32,
    /// Approved units in the window.
    pub units_completed: i64,
    pub hours_logged: f64,
    pub overall_productivity: f64,
    pub average_efficiency: f64,
    pub job_orders: JobOrderStatusCounts,
    pub at_risk_count: usize,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOrderStatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub delayed: usize,
    pub cancelled: usize,
}

impl JobOrderStatusCounts {
    pub fn count(&mut self, status: JobOrderStatus) {
        match status {
            JobOrderStatus::Pending => self.pending += 1,
            JobOrderStatus::InProgress => self.in_progress += 1,
            JobOrderStatus::Completed => self.completed += 1,
            JobOrderStatus::Delayed => self.delayed += 1,
            JobOrderStatus::Cancelled => self.cancelled += 1,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRiskEntry {
    pub job_order_id: Uuid,
    pub job_number: String,
    pub priority: JobPriority,
    pub due_date: DateTime<Utc>,
    pub quantity: i32,
    pub completed_count: i32,
    pub risk: RiskLevel,
    /// Negative once the due date has passed.
    pub hours_to_due: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    OnTrack,
    AtRisk,
    Overdue,
}
