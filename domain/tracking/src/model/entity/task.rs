use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vo::metrics;

/// A logged work session linking one technician to one job order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub job_order_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub units_completed: i32,
    pub serial_numbers: Vec<String>,
    pub status: TaskStatus,
    pub review: ReviewStatus,
    pub reviewed_by: Option<Uuid>,
    pub review_note: Option<String>,
    /// Stored performance quality percentage, clamped to [0, 100] on write.
    pub efficiency: f64,
    pub notes: Option<String>,
    pub issues: Vec<String>,
}

impl Task {
    pub fn duration_hours(&self) -> Option<f64> {
        let end = self.end_time?;
        let seconds = (end - self.start_time).num_seconds();
        if seconds <= 0 {
            return Some(0.0);
        }
        Some(seconds as f64 / 3600.0)
    }

    /// Units completed per hour worked. Derived, never stored.
    pub fn productivity(&self) -> Option<f64> {
        self.duration_hours().map(|hours| metrics::productivity(self.units_completed, hours))
    }
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    InProgress,
    Completed,
    Paused,
    Cancelled,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Paused => "paused",
            TaskStatus::Cancelled => "cancelled",
        })
    }
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TryFrom<database_model::tracking::prelude::TaskModel> for Task {
    type Error = anyhow::Error;

    fn try_from(model: database_model::tracking::prelude::TaskModel) -> Result<Self, Self::Error> {
        use num_traits::FromPrimitive;

        Ok(Self {
            id: model.id,
            technician_id: model.technician_id,
            job_order_id: model.job_order_id,
            start_time: model.start_time,
            end_time: model.end_time,
            units_completed: model.units_completed,
            serial_numbers: serde_json::from_value(model.serial_numbers)?,
            status: TaskStatus::from_i32(model.status)
                .ok_or(anyhow::anyhow!("Unknown task status code: {}", model.status))?,
            review: ReviewStatus::from_i32(model.review)
                .ok_or(anyhow::anyhow!("Unknown review status code: {}", model.review))?,
            reviewed_by: model.reviewed_by,
            review_note: model.review_note,
            efficiency: model.efficiency,
            notes: model.notes,
            issues: serde_json::from_value(model.issues)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn session(minutes: i64, units: i32) -> Task {
        let start = Utc.with_ymd_and_hms(2026, 8, 3, 8, 0, 0).unwrap();
        Task {
            start_time: start,
            end_time: Some(start + chrono::Duration::minutes(minutes)),
            units_completed: units,
            ..Task::default()
        }
    }

    #[test]
    fn productivity_is_units_per_hour() {
        let task = session(90, 30);
        assert_eq!(task.duration_hours(), Some(1.5));
        assert_eq!(task.productivity(), Some(20.0));
    }

    #[test]
    fn open_session_has_no_productivity() {
        let task = Task::default();
        assert_eq!(task.duration_hours(), None);
        assert_eq!(task.productivity(), None);
    }

    #[test]
    fn zero_length_session_yields_zero_productivity() {
        let task = session(0, 10);
        assert_eq!(task.productivity(), Some(0.0));
    }
}
