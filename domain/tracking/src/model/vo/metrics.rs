//! Derived performance metrics. All pure functions, computed at read or
//! approval time from stored fields.

use serde::{Deserialize, Serialize};

/// Hours of productive work a technician is available for per workday.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Cached per-technician metrics, refreshed when one of its tasks is
/// approved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    pub total_tasks_completed: i32,
    pub average_productivity: f64,
    pub average_efficiency: f64,
    pub utilization_rate: f64,
}

/// Units completed per hour worked.
pub fn productivity(units: i32, hours: f64) -> f64 {
    if hours <= 0.0 {
        return 0.0;
    }
    f64::from(units) / hours
}

/// Stored efficiency is a percentage and must stay inside [0, 100].
pub fn clamp_efficiency(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Aggregate units per hour across many sessions.
pub fn throughput(units: i64, hours: f64) -> f64 {
    if hours <= 0.0 {
        return 0.0;
    }
    units as f64 / hours
}

/// Percentage of available time spent on productive work.
pub fn utilization(worked_hours: f64, available_hours: f64) -> f64 {
    if available_hours <= 0.0 {
        return 0.0;
    }
    (worked_hours / available_hours * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn productivity_handles_empty_duration() {
        assert_eq!(productivity(10, 0.0), 0.0);
        assert_eq!(productivity(10, -1.0), 0.0);
        assert_eq!(productivity(30, 1.5), 20.0);
        assert_eq!(productivity(0, 2.0), 0.0);
    }

    #[test]
    fn efficiency_never_leaves_percent_range() {
        assert_eq!(clamp_efficiency(-3.0), 0.0);
        assert_eq!(clamp_efficiency(42.5), 42.5);
        assert_eq!(clamp_efficiency(250.0), 100.0);
        assert_eq!(clamp_efficiency(f64::NAN), 0.0);
    }

    #[test]
    fn throughput_handles_empty_window() {
        assert_eq!(throughput(60, 4.0), 15.0);
        assert_eq!(throughput(60, 0.0), 0.0);
    }

    #[test]
    fn utilization_is_capped() {
        assert_eq!(utilization(4.0, 8.0), 50.0);
        assert_eq!(utilization(12.0, 8.0), 100.0);
        assert_eq!(utilization(1.0, 0.0), 0.0);
    }
}
