use uuid::Uuid;

use crate::{
    exception::TrackingResult,
    model::vo::{
        dashboard::{DashboardSummary, ScheduleRiskEntry, TechnicianPerformance},
        metrics::PerformanceSnapshot,
    },
};

/// Derived-metric computation and planner aggregates.
#[async_trait::async_trait]
pub trait MetricsService: Send + Sync {
    /// Recompute and persist a technician's cached snapshot from its
    /// approved tasks.
    async fn refresh_snapshot(&self, technician_id: Uuid) -> TrackingResult<PerformanceSnapshot>;
    async fn technician_performance(
        &self,
        technician_id: Uuid,
    ) -> TrackingResult<TechnicianPerformance>;
    async fn dashboard_summary(&self, window_days: u32) -> TrackingResult<DashboardSummary>;
    /// Open job orders ranked by schedule risk. Reporting only, never
    /// mutates job order status.
    async fn schedule_risk(&self) -> TrackingResult<Vec<ScheduleRiskEntry>>;
}
