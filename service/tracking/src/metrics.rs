use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use domain_tracking::{
    exception::{TrackingException, TrackingResult},
    model::{
        entity::{JobOrder, Task},
        vo::{
            dashboard::{
                DashboardSummary, JobOrderStatusCounts, RiskLevel, ScheduleRiskEntry,
                TechnicianPerformance,
            },
            metrics::{self, PerformanceSnapshot, WORKDAY_HOURS},
        },
    },
    repository::{JobOrderRepo, TaskRepo, TechnicianRepo},
    service::MetricsService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct MetricsServiceImpl {
    task_repo: Arc<dyn TaskRepo>,
    job_order_repo: Arc<dyn JobOrderRepo>,
    technician_repo: Arc<dyn TechnicianRepo>,
    /// Orders due within this many hours count as at risk even when on pace.
    #[builder(default = 72)]
    risk_lead_hours: i64,
}

impl MetricsServiceImpl {
    fn snapshot_from(tasks: &[Task], now: DateTime<Utc>) -> PerformanceSnapshot {
        let mut productivity_sum = 0.0;
        let mut productivity_n = 0u32;
        let mut efficiency_sum = 0.0;
        let mut worked_hours = 0.0;
        let mut first_start: Option<DateTime<Utc>> = None;
        for task in tasks {
            if let Some(hours) = task.duration_hours() {
                worked_hours += hours;
                if hours > 0.0 {
                    productivity_sum += metrics::productivity(task.units_completed, hours);
                    productivity_n += 1;
                }
            }
            efficiency_sum += metrics::clamp_efficiency(task.efficiency);
            first_start = Some(match first_start {
                Some(earliest) => earliest.min(task.start_time),
                None => task.start_time,
            });
        }

        let elapsed_days = first_start
            .map(|start| ((now - start).num_days() + 1).max(1))
            .unwrap_or(1);
        PerformanceSnapshot {
            total_tasks_completed: tasks.len() as i32,
            average_productivity: if productivity_n > 0 {
                productivity_sum / f64::from(productivity_n)
            } else {
                0.0
            },
            average_efficiency: if tasks.is_empty() {
                0.0
            } else {
                efficiency_sum / tasks.len() as f64
            },
            utilization_rate: metrics::utilization(
                worked_hours,
                elapsed_days as f64 * WORKDAY_HOURS,
            ),
        }
    }

    fn assess(&self, order: &JobOrder, now: DateTime<Utc>) -> ScheduleRiskEntry {
        let to_due = order.due_date - now;
        let hours_to_due = to_due.num_seconds() as f64 / 3600.0;
        let incomplete = order.completed_count < order.quantity;

        let risk = if hours_to_due < 0.0 && incomplete {
            RiskLevel::Overdue
        } else if incomplete && to_due <= Duration::hours(self.risk_lead_hours) {
            RiskLevel::AtRisk
        } else if incomplete && Self::behind_pace(order, now) {
            RiskLevel::AtRisk
        } else {
            RiskLevel::OnTrack
        };

        ScheduleRiskEntry {
            job_order_id: order.id,
            job_number: order.job_number.clone(),
            priority: order.priority,
            due_date: order.due_date,
            quantity: order.quantity,
            completed_count: order.completed_count,
            risk,
            hours_to_due,
        }
    }

    /// Progress lags the share of scheduled time already spent.
    fn behind_pace(order: &JobOrder, now: DateTime<Utc>) -> bool {
        let total = (order.due_date - order.created_time).num_seconds();
        if total <= 0 {
            return false;
        }
        let elapsed = (now - order.created_time).num_seconds().clamp(0, total);
        order.progress_ratio() < elapsed as f64 / total as f64
    }

    async fn risk_entries(&self) -> TrackingResult<Vec<ScheduleRiskEntry>> {
        let now = Utc::now();
        let mut entries: Vec<ScheduleRiskEntry> =
            self.job_order_repo.get_open().await?.iter().map(|o| self.assess(o, now)).collect();
        entries.sort_by(|a, b| {
            b.risk.cmp(&a.risk).then(a.due_date.cmp(&b.due_date))
        });
        Ok(entries)
    }
}

#[async_trait]
impl MetricsService for MetricsServiceImpl {
    async fn refresh_snapshot(&self, technician_id: Uuid) -> TrackingResult<PerformanceSnapshot> {
        let tasks = self.task_repo.get_approved_by_technician(technician_id).await?;
        let snapshot = Self::snapshot_from(&tasks, Utc::now());
        self.technician_repo.update_snapshot(technician_id, snapshot).await?;
        tracing::debug!(technician = %technician_id, ?snapshot, "Snapshot refreshed.");
        Ok(snapshot)
    }

    async fn technician_performance(
        &self,
        technician_id: Uuid,
    ) -> TrackingResult<TechnicianPerformance> {
        let technician = self.technician_repo.get_by_id(technician_id).await.map_err(|_| {
            TrackingException::NotFound {
                entity: "technician",
                id: technician_id,
            }
        })?;
        let tasks = self.task_repo.get_by_technician(technician_id).await?;
        Ok(TechnicianPerformance {
            technician_id,
            snapshot: technician.metrics,
            tasks,
        })
    }

    async fn dashboard_summary(&self, window_days: u32) -> TrackingResult<DashboardSummary> {
        let window_days = window_days.max(1);
        let since = Utc::now() - Duration::days(i64::from(window_days));
        let tasks = self.task_repo.get_approved_since(since).await?;

        let mut units_completed = 0i64;
        let mut hours_logged = 0.0;
        let mut efficiency_sum = 0.0;
        for task in &tasks {
            units_completed += i64::from(task.units_completed);
            hours_logged += task.duration_hours().unwrap_or(0.0);
            efficiency_sum += metrics::clamp_efficiency(task.efficiency);
        }

        let mut job_orders = JobOrderStatusCounts::default();
        for order in self.job_order_repo.get_all().await? {
            job_orders.count(order.status);
        }
        let at_risk_count =
            self.risk_entries().await?.iter().filter(|e| e.risk != RiskLevel::OnTrack).count();

        Ok(DashboardSummary {
            window_days,
            units_completed,
            hours_logged,
            overall_productivity: metrics::throughput(units_completed, hours_logged),
            average_efficiency: if tasks.is_empty() {
                0.0
            } else {
                efficiency_sum / tasks.len() as f64
            },
            job_orders,
            at_risk_count,
        })
    }

    async fn schedule_risk(&self) -> TrackingResult<Vec<ScheduleRiskEntry>> {
        self.risk_entries().await
    }
}
