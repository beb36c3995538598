use std::sync::Arc;

use chrono::{Duration, Utc};
use domain_tracking::{
    mock::{MockJobOrderRepo, MockTaskRepo, MockTechnicianRepo},
    model::{
        entity::{
            job_order::JobOrderStatus,
            task::{ReviewStatus, TaskStatus},
            JobOrder, Task,
        },
        vo::dashboard::RiskLevel,
    },
    service::MetricsService,
};
use service_tracking::MetricsServiceImpl;
use uuid::Uuid;

fn approved_task(hours: i64, units: i32, efficiency: f64) -> Task {
    let start = Utc::now() - Duration::hours(hours);
    Task {
        id: Uuid::new_v4(),
        technician_id: Uuid::new_v4(),
        job_order_id: Uuid::new_v4(),
        start_time: start,
        end_time: Some(start + Duration::hours(hours)),
        units_completed: units,
        status: TaskStatus::Completed,
        review: ReviewStatus::Approved,
        efficiency,
        ..Task::default()
    }
}

fn service(
    task_repo: MockTaskRepo,
    job_order_repo: MockJobOrderRepo,
    technician_repo: MockTechnicianRepo,
) -> MetricsServiceImpl {
    MetricsServiceImpl::builder()
        .task_repo(Arc::new(task_repo))
        .job_order_repo(Arc::new(job_order_repo))
        .technician_repo(Arc::new(technician_repo))
        .build()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[tokio::test]
async fn snapshot_averages_approved_tasks() {
    let technician_id = Uuid::new_v4();
    let tasks = vec![
        approved_task(1, 20, 80.0),
        approved_task(2, 40, 90.0),
    ];

    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_approved_by_technician().return_once(move |_| Ok(tasks));
    let mut technician_repo = MockTechnicianRepo::new();
    technician_repo
        .expect_update_snapshot()
        .withf(move |id, snapshot| {
            *id == technician_id
                && snapshot.total_tasks_completed == 2
                && close(snapshot.average_productivity, 20.0)
                && close(snapshot.average_efficiency, 85.0)
                // 3 hours worked against one 8-hour workday.
                && close(snapshot.utilization_rate, 37.5)
        })
        .return_once(|_, _| Ok(()));

    let snapshot = service(task_repo, MockJobOrderRepo::new(), technician_repo)
        .refresh_snapshot(technician_id)
        .await
        .unwrap();
    assert_eq!(snapshot.total_tasks_completed, 2);
}

#[tokio::test]
async fn snapshot_of_no_tasks_is_all_zero() {
    let technician_id = Uuid::new_v4();
    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_approved_by_technician().return_once(|_| Ok(vec![]));
    let mut technician_repo = MockTechnicianRepo::new();
    technician_repo.expect_update_snapshot().return_once(|_, _| Ok(()));

    let snapshot = service(task_repo, MockJobOrderRepo::new(), technician_repo)
        .refresh_snapshot(technician_id)
        .await
        .unwrap();
    assert_eq!(snapshot.total_tasks_completed, 0);
    assert_eq!(snapshot.average_productivity, 0.0);
    assert_eq!(snapshot.average_efficiency, 0.0);
    assert_eq!(snapshot.utilization_rate, 0.0);
}

#[tokio::test]
async fn dashboard_summary_aggregates_window() {
    let tasks = vec![
        approved_task(1, 20, 80.0),
        approved_task(3, 40, 60.0),
    ];
    let orders = vec![
        JobOrder {
            status: JobOrderStatus::InProgress,
            quantity: 10,
            due_date: Utc::now() + Duration::days(30),
            created_time: Utc::now() - Duration::days(1),
            completed_count: 9,
            ..JobOrder::default()
        },
        JobOrder {
            status: JobOrderStatus::Completed,
            quantity: 5,
            completed_count: 5,
            due_date: Utc::now() + Duration::days(10),
            created_time: Utc::now() - Duration::days(5),
            ..JobOrder::default()
        },
    ];

    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_approved_since().return_once(move |_| Ok(tasks));
    let mut job_order_repo = MockJobOrderRepo::new();
    {
        let orders = orders.clone();
        job_order_repo.expect_get_all().return_once(move || Ok(orders));
    }
    job_order_repo
        .expect_get_open()
        .return_once(move || Ok(vec![orders.into_iter().next().unwrap()]));

    let summary = service(task_repo, job_order_repo, MockTechnicianRepo::new())
        .dashboard_summary(7)
        .await
        .unwrap();

    assert_eq!(summary.window_days, 7);
    assert_eq!(summary.units_completed, 60);
    assert!(close(summary.hours_logged, 4.0));
    assert!(close(summary.overall_productivity, 15.0));
    assert!(close(summary.average_efficiency, 70.0));
    assert_eq!(summary.job_orders.in_progress, 1);
    assert_eq!(summary.job_orders.completed, 1);
    // The open order is 90% done with 96% of its schedule left.
    assert_eq!(summary.at_risk_count, 0);
}

#[tokio::test]
async fn schedule_risk_ranks_overdue_first_and_skips_finished_work() {
    let overdue = JobOrder {
        job_number: "JO-OVERDUE".to_string(),
        quantity: 10,
        completed_count: 4,
        status: JobOrderStatus::InProgress,
        created_time: Utc::now() - Duration::days(10),
        due_date: Utc::now() - Duration::days(1),
        ..JobOrder::default()
    };
    let due_soon = JobOrder {
        job_number: "JO-SOON".to_string(),
        quantity: 10,
        completed_count: 9,
        status: JobOrderStatus::InProgress,
        created_time: Utc::now() - Duration::days(10),
        due_date: Utc::now() + Duration::hours(24),
        ..JobOrder::default()
    };
    let on_track = JobOrder {
        job_number: "JO-OK".to_string(),
        quantity: 10,
        completed_count: 5,
        status: JobOrderStatus::InProgress,
        created_time: Utc::now() - Duration::days(1),
        due_date: Utc::now() + Duration::days(30),
        ..JobOrder::default()
    };
    // Past due but fully built: not a schedule risk.
    let done_late = JobOrder {
        job_number: "JO-DONE".to_string(),
        quantity: 10,
        completed_count: 10,
        status: JobOrderStatus::InProgress,
        created_time: Utc::now() - Duration::days(10),
        due_date: Utc::now() - Duration::days(1),
        ..JobOrder::default()
    };

    let mut job_order_repo = MockJobOrderRepo::new();
    job_order_repo
        .expect_get_open()
        .return_once(move || Ok(vec![on_track, due_soon, overdue, done_late]));

    let entries = service(MockTaskRepo::new(), job_order_repo, MockTechnicianRepo::new())
        .schedule_risk()
        .await
        .unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].job_number, "JO-OVERDUE");
    assert_eq!(entries[0].risk, RiskLevel::Overdue);
    assert_eq!(entries[1].job_number, "JO-SOON");
    assert_eq!(entries[1].risk, RiskLevel::AtRisk);
    assert!(entries
        .iter()
        .filter(|e| e.job_number == "JO-OK" || e.job_number == "JO-DONE")
        .all(|e| e.risk == RiskLevel::OnTrack));
}
