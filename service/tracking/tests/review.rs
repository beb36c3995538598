use std::sync::Arc;

use chrono::{Duration, Utc};
use domain_tracking::{
    exception::TrackingException,
    mock::{MockJobOrderRepo, MockNotificationRepo, MockTaskRepo, MockTechnicianRepo},
    model::entity::{
        job_order::JobOrderStatus,
        task::{ReviewStatus, TaskStatus},
        JobOrder, Task,
    },
    service::ReviewService,
};
use service_tracking::{MetricsServiceImpl, NotificationServiceImpl, ReviewServiceImpl};
use uuid::Uuid;

fn submitted_task(units: i32) -> Task {
    let start = Utc::now() - Duration::hours(2);
    Task {
        id: Uuid::new_v4(),
        technician_id: Uuid::new_v4(),
        job_order_id: Uuid::new_v4(),
        start_time: start,
        end_time: Some(start + Duration::hours(2)),
        units_completed: units,
        status: TaskStatus::Completed,
        review: ReviewStatus::Pending,
        efficiency: 80.0,
        ..Task::default()
    }
}

struct Mocks {
    task_repo: MockTaskRepo,
    job_order_repo: MockJobOrderRepo,
    notification_repo: MockNotificationRepo,
    metrics_task_repo: MockTaskRepo,
    metrics_technician_repo: MockTechnicianRepo,
}

impl Mocks {
    fn new() -> Self {
        Self {
            task_repo: MockTaskRepo::new(),
            job_order_repo: MockJobOrderRepo::new(),
            notification_repo: MockNotificationRepo::new(),
            metrics_task_repo: MockTaskRepo::new(),
            metrics_technician_repo: MockTechnicianRepo::new(),
        }
    }

    fn build(self) -> ReviewServiceImpl {
        let metrics_service = MetricsServiceImpl::builder()
            .task_repo(Arc::new(self.metrics_task_repo))
            .job_order_repo(Arc::new(MockJobOrderRepo::new()))
            .technician_repo(Arc::new(self.metrics_technician_repo))
            .build();
        let notification_service = NotificationServiceImpl::builder()
            .notification_repo(Arc::new(self.notification_repo))
            .build();
        ReviewServiceImpl::builder()
            .task_repo(Arc::new(self.task_repo))
            .job_order_repo(Arc::new(self.job_order_repo))
            .metrics_service(Arc::new(metrics_service))
            .notification_service(Arc::new(notification_service))
            .build()
    }
}

#[tokio::test]
async fn approve_accumulates_units_and_completes_the_order() {
    let task = submitted_task(5);
    let task_id = task.id;
    let reviewer = Uuid::new_v4();
    let order = JobOrder {
        id: task.job_order_id,
        job_number: "JO-100".to_string(),
        quantity: 20,
        completed_count: 20,
        status: JobOrderStatus::InProgress,
        ..JobOrder::default()
    };

    let mut mocks = Mocks::new();
    {
        let task = task.clone();
        mocks.task_repo.expect_get_by_id().return_once(move |_| Ok(task));
    }
    mocks.task_repo.expect_update().return_once(Ok);
    mocks.task_repo.expect_save_changed().return_once(|| Ok(true));
    mocks
        .job_order_repo
        .expect_accumulate_units()
        .withf(|_, units| *units == 5)
        .return_once(move |_, _| Ok(Some(order)));
    mocks
        .job_order_repo
        .expect_update()
        .withf(|order| order.status == JobOrderStatus::Completed)
        .return_once(Ok);
    mocks.job_order_repo.expect_save_changed().return_once(|| Ok(true));
    mocks.metrics_task_repo.expect_get_approved_by_technician().return_once(|_| Ok(vec![]));
    mocks.metrics_technician_repo.expect_update_snapshot().return_once(|_, _| Ok(()));
    mocks.notification_repo.expect_insert().return_once(Ok);
    mocks.notification_repo.expect_save_changed().return_once(|| Ok(true));

    let approved = mocks.build().approve(task_id, reviewer, None).await.unwrap();
    assert_eq!(approved.review, ReviewStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(reviewer));
}

#[tokio::test]
async fn approve_rejects_units_beyond_the_order_quantity() {
    let task = submitted_task(5);
    let task_id = task.id;
    let order = JobOrder {
        id: task.job_order_id,
        quantity: 10,
        completed_count: 8,
        status: JobOrderStatus::InProgress,
        ..JobOrder::default()
    };
    let order_id = order.id;

    let mut mocks = Mocks::new();
    {
        let task = task.clone();
        mocks.task_repo.expect_get_by_id().return_once(move |_| Ok(task));
    }
    mocks.job_order_repo.expect_accumulate_units().return_once(|_, _| Ok(None));
    mocks.job_order_repo.expect_get_by_id().return_once(move |_| Ok(order));

    let result = mocks.build().approve(task_id, Uuid::new_v4(), None).await;
    assert!(matches!(
        result,
        Err(TrackingException::QuantityExceeded { id, quantity: 10, attempted: 13 }) if id == order_id
    ));
}

#[tokio::test]
async fn reviewing_twice_is_rejected() {
    let mut task = submitted_task(5);
    task.review = ReviewStatus::Approved;
    let task_id = task.id;

    let mut mocks = Mocks::new();
    mocks.task_repo.expect_get_by_id().return_once(move |_| Ok(task));

    let result = mocks.build().approve(task_id, Uuid::new_v4(), None).await;
    assert!(matches!(result, Err(TrackingException::AlreadyReviewed { id }) if id == task_id));
}

#[tokio::test]
async fn reject_requires_a_note() {
    let result = Mocks::new().build().reject(Uuid::new_v4(), Uuid::new_v4(), "  ".to_string()).await;
    assert!(matches!(result, Err(TrackingException::Validation { .. })));
}

#[tokio::test]
async fn rejected_units_never_reach_the_job_order() {
    let task = submitted_task(5);
    let task_id = task.id;
    let reviewer = Uuid::new_v4();

    let mut mocks = Mocks::new();
    mocks.task_repo.expect_get_by_id().return_once(move |_| Ok(task));
    mocks.task_repo.expect_update().return_once(Ok);
    mocks.task_repo.expect_save_changed().return_once(|| Ok(true));
    // No accumulate_units expectation: a call would fail the test.
    mocks.notification_repo.expect_insert().return_once(Ok);
    mocks.notification_repo.expect_save_changed().return_once(|| Ok(true));

    let rejected =
        mocks.build().reject(task_id, reviewer, "units do not match the bin".to_string()).await.unwrap();
    assert_eq!(rejected.review, ReviewStatus::Rejected);
    assert_eq!(rejected.review_note.as_deref(), Some("units do not match the bin"));
}
