use std::sync::Arc;

use chrono::Utc;
use domain_tracking::{
    command::{CompleteTaskCommand, StartTaskCommand},
    exception::TrackingException,
    mock::{MockJobOrderRepo, MockNotificationRepo, MockTaskRepo, MockTechnicianRepo},
    model::entity::{
        job_order::JobOrderStatus,
        task::{ReviewStatus, TaskStatus},
        technician::Role,
        JobOrder, Task, Technician,
    },
    service::WorkSessionService,
};
use service_tracking::{NotificationServiceImpl, WorkSessionServiceImpl};
use uuid::Uuid;

fn technician() -> Technician {
    Technician {
        id: Uuid::new_v4(),
        employee_id: "T-001".to_string(),
        name: "Dana Fields".to_string(),
        email: "dana@example.com".to_string(),
        role: Role::Technician,
        current_role: Role::Technician,
        allowed_roles: vec![Role::Technician],
        department: "assembly".to_string(),
        is_active: true,
        created_time: Utc::now(),
        ..Technician::default()
    }
}

fn open_task(technician_id: Uuid, status: TaskStatus) -> Task {
    Task {
        id: Uuid::new_v4(),
        technician_id,
        job_order_id: Uuid::new_v4(),
        start_time: Utc::now(),
        status,
        ..Task::default()
    }
}

fn service(
    task_repo: MockTaskRepo,
    job_order_repo: MockJobOrderRepo,
    technician_repo: MockTechnicianRepo,
) -> WorkSessionServiceImpl {
    let notification_service = NotificationServiceImpl::builder()
        .notification_repo(Arc::new(MockNotificationRepo::new()))
        .build();
    WorkSessionServiceImpl::builder()
        .task_repo(Arc::new(task_repo))
        .job_order_repo(Arc::new(job_order_repo))
        .technician_repo(Arc::new(technician_repo))
        .notification_service(Arc::new(notification_service))
        .build()
}

#[tokio::test]
async fn start_rejects_closed_job_order() {
    let tech = technician();
    let tech_id = tech.id;
    let order = JobOrder {
        id: Uuid::new_v4(),
        status: JobOrderStatus::Completed,
        quantity: 10,
        ..JobOrder::default()
    };
    let order_id = order.id;

    let mut technician_repo = MockTechnicianRepo::new();
    technician_repo.expect_get_by_id().return_once(move |_| Ok(tech));
    let mut job_order_repo = MockJobOrderRepo::new();
    job_order_repo.expect_get_by_id().return_once(move |_| Ok(order));

    let result = service(MockTaskRepo::new(), job_order_repo, technician_repo)
        .start(
            tech_id,
            StartTaskCommand {
                job_order_id: order_id,
                notes: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(TrackingException::JobOrderClosed { id }) if id == order_id
    ));
}

#[tokio::test]
async fn inactive_technician_cannot_start_session() {
    let mut tech = technician();
    tech.is_active = false;
    let tech_id = tech.id;

    let mut technician_repo = MockTechnicianRepo::new();
    technician_repo.expect_get_by_id().return_once(move |_| Ok(tech));

    let result = service(MockTaskRepo::new(), MockJobOrderRepo::new(), technician_repo)
        .start(
            tech_id,
            StartTaskCommand {
                job_order_id: Uuid::new_v4(),
                notes: None,
            },
        )
        .await;
    assert!(matches!(result, Err(TrackingException::InactiveTechnician { .. })));
}

#[tokio::test]
async fn pause_requires_a_running_session() {
    let tech_id = Uuid::new_v4();
    let task = open_task(tech_id, TaskStatus::Paused);
    let task_id = task.id;

    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_by_id().return_once(move |_| Ok(task));

    let result = service(task_repo, MockJobOrderRepo::new(), MockTechnicianRepo::new())
        .pause(task_id, tech_id)
        .await;
    assert!(matches!(
        result,
        Err(TrackingException::InvalidStatusChange { from: TaskStatus::Paused, .. })
    ));
}

#[tokio::test]
async fn another_technicians_session_is_invisible() {
    let task = open_task(Uuid::new_v4(), TaskStatus::InProgress);
    let task_id = task.id;

    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_by_id().return_once(move |_| Ok(task));

    let result = service(task_repo, MockJobOrderRepo::new(), MockTechnicianRepo::new())
        .pause(task_id, Uuid::new_v4())
        .await;
    assert!(matches!(result, Err(TrackingException::NotFound { entity: "task", .. })));
}

#[tokio::test]
async fn complete_clamps_efficiency_and_queues_review() {
    let tech = technician();
    let tech_id = tech.id;
    let task = open_task(tech_id, TaskStatus::InProgress);
    let task_id = task.id;

    let mut task_repo = MockTaskRepo::new();
    task_repo.expect_get_by_id().return_once(move |_| Ok(task));
    task_repo.expect_update().return_once(Ok);
    task_repo.expect_save_changed().return_once(|| Ok(true));
    let mut technician_repo = MockTechnicianRepo::new();
    technician_repo.expect_get_by_id().return_once(move |_| Ok(tech));
    technician_repo.expect_get_supervisors().return_once(|_| Ok(vec![]));

    let completed = service(task_repo, MockJobOrderRepo::new(), technician_repo)
        .complete(
            task_id,
            tech_id,
            CompleteTaskCommand {
                units_completed: 12,
                serial_numbers: vec!["SN-1".to_string()],
                efficiency: 250.0,
                notes: None,
                issues: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(completed.status, TaskStatus::Completed);
    assert_eq!(completed.review, ReviewStatus::Pending);
    assert_eq!(completed.efficiency, 100.0);
    assert!(completed.end_time.is_some());
}

#[tokio::test]
async fn negative_units_are_rejected() {
    let tech_id = Uuid::new_v4();
    let result = service(MockTaskRepo::new(), MockJobOrderRepo::new(), MockTechnicianRepo::new())
        .complete(
            Uuid::new_v4(),
            tech_id,
            CompleteTaskCommand {
                units_completed: -1,
                serial_numbers: vec![],
                efficiency: 50.0,
                notes: None,
                issues: vec![],
            },
        )
        .await;
    assert!(matches!(result, Err(TrackingException::Validation { .. })));
}
