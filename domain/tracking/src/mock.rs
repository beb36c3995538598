use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::{
    model::{
        entity::{JobOrder, Notification, Task, Technician},
        vo::{metrics::PerformanceSnapshot, JobOrderFilter},
    },
    repository::{
        DBRepository, JobOrderRepo, MutableRepository, NotificationRepo, ReadOnlyRepository,
        TaskRepo, TechnicianRepo,
    },
};

mock! {
    pub TechnicianRepo {}
    #[async_trait]
    impl TechnicianRepo for TechnicianRepo {
        async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<Technician>>;
        async fn get_by_employee_id(&self, employee_id: &str) -> anyhow::Result<Option<Technician>>;
        async fn get_active(&self) -> anyhow::Result<Vec<Technician>>;
        async fn get_supervisors(&self, department: &str) -> anyhow::Result<Vec<Technician>>;
        async fn update_snapshot(&self, id: Uuid, snapshot: PerformanceSnapshot) -> anyhow::Result<()>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Technician> for TechnicianRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Technician>;
        async fn get_all(&self) -> anyhow::Result<Vec<Technician>>;
    }
    #[async_trait]
    impl MutableRepository<Technician> for TechnicianRepo {
        async fn insert(&self, entity: Technician) -> anyhow::Result<Technician>;
        async fn update(&self, entity: Technician) -> anyhow::Result<Technician>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Technician> for TechnicianRepo {}
}

mock! {
    pub JobOrderRepo {}
    #[async_trait]
    impl JobOrderRepo for JobOrderRepo {
        async fn get_by_job_number(&self, job_number: &str) -> anyhow::Result<Option<JobOrder>>;
        async fn query(&self, filter: &JobOrderFilter) -> anyhow::Result<Vec<JobOrder>>;
        async fn get_open(&self) -> anyhow::Result<Vec<JobOrder>>;
        async fn accumulate_units(&self, id: Uuid, units: i32) -> anyhow::Result<Option<JobOrder>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<JobOrder> for JobOrderRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<JobOrder>;
        async fn get_all(&self) -> anyhow::Result<Vec<JobOrder>>;
    }
    #[async_trait]
    impl MutableRepository<JobOrder> for JobOrderRepo {
        async fn insert(&self, entity: JobOrder) -> anyhow::Result<JobOrder>;
        async fn update(&self, entity: JobOrder) -> anyhow::Result<JobOrder>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<JobOrder> for JobOrderRepo {}
}

mock! {
    pub TaskRepo {}
    #[async_trait]
    impl TaskRepo for TaskRepo {
        async fn get_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>>;
        async fn get_by_job_order(&self, job_order_id: Uuid) -> anyhow::Result<Vec<Task>>;
        async fn get_pending_review(&self, department: Option<String>) -> anyhow::Result<Vec<Task>>;
        async fn get_approved_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Task>>;
        async fn get_approved_since(&self, since: DateTime<Utc>) -> anyhow::Result<Vec<Task>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Task> for TaskRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Task>;
        async fn get_all(&self) -> anyhow::Result<Vec<Task>>;
    }
    #[async_trait]
    impl MutableRepository<Task> for TaskRepo {
        async fn insert(&self, entity: Task) -> anyhow::Result<Task>;
        async fn update(&self, entity: Task) -> anyhow::Result<Task>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Task> for TaskRepo {}
}

mock! {
    pub NotificationRepo {}
    #[async_trait]
    impl NotificationRepo for NotificationRepo {
        async fn get_feed(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;
        async fn unread_count(&self, user_id: Uuid) -> anyhow::Result<u64>;
        async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
        async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64>;
        async fn dismiss(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Notification> for NotificationRepo {
        async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Notification>;
        async fn get_all(&self) -> anyhow::Result<Vec<Notification>>;
    }
    #[async_trait]
    impl MutableRepository<Notification> for NotificationRepo {
        async fn insert(&self, entity: Notification) -> anyhow::Result<Notification>;
        async fn update(&self, entity: Notification) -> anyhow::Result<Notification>;
        async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Notification> for NotificationRepo {}
}
