mod job_order;
mod notification;
mod task;
mod technician;

#[rustfmt::skip]
pub use {
    job_order::JobOrderRepo,
    notification::NotificationRepo,
    task::TaskRepo,
    technician::TechnicianRepo,
};

use uuid::Uuid;

#[async_trait::async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync
where
    T: Send,
{
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<T>;
    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}

#[async_trait::async_trait]
pub trait MutableRepository<T>: Send + Sync
where
    T: Send,
{
    async fn insert(&self, entity: T) -> anyhow::Result<T>;
    async fn update(&self, entity: T) -> anyhow::Result<T>;
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Commit buffered changes. Implementations that write through return
    /// `Ok(true)` unconditionally.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}

pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T>
where
    T: Send,
{
}
