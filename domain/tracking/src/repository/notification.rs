use uuid::Uuid;

use crate::model::entity::Notification;

use super::DBRepository;

#[async_trait::async_trait]
pub trait NotificationRepo: Send + Sync + DBRepository<Notification> {
    /// Undismissed entries for a user, newest first.
    async fn get_feed(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>>;
    async fn unread_count(&self, user_id: Uuid) -> anyhow::Result<u64>;
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64>;
    /// Soft delete; the entry disappears from the feed but stays stored.
    async fn dismiss(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool>;
}
