use uuid::Uuid;

use crate::{
    exception::TrackingResult,
    model::entity::{
        notification::{NotificationPriority, NotificationType},
        Notification,
    },
};

#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    /// Persist a feed entry for one user.
    async fn push(
        &self,
        user_id: Uuid,
        r#type: NotificationType,
        priority: NotificationPriority,
        title: &str,
        content: &str,
        related_item_id: Uuid,
    ) -> TrackingResult<Notification>;
    async fn feed(&self, user_id: Uuid) -> TrackingResult<Vec<Notification>>;
    async fn unread_count(&self, user_id: Uuid) -> TrackingResult<u64>;
    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> TrackingResult<()>;
    async fn mark_all_read(&self, user_id: Uuid) -> TrackingResult<u64>;
    async fn dismiss(&self, id: Uuid, user_id: Uuid) -> TrackingResult<()>;
}
