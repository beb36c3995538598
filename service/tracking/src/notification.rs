use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_tracking::{
    exception::{TrackingException, TrackingResult},
    model::entity::{
        notification::{NotificationPriority, NotificationType},
        Notification,
    },
    repository::NotificationRepo,
    service::NotificationService,
};
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    notification_repo: Arc<dyn NotificationRepo>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn push(
        &self,
        user_id: Uuid,
        r#type: NotificationType,
        priority: NotificationPriority,
        title: &str,
        content: &str,
        related_item_id: Uuid,
    ) -> TrackingResult<Notification> {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            r#type,
            priority,
            is_read: false,
            related_item_id,
            user_id,
            is_deleted: false,
            created_time: Utc::now(),
        };
        let notification = self.notification_repo.insert(notification).await?;
        self.notification_repo.save_changed().await?;
        Ok(notification)
    }

    async fn feed(&self, user_id: Uuid) -> TrackingResult<Vec<Notification>> {
        Ok(self.notification_repo.get_feed(user_id).await?)
    }

    async fn unread_count(&self, user_id: Uuid) -> TrackingResult<u64> {
        Ok(self.notification_repo.unread_count(user_id).await?)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> TrackingResult<()> {
        if !self.notification_repo.mark_read(id, user_id).await? {
            return Err(TrackingException::NotFound {
                entity: "notification",
                id,
            });
        }
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Uuid) -> TrackingResult<u64> {
        Ok(self.notification_repo.mark_all_read(user_id).await?)
    }

    async fn dismiss(&self, id: Uuid, user_id: Uuid) -> TrackingResult<()> {
        if !self.notification_repo.dismiss(id, user_id).await? {
            return Err(TrackingException::NotFound {
                entity: "notification",
                id,
            });
        }
        Ok(())
    }
}
