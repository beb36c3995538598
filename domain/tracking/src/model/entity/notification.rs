use chrono::{DateTime, Utc};
use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub r#type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    /// Id of the related item, its kind decided by `type`.
    pub related_item_id: Uuid,
    pub user_id: Uuid,
    pub is_deleted: bool,
    pub created_time: DateTime<Utc>,
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    #[default]
    TaskSubmitted,
    TaskApproved,
    TaskRejected,
    JobOrderAtRisk,
}

#[derive(
    ToPrimitive, FromPrimitive, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    #[default]
    Normal,
    High,
}

impl TryFrom<database_model::tracking::prelude::NotificationModel> for Notification {
    type Error = anyhow::Error;

    fn try_from(
        model: database_model::tracking::prelude::NotificationModel,
    ) -> Result<Self, Self::Error> {
        use num_traits::FromPrimitive;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            r#type: NotificationType::from_i32(model.r#type)
                .ok_or(anyhow::anyhow!("Unknown notification type code: {}", model.r#type))?,
            priority: NotificationPriority::from_i32(model.priority)
                .ok_or(anyhow::anyhow!("Unknown priority code: {}", model.priority))?,
            is_read: model.is_read,
            related_item_id: model.related_item_id,
            user_id: model.user_id,
            is_deleted: model.is_deleted,
            created_time: model.created_time,
        })
    }
}
