use database_model::tracking::prelude::*;
use domain_tracking::{
    model::entity::Notification,
    repository::{DBRepository, MutableRepository, NotificationRepo, ReadOnlyRepository},
};
use sea_orm::{prelude::*, sea_query::Expr, ActiveValue::Set, QueryOrder};

use crate::infrastructure::database::OrmRepo;

fn to_active_model(entity: &Notification) -> NotificationActiveModel {
    NotificationActiveModel {
        id: Set(entity.id),
        title: Set(entity.title.clone()),
        content: Set(entity.content.clone()),
        r#type: Set(entity.r#type as i32),
        priority: Set(entity.priority as i32),
        is_read: Set(entity.is_read),
        related_item_id: Set(entity.related_item_id),
        user_id: Set(entity.user_id),
        is_deleted: Set(entity.is_deleted),
        created_time: Set(entity.created_time),
    }
}

#[async_trait::async_trait]
impl ReadOnlyRepository<Notification> for OrmRepo {
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Notification> {
        NotificationEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .ok_or(anyhow::anyhow!("There is no such notification with id: {id}"))?
            .try_into()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Notification>> {
        NotificationEntity::find()
            .order_by_desc(NotificationColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

#[async_trait::async_trait]
impl MutableRepository<Notification> for OrmRepo {
    async fn insert(&self, entity: Notification) -> anyhow::Result<Notification> {
        to_active_model(&entity).insert(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn update(&self, entity: Notification) -> anyhow::Result<Notification> {
        to_active_model(&entity).update(self.db.get_connection()).await?;
        Ok(entity)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(NotificationEntity::delete_by_id(id)
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

impl DBRepository<Notification> for OrmRepo {}

#[async_trait::async_trait]
impl NotificationRepo for OrmRepo {
    async fn get_feed(&self, user_id: Uuid) -> anyhow::Result<Vec<Notification>> {
        NotificationEntity::find()
            .filter(NotificationColumn::UserId.eq(user_id))
            .filter(NotificationColumn::IsDeleted.eq(false))
            .order_by_desc(NotificationColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    async fn unread_count(&self, user_id: Uuid) -> anyhow::Result<u64> {
        Ok(NotificationEntity::find()
            .filter(NotificationColumn::UserId.eq(user_id))
            .filter(NotificationColumn::IsDeleted.eq(false))
            .filter(NotificationColumn::IsRead.eq(false))
            .count(self.db.get_connection())
            .await?)
    }

    async fn mark_read(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(NotificationEntity::update_many()
            .col_expr(NotificationColumn::IsRead, Expr::value(true))
            .filter(NotificationColumn::Id.eq(id))
            .filter(NotificationColumn::UserId.eq(user_id))
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> anyhow::Result<u64> {
        Ok(NotificationEntity::update_many()
            .col_expr(NotificationColumn::IsRead, Expr::value(true))
            .filter(NotificationColumn::UserId.eq(user_id))
            .filter(NotificationColumn::IsRead.eq(false))
            .filter(NotificationColumn::IsDeleted.eq(false))
            .exec(self.db.get_connection())
            .await?
            .rows_affected)
    }

    async fn dismiss(&self, id: Uuid, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(NotificationEntity::update_many()
            .col_expr(NotificationColumn::IsDeleted, Expr::value(true))
            .filter(NotificationColumn::Id.eq(id))
            .filter(NotificationColumn::UserId.eq(user_id))
            .exec(self.db.get_connection())
            .await?
            .rows_affected
            > 0)
    }
}
