use actix_web::{
    get, post,
    web::{Data, Path},
};
use domain_tracking::model::entity::Notification;

use crate::{
    api::{
        error::{ApiResponder, ApiResponderResult},
        extract_uuid,
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[get("/api/notifications")]
pub async fn feed(
    sp: Data<ServiceProvider>,
    user: UserInfo,
) -> ApiResponderResult<Vec<Notification>> {
    let notifications = sp.notification_service.feed(user.user_id).await?;
    Ok(ApiResponder(notifications))
}

#[tracing::instrument(skip_all)]
#[get("/api/notifications/unread-count")]
pub async fn unread_count(sp: Data<ServiceProvider>, user: UserInfo) -> ApiResponderResult<u64> {
    let count = sp.notification_service.unread_count(user.user_id).await?;
    Ok(ApiResponder(count))
}

#[tracing::instrument(skip_all)]
#[post("/api/notifications/{id}/read")]
pub async fn mark_read(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<()> {
    sp.notification_service.mark_read(extract_uuid(&id)?, user.user_id).await?;
    Ok(ApiResponder(()))
}

#[tracing::instrument(skip_all)]
#[post("/api/notifications/read-all")]
pub async fn mark_all_read(sp: Data<ServiceProvider>, user: UserInfo) -> ApiResponderResult<u64> {
    let changed = sp.notification_service.mark_all_read(user.user_id).await?;
    Ok(ApiResponder(changed))
}

#[tracing::instrument(skip_all)]
#[post("/api/notifications/{id}/dismiss")]
pub async fn dismiss(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<()> {
    sp.notification_service.dismiss(extract_uuid(&id)?, user.user_id).await?;
    Ok(ApiResponder(()))
}
