use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
};
use domain_tracking::{
    command::{CompleteTaskCommand, StartTaskCommand},
    model::entity::{technician::Role, Task},
};

use crate::{
    api::{
        dtos::{ApproveRequest, PendingReviewQuery, RejectRequest},
        error::{ApiResponder, ApiResponderResult},
        extract_uuid, require_role,
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[post("/api/tasks/start")]
pub async fn start_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    request: Json<StartTaskCommand>,
) -> ApiResponderResult<Task> {
    let task = sp.work_session_service.start(user.user_id, request.into_inner()).await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/pause")]
pub async fn pause_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<Task> {
    let task = sp.work_session_service.pause(extract_uuid(&id)?, user.user_id).await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/resume")]
pub async fn resume_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<Task> {
    let task = sp.work_session_service.resume(extract_uuid(&id)?, user.user_id).await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/complete")]
pub async fn complete_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
    request: Json<CompleteTaskCommand>,
) -> ApiResponderResult<Task> {
    let task = sp
        .work_session_service
        .complete(extract_uuid(&id)?, user.user_id, request.into_inner())
        .await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/cancel")]
pub async fn cancel_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<Task> {
    let task = sp.work_session_service.cancel(extract_uuid(&id)?, user.user_id).await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[get("/api/tasks/mine")]
pub async fn my_tasks(sp: Data<ServiceProvider>, user: UserInfo) -> ApiResponderResult<Vec<Task>> {
    let tasks = sp.work_session_service.tasks_of_technician(user.user_id).await?;
    Ok(ApiResponder(tasks))
}

#[tracing::instrument(skip_all)]
#[get("/api/tasks/by-job-order/{id}")]
pub async fn job_order_tasks(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<Vec<Task>> {
    let tasks = sp.work_session_service.tasks_of_job_order(extract_uuid(&id)?).await?;
    Ok(ApiResponder(tasks))
}

#[tracing::instrument(skip_all)]
#[get("/api/tasks/pending-review")]
pub async fn pending_review(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    query: Query<PendingReviewQuery>,
) -> ApiResponderResult<Vec<Task>> {
    require_role(&user, Role::Supervisor)?;
    let tasks = sp.review_service.pending(query.into_inner().department).await?;
    Ok(ApiResponder(tasks))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/approve")]
pub async fn approve_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
    request: Json<ApproveRequest>,
) -> ApiResponderResult<Task> {
    require_role(&user, Role::Supervisor)?;
    let task = sp
        .review_service
        .approve(extract_uuid(&id)?, user.user_id, request.into_inner().note)
        .await?;
    Ok(ApiResponder(task))
}

#[tracing::instrument(skip_all)]
#[post("/api/tasks/{id}/reject")]
pub async fn reject_task(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    id: Path<String>,
    request: Json<RejectRequest>,
) -> ApiResponderResult<Task> {
    require_role(&user, Role::Supervisor)?;
    let task = sp
        .review_service
        .reject(extract_uuid(&id)?, user.user_id, request.into_inner().note)
        .await?;
    Ok(ApiResponder(task))
}
