use actix_web::{
    get, post, put,
    web::{Data, Json, Path, Query},
};
use domain_tracking::{
    command::{CreateJobOrderCommand, UpdateJobOrderCommand},
    model::{entity::JobOrder, vo::JobOrderFilter},
};

use crate::{
    api::{
        error::{ApiResponder, ApiResponderResult},
        extract_uuid,
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[post("/api/job-orders")]
pub async fn create_job_order(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    request: Json<CreateJobOrderCommand>,
) -> ApiResponderResult<JobOrder> {
    let order = sp.job_order_service.create(request.into_inner()).await?;
    Ok(ApiResponder(order))
}

#[tracing::instrument(skip_all)]
#[get("/api/job-orders")]
pub async fn list_job_orders(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    filter: Query<JobOrderFilter>,
) -> ApiResponderResult<Vec<JobOrder>> {
    let orders = sp.job_order_service.list(filter.into_inner()).await?;
    Ok(ApiResponder(orders))
}

#[tracing::instrument(skip_all)]
#[get("/api/job-orders/{id}")]
pub async fn get_job_order(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<JobOrder> {
    let order = sp.job_order_service.get(extract_uuid(&id)?).await?;
    Ok(ApiResponder(order))
}

#[tracing::instrument(skip_all)]
#[put("/api/job-orders/{id}")]
pub async fn update_job_order(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
    request: Json<UpdateJobOrderCommand>,
) -> ApiResponderResult<JobOrder> {
    let order = sp.job_order_service.update(extract_uuid(&id)?, request.into_inner()).await?;
    Ok(ApiResponder(order))
}

#[tracing::instrument(skip_all)]
#[post("/api/job-orders/{id}/cancel")]
pub async fn cancel_job_order(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<JobOrder> {
    let order = sp.job_order_service.cancel(extract_uuid(&id)?).await?;
    Ok(ApiResponder(order))
}
