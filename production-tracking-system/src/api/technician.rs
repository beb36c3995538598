use actix_web::{
    delete, get, put,
    web::{Data, Json, Path, Query},
};
use domain_tracking::{
    command::UpdateTechnicianCommand,
    model::{entity::Technician, vo::dashboard::TechnicianPerformance},
};

use crate::{
    api::{
        dtos::TechnicianListQuery,
        error::{ApiResponder, ApiResponderResult},
        extract_uuid,
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[get("/api/technicians")]
pub async fn list_technicians(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    query: Query<TechnicianListQuery>,
) -> ApiResponderResult<Vec<Technician>> {
    let technicians = sp.technician_service.list(query.include_inactive).await?;
    Ok(ApiResponder(technicians))
}

#[tracing::instrument(skip_all)]
#[get("/api/technicians/{id}")]
pub async fn get_technician(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<Technician> {
    let technician = sp.technician_service.get(extract_uuid(&id)?).await?;
    Ok(ApiResponder(technician))
}

#[tracing::instrument(skip_all)]
#[put("/api/technicians/{id}")]
pub async fn update_technician(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
    request: Json<UpdateTechnicianCommand>,
) -> ApiResponderResult<Technician> {
    let technician =
        sp.technician_service.update(extract_uuid(&id)?, request.into_inner()).await?;
    Ok(ApiResponder(technician))
}

#[tracing::instrument(skip_all)]
#[delete("/api/technicians/{id}")]
pub async fn deactivate_technician(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<()> {
    sp.technician_service.deactivate(extract_uuid(&id)?).await?;
    Ok(ApiResponder(()))
}

#[tracing::instrument(skip_all)]
#[get("/api/technicians/{id}/performance")]
pub async fn get_performance(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    id: Path<String>,
) -> ApiResponderResult<TechnicianPerformance> {
    let performance = sp.metrics_service.technician_performance(extract_uuid(&id)?).await?;
    Ok(ApiResponder(performance))
}
