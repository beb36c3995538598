use actix_web::{
    get, post,
    web::{Data, Json},
};
use domain_tracking::{
    command::{LoginCommand, RegisterTechnicianCommand},
    model::{entity::Technician, vo::auth::AuthToken},
};

use crate::{
    api::{
        dtos::SwitchRoleRequest,
        error::{ApiResponder, ApiResponderResult},
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[post("/api/auth/register")]
pub async fn register(
    sp: Data<ServiceProvider>,
    request: Json<RegisterTechnicianCommand>,
) -> ApiResponderResult<Technician> {
    let technician = sp.auth_service.register(request.into_inner()).await?;
    Ok(ApiResponder(technician))
}

#[tracing::instrument(skip_all)]
#[post("/api/auth/login")]
pub async fn login(
    sp: Data<ServiceProvider>,
    request: Json<LoginCommand>,
) -> ApiResponderResult<AuthToken> {
    let auth = sp.auth_service.login(request.into_inner()).await?;
    Ok(ApiResponder(auth))
}

#[tracing::instrument(skip_all)]
#[get("/api/auth/me")]
pub async fn me(sp: Data<ServiceProvider>, user: UserInfo) -> ApiResponderResult<Technician> {
    let technician = sp.auth_service.profile(user.user_id).await?;
    Ok(ApiResponder(technician))
}

#[tracing::instrument(skip_all)]
#[post("/api/auth/switch-role")]
pub async fn switch_role(
    sp: Data<ServiceProvider>,
    user: UserInfo,
    request: Json<SwitchRoleRequest>,
) -> ApiResponderResult<AuthToken> {
    let auth = sp.auth_service.switch_role(user.user_id, request.role).await?;
    Ok(ApiResponder(auth))
}
