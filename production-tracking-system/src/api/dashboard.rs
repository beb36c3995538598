use actix_web::{
    get,
    web::{Data, Query},
};
use domain_tracking::model::vo::dashboard::{DashboardSummary, ScheduleRiskEntry};

use crate::{
    api::{
        dtos::SummaryQuery,
        error::{ApiResponder, ApiResponderResult},
    },
    infrastructure::{middleware::authorization::UserInfo, ServiceProvider},
};

#[tracing::instrument(skip_all)]
#[get("/api/dashboard/summary")]
pub async fn summary(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
    query: Query<SummaryQuery>,
) -> ApiResponderResult<DashboardSummary> {
    let summary = sp.metrics_service.dashboard_summary(query.days.unwrap_or(7)).await?;
    Ok(ApiResponder(summary))
}

#[tracing::instrument(skip_all)]
#[get("/api/dashboard/schedule-risk")]
pub async fn schedule_risk(
    sp: Data<ServiceProvider>,
    _user: UserInfo,
) -> ApiResponderResult<Vec<ScheduleRiskEntry>> {
    let entries = sp.metrics_service.schedule_risk().await?;
    Ok(ApiResponder(entries))
}
