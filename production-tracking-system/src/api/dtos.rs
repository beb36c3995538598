use domain_tracking::model::entity::technician::Role;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SwitchRoleRequest {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianListQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PendingReviewQuery {
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    pub note: String,
}
