pub mod auth;
pub mod dashboard;
mod dtos;
pub mod error;
pub mod job_order;
pub mod notification;
pub mod task;
pub mod technician;

use domain_tracking::{exception::TrackingException, model::entity::technician::Role};
use uuid::Uuid;

use crate::infrastructure::middleware::authorization::UserInfo;
use error::ApiError;

pub(crate) fn extract_uuid(id: &str) -> Result<Uuid, ApiError> {
    id.parse().map_err(|_| {
        ApiError::from(TrackingException::Validation {
            message: format!("invalid uuid: {id}"),
        })
    })
}

/// The bearer must currently act as `role`.
pub(crate) fn require_role(user: &UserInfo, role: Role) -> Result<(), ApiError> {
    if user.role != role {
        return Err(ApiError::from(TrackingException::RoleNotAllowed {
            role: role.to_string(),
        }));
    }
    Ok(())
}
