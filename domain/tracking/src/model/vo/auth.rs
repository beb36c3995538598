use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::{technician::Role, Technician};

/// JWT payload issued on login and role switch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Technician uuid.
    pub sub: Uuid,
    pub email: String,
    /// Active role at issue time.
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Login / role-switch response: the signed token plus the profile it
/// belongs to.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub token: String,
    pub technician: Technician,
}
