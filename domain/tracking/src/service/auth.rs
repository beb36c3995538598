use uuid::Uuid;

use crate::{
    command::{LoginCommand, RegisterTechnicianCommand},
    exception::TrackingResult,
    model::{
        entity::{technician::Role, Technician},
        vo::auth::AuthToken,
    },
};

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Create a technician account. Email and employee id must be unused.
    async fn register(&self, cmd: RegisterTechnicianCommand) -> TrackingResult<Technician>;
    /// Verify credentials and issue a bearer token carrying id, email and
    /// the active role.
    async fn login(&self, cmd: LoginCommand) -> TrackingResult<AuthToken>;
    async fn profile(&self, user_id: Uuid) -> TrackingResult<Technician>;
    /// Change the active role and re-issue the token so the role claim
    /// matches. The target must be inside the account's allowed roles.
    async fn switch_role(&self, user_id: Uuid, role: Role) -> TrackingResult<AuthToken>;
}
