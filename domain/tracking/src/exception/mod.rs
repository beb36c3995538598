use thiserror::Error;
use uuid::Uuid;

use crate::model::entity::task::TaskStatus;

pub type TrackingResult<T> = Result<T, TrackingException>;

#[derive(Error, Debug)]
pub enum TrackingException {
    #[error("A technician with email: {email} already exists.")]
    DuplicateEmail { email: String },

    #[error("A technician with employee id: {employee_id} already exists.")]
    DuplicateEmployeeId { employee_id: String },

    #[error("A job order with number: {job_number} already exists.")]
    DuplicateJobNumber { job_number: String },

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Missing or invalid bearer token.")]
    Unauthorized,

    #[error("There is no such {entity} with id: {id}.")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Technician: {id} is deactivated.")]
    InactiveTechnician { id: Uuid },

    #[error("Role: {role} is not permitted for this technician.")]
    RoleNotAllowed { role: String },

    #[error("Job order: {id} accepts {quantity} units at most, {attempted} would be reached.")]
    QuantityExceeded {
        id: Uuid,
        quantity: i32,
        attempted: i64,
    },

    #[error("Job order: {id} is closed for new work sessions.")]
    JobOrderClosed { id: Uuid },

    #[error("Task: {id} can not go from {from} to {to}.")]
    InvalidStatusChange {
        id: Uuid,
        from: TaskStatus,
        to: TaskStatus,
    },

    #[error("Task: {id} has already been reviewed.")]
    AlreadyReviewed { id: Uuid },

    #[error("{message}")]
    Validation { message: String },

    #[error("Tracking internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for TrackingException {
    fn from(e: anyhow::Error) -> Self {
        TrackingException::InternalError { source: e }
    }
}
