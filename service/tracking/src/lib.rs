mod auth;
mod job_order;
mod metrics;
mod notification;
mod review;
mod technician;
mod work_session;

#[rustfmt::skip]
pub use {
    auth::AuthServiceImpl,
    job_order::JobOrderServiceImpl,
    metrics::MetricsServiceImpl,
    notification::NotificationServiceImpl,
    review::ReviewServiceImpl,
    technician::TechnicianServiceImpl,
    work_session::WorkSessionServiceImpl,
};
