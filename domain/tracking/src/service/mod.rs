mod auth;
mod job_order;
mod metrics;
mod notification;
mod review;
mod technician;
mod work_session;

#[rustfmt::skip]
pub use {
    auth::AuthService,
    job_order::JobOrderService,
    metrics::MetricsService,
    notification::NotificationService,
    review::ReviewService,
    technician::TechnicianService,
    work_session::WorkSessionService,
};
