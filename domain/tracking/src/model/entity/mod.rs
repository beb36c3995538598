pub mod job_order;
pub mod notification;
pub mod task;
pub mod technician;

#[rustfmt::skip]
pub use {
    job_order::JobOrder,
    notification::Notification,
    task::Task,
    technician::Technician,
};
