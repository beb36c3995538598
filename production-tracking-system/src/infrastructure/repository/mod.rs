mod job_order;
mod notification;
mod task;
mod technician;
