use std::sync::Arc;

use domain_tracking::service::{
    AuthService, JobOrderService, MetricsService, NotificationService, ReviewService,
    TechnicianService, WorkSessionService,
};
use service_tracking::{
    AuthServiceImpl, JobOrderServiceImpl, MetricsServiceImpl, NotificationServiceImpl,
    ReviewServiceImpl, TechnicianServiceImpl, WorkSessionServiceImpl,
};

use super::{
    config::AppConfig,
    database::{Database, OrmRepo},
};

/// Hand-wired composition root: one sea-orm repository behind every service.
pub struct ServiceProvider {
    config: AppConfig,
    pub auth_service: Arc<dyn AuthService>,
    pub technician_service: Arc<dyn TechnicianService>,
    pub job_order_service: Arc<dyn JobOrderService>,
    pub work_session_service: Arc<dyn WorkSessionService>,
    pub review_service: Arc<dyn ReviewService>,
    pub metrics_service: Arc<dyn MetricsService>,
    pub notification_service: Arc<dyn NotificationService>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config: AppConfig = config.try_deserialize()?;
        let db = Arc::new(Database::new(config.db().url()).await?);
        let repo = Arc::new(OrmRepo::builder().db(db).build());

        let notification_service: Arc<dyn NotificationService> = Arc::new(
            NotificationServiceImpl::builder().notification_repo(repo.clone()).build(),
        );
        let metrics_service: Arc<dyn MetricsService> = Arc::new(
            MetricsServiceImpl::builder()
                .task_repo(repo.clone())
                .job_order_repo(repo.clone())
                .technician_repo(repo.clone())
                .build(),
        );
        let auth_service = Arc::new(
            AuthServiceImpl::builder()
                .technician_repo(repo.clone())
                .jwt_secret(config.jwt().secret().clone())
                .token_exp_hours(*config.jwt().exp_hours())
                .build(),
        );
        let technician_service = Arc::new(
            TechnicianServiceImpl::builder().technician_repo(repo.clone()).build(),
        );
        let job_order_service = Arc::new(
            JobOrderServiceImpl::builder().job_order_repo(repo.clone()).build(),
        );
        let work_session_service = Arc::new(
            WorkSessionServiceImpl::builder()
                .task_repo(repo.clone())
                .job_order_repo(repo.clone())
                .technician_repo(repo.clone())
                .notification_service(notification_service.clone())
                .build(),
        );
        let review_service = Arc::new(
            ReviewServiceImpl::builder()
                .task_repo(repo.clone())
                .job_order_repo(repo)
                .metrics_service(metrics_service.clone())
                .notification_service(notification_service.clone())
                .build(),
        );

        Ok(Self {
            config,
            auth_service,
            technician_service,
            job_order_service,
            work_session_service,
            review_service,
            metrics_service,
            notification_service,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
