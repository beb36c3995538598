use std::sync::Arc;

use colored::Colorize;
use tracing::{error, info};

use crate::infrastructure::{
    config::build_config, middleware::authorization::JwtAuth, telemetry::initialize_telemetry,
    ServiceProvider,
};

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(service_provider.config().telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };
    tokio::select! {
        _ = initialize_web_host(service_provider) => {

        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stoping Services (ctrl-c handling).");
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().host().clone();
    let jwt = sp.config().jwt().clone();
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(cors)
            .app_data(actix_web::web::Data::from(sp.clone()))
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(JwtAuth::new(jwt.clone()))
            .service(crate::api::auth::register)
            .service(crate::api::auth::login)
            .service(crate::api::auth::me)
            .service(crate::api::auth::switch_role)
            .service(crate::api::technician::list_technicians)
            .service(crate::api::technician::get_technician)
            .service(crate::api::technician::update_technician)
            .service(crate::api::technician::deactivate_technician)
            .service(crate::api::technician::get_performance)
            .service(crate::api::job_order::create_job_order)
            .service(crate::api::job_order::list_job_orders)
            .service(crate::api::job_order::get_job_order)
            .service(crate::api::job_order::update_job_order)
            .service(crate::api::job_order::cancel_job_order)
            .service(crate::api::task::start_task)
            .service(crate::api::task::pause_task)
            .service(crate::api::task::resume_task)
            .service(crate::api::task::complete_task)
            .service(crate::api::task::cancel_task)
            .service(crate::api::task::my_tasks)
            .service(crate::api::task::job_order_tasks)
            .service(crate::api::task::pending_review)
            .service(crate::api::task::approve_task)
            .service(crate::api::task::reject_task)
            .service(crate::api::dashboard::summary)
            .service(crate::api::dashboard::schedule_risk)
            .service(crate::api::notification::feed)
            .service(crate::api::notification::unread_count)
            .service(crate::api::notification::mark_read)
            .service(crate::api::notification::mark_all_read)
            .service(crate::api::notification::dismiss)
    })
    .bind((host.bind_address().to_owned(), *host.bind_port()))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into erorr: {}", e),
    }
}
