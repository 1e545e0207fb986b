use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use account_service::{handlers, logging, AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let config = Config::from_env().expect("failed to load configuration from environment");
    let bind_addr = format!("{}:{}", config.server_host, config.server_port);

    // All shared state is built here and injected; nothing is global.
    let state = web::Data::new(AppState::new(&config.jwt_secret));
    let allowed_origins = config.allowed_origins.clone();

    tracing::info!(%bind_addr, "starting account-service");

    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .configure(handlers::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
