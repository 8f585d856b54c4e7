use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payinsight::config::{Config, LogFormat, ServerConfig};
use payinsight::core::{Clock, SystemClock};
use payinsight::middleware::{ErrorHandler, RequestId};
use payinsight::ApiServices;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "payinsight=debug,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(server: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600);

    match &server.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.log_format);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting PayInsight payment analytics service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = ApiServices::mysql(db_pool, clock, config.app.default_range_days);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server_config = config.server.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(cors(&server_config))
            .wrap(TracingLogger::default())
            .configure(|cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated")?;
    Ok(())
}
