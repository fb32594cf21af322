use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use pet_match::config::{LogFormat, Settings};
use pet_match::core::{default_questions, PetMatcher};
use pet_match::routes::{self, AppState};
use pet_match::services::{AppwriteClient, SessionStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, settings.logging.format);

    info!("Starting Pet Match quiz service...");

    let appwrite = AppwriteClient::new(
        settings.appwrite.endpoint.clone(),
        settings.appwrite.api_key.clone(),
        settings.appwrite.project_id.clone(),
        settings.appwrite.database_id.clone(),
        settings.collection.pets.clone(),
        settings.appwrite.timeout(),
    )
    .map_err(|e| {
        error!("Failed to create Appwrite client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?
    .with_query_limit(settings.matching.query_limit);

    info!("Appwrite client initialized (collection: {})", settings.collection.pets);

    let matcher = PetMatcher::new(Arc::new(appwrite)).with_max_results(settings.matching.max_results);

    let sessions = SessionStore::new(
        default_questions().into(),
        settings.sessions.max_sessions,
        settings.sessions.idle_timeout(),
    )
    .map_err(|e| {
        error!("Failed to initialize quiz sessions: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        "Session store initialized (max: {}, idle timeout: {}s)",
        settings.sessions.max_sessions, settings.sessions.idle_timeout_secs
    );

    let app_state = AppState { sessions, matcher };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
