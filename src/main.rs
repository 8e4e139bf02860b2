use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use site_scout::config::{LoggingSettings, Settings};
use site_scout::core::SiteEvaluator;
use site_scout::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use site_scout::services::{load_categories, load_retailers};

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn startup_error(message: String) -> std::io::Error {
    error!("{}", message);
    std::io::Error::new(std::io::ErrorKind::Other, message)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Site Scout evaluation service...");

    let catalog = load_categories(settings.data.categories_path.as_deref())
        .map_err(|e| startup_error(format!("Failed to load category catalog: {}", e)))?;
    let dataset = load_retailers(settings.data.retailers_path.as_deref())
        .map_err(|e| startup_error(format!("Failed to load retailer dataset: {}", e)))?;

    info!(
        "Reference data loaded: {} categories, {} retailers ({} actively expanding)",
        catalog.len(),
        dataset.len(),
        dataset.actively_expanding().count()
    );

    let weights = settings.scoring.weights;
    let evaluator = SiteEvaluator::new(Arc::new(catalog), Arc::new(dataset), weights);

    info!("Evaluator initialized with weights: {:?}", weights);

    let app_state = AppState { evaluator };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
