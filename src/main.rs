use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod notes;

use config::Config;
use notes::service::NotesService;
use notes::store::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub notes: NotesService,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notebox v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let port = config.port;
    let bind_address = config.bind_address.clone();

    // One store for the whole process. Collections are created lazily on first
    // write and live exactly as long as the process does.
    let store = Arc::new(NoteStore::new());
    let service = NotesService::new(Arc::clone(&store));
    let started_at = std::time::Instant::now();

    log::info!("Starting notebox server on {}:{}", bind_address, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                notes: service.clone(),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
    })
    .bind((bind_address.as_str(), port))?
    .run()
    .await
}
