use actix_web::{web, App, HttpServer};
use env_logger::Env;
use fish_viewer::business::FishManager;
use fish_viewer::config::AppConfig;
use fish_viewer::persistence::{seed, FishDao};
use fish_viewer::services;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if let Some(script) = &config.seed_script {
        seed::seed_from_file(&config.database, script).map_err(|e| {
            error!("Failed seeding database: {}", e);
            io::Error::other(e)
        })?;
    }

    let url = format!("http://{}:{}", config.host, config.port);

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let fish_dao = FishDao::new(config.database.clone());
    let fish_manager = FishManager::new(fish_dao.clone());

    info!(
        "Server running at {} (database {})",
        url,
        config.database.path.display()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(fish_manager.clone()))
            .app_data(web::Data::new(fish_dao.clone()))
            .route("/", web::get().to(services::fish::viewer))
            .service(services::fish::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
