mod config;
mod db;
mod services;
mod templates;

use crate::config::Config;
use crate::db::reviews::ReviewRepository;
use crate::db::Database;
use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // Table creation and seeding happen once here, not per request.
    let db = Database::open_at(&config.database).map_err(|e| {
        error!("Failed to open {}: {}", config.database.display(), e);
        io::Error::other(e)
    })?;
    match ReviewRepository::new(&db).count() {
        Ok(count) => info!("{} reviews in store", count),
        Err(e) => warn!("Could not count reviews: {}", e),
    }
    let db = web::Data::new(db);

    let static_dir = config.static_dir.is_dir().then(|| config.static_dir.clone());
    if static_dir.is_none() {
        warn!(
            "Static directory {} not found, /static will not be served",
            config.static_dir.display()
        );
    }

    info!("Server running at {}", config.url());

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(db.clone());
        if let Some(dir) = &static_dir {
            app = app.service(Files::new("/static", dir));
        }
        app.configure(services::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
