use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use showcase_backend::{db, handlers, storage};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool and apply the schema
    let pool = db::create_pool().await;
    let media_root = storage::MediaRoot::from_env();

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(media_root.clone()))
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
