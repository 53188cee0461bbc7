use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use tracing::info;

use frizer_proxy_backend::config::Config;
use frizer_proxy_backend::routes;
use frizer_proxy_backend::store::AppointmentStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");
    let store = AppointmentStore::load(config.store_path.clone())
        .expect("Failed to load the appointment store");

    info!(
        "Loaded {} appointment date(s); persistence: {}",
        store.snapshot().len(),
        match &config.store_path {
            Some(path) => path.display().to_string(),
            None => "disabled".to_string(),
        }
    );
    info!(
        "Proxy server running at http://{}:{}",
        config.bind_addr, config.port
    );

    let bind = (config.bind_addr.clone(), config.port);
    let config = web::Data::new(config);
    let store = web::Data::new(store);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(config.clone())
            .app_data(store.clone())
            .configure(routes::init)
    })
    .bind(bind)?
    .run()
    .await
}
