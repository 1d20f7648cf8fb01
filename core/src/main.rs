use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;
use leasehold::{cors, mount_api};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let logger_enabled = config.console_logging_enabled;
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if logger_enabled {
        logger::setup(&config.log_file).expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url)
        .await
        .expect("Failed to set up database");

    log::info!(
        "Starting {} server on {}:{} with {} workers",
        config.environment,
        config.server_host,
        config.server_port,
        config.num_workers
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(logger::middleware(logger_enabled)) // 3rd
            .wrap(extractor::middleware(config_data.jwt_config.clone())) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(mount_api())
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
