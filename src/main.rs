use actix_web::middleware::{self, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use inventory_api::app::{configure, create_mediator_service, create_store};
use inventory_api::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let settings = Settings::from_env()?;
    let store = create_store(&settings).context("Failed to open the inventory store")?;
    let mediator = create_mediator_service(&store);

    log::info!("Listening on {}:{}", settings.host, settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .configure(configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    Ok(())
}
