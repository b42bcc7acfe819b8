use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod store;
#[cfg(test)]
mod test_utils;

use auth::jwt::TokenIssuer;
use config::Config;
use db::init_db;
use model::{Attendance, User};
use store::{PgStore, Store};

use crate::docs::ApiDoc;
use tracing::{error, info};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    if let Err(e) = run().await {
        error!(error = ?e, "Server stopped");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("could not load the configuration")?;

    info!("Server starting...");

    let pool = init_db(&config.db)
        .await
        .context("could not load the database")?;
    let store = PgStore::new(pool);

    store
        .sync::<User>()
        .await
        .context("could not migrate users")?;
    store
        .sync::<Attendance>()
        .await
        .context("could not migrate attendances")?;

    let tokens = TokenIssuer::new(&config.jwt_secret);
    let server_addr = config.server_addr.clone();
    let api_prefix = config.api_prefix.clone();

    info!(addr = %server_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::MergeOnly))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard matches the JS/CSS assets
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(store.clone()))
            .app_data(Data::new(tokens.clone()))
            .configure(|cfg| routes::configure::<PgStore>(cfg, &api_prefix))
    })
    .bind(&server_addr)
    .with_context(|| format!("could not bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
