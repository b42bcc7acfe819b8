use sqlx::PgPool;
use sqlx::postgres::PgConnectOptions;

use crate::config::DbConfig;

pub async fn init_db(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(config.ssl_mode);

    PgPool::connect_with(options).await
}
