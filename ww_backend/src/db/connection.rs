use crate::db::init_database::init_database;
use crate::error::Result;
use dotenv::dotenv;
use sea_orm::DatabaseConnection;
use std::env;
use ww_core::server::default_config::DEFAULT_DATABASE_URL;

pub async fn get_connection() -> Result<DatabaseConnection> {
    dotenv().ok();
    let database_url =
        env::var("DATABASE_URL").unwrap_or(String::from(DEFAULT_DATABASE_URL));
    let database_name = env::var("DATABASE_NAME")
        .ok()
        .filter(|name| !name.trim().is_empty());
    init_database(&database_url, database_name.as_deref()).await
}
