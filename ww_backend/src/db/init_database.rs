use crate::db::migration::Migrator;
use crate::error::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Connects, creates the named Postgres database when it is missing, and
/// applies pending migrations.
pub async fn init_database(
    database_url: &str,
    database_name: Option<&str>,
) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;

    let db = match (db.get_database_backend(), database_name) {
        (DbBackend::Postgres, Some(database_name)) => {
            info!("Postgres database detected.");
            let existing = db
                .query_one(Statement::from_sql_and_values(
                    DbBackend::Postgres,
                    "SELECT 1 FROM pg_database WHERE datname = $1",
                    [database_name.into()],
                ))
                .await?;
            if existing.is_none() {
                info!(database_name, "Creating database.");
                db.execute(Statement::from_string(
                    DbBackend::Postgres,
                    format!("CREATE DATABASE \"{}\"", database_name.replace('"', "\"\"")),
                ))
                .await?;
            }
            let database_url = database_url.trim_end_matches('/');
            Database::connect(format!("{database_url}/{database_name}")).await?
        }
        (DbBackend::Postgres, None) => {
            info!("Postgres database detected.");
            db
        }
        (backend, _) => {
            info!("{:?} database detected.", backend);
            db
        }
    };

    Migrator::up(&db, None).await?;

    Ok(db)
}
