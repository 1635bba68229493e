use sqlx::{migrate::Migrator, postgres::PgPoolOptions};

use crate::{conf::settings, prelude::Result};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&settings.database_url)
        .await?;
    tracing::debug!("connected to db");

    MIGRATOR.run(&pool).await?;
    tracing::info!("migrations applied successfully");
    Ok(())
}
