use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::meals::MealStore;

/// Fixed-attempt, fixed-interval policy for the boot-time database probe.
#[derive(Debug, Clone, Copy)]
pub struct StartupCheck {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for StartupCheck {
    fn default() -> Self {
        Self {
            attempts: 10,
            interval: Duration::from_secs(2),
        }
    }
}

impl StartupCheck {
    /// Probes the store until it answers or the attempts run out.
    pub async fn wait_for(&self, store: &dyn MealStore) -> anyhow::Result<()> {
        for attempt in 1..=self.attempts {
            match store.ping().await {
                Ok(()) => {
                    info!(attempt, "database is ready");
                    return Ok(());
                }
                Err(e) if attempt < self.attempts => {
                    warn!(
                        error = %e,
                        attempt,
                        "database not ready, retrying in {}s",
                        self.interval.as_secs_f32()
                    );
                    tokio::time::sleep(self.interval).await;
                }
                Err(e) => {
                    warn!(error = %e, attempt, "database not ready");
                }
            }
        }
        anyhow::bail!(
            "could not connect to database after {} attempts",
            self.attempts
        )
    }
}

/// Builds the pool without connecting; the first query opens a connection.
pub fn pool(database_url: &str) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
        .context("parse database url")?;
    Ok(db)
}

pub async fn migrate(db: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    Ok(())
}
