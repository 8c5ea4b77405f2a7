use crate::config::AppConfig;
use crate::db::{self, StartupCheck};
use crate::meals::{MealStore, PgMealStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MealStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Loads config, waits for the database, applies migrations.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        tracing::info!(target_db = ?config.target, "using database target");

        let pool = db::pool(&config.database_url)?;
        let store = Arc::new(PgMealStore::new(pool.clone())) as Arc<dyn MealStore>;

        StartupCheck::default().wait_for(store.as_ref()).await?;
        db::migrate(&pool).await?;

        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: Arc<dyn MealStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn with_store(store: Arc<dyn MealStore>) -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("default config");
        Self::from_parts(store, Arc::new(config))
    }
}
