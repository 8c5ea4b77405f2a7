use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

/// A stored meal. Rows are never updated, only inserted and deleted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Meal {
    pub id: i32,
    pub description: String,
    pub rating: String,
}

/// Access to the `meals` table.
///
/// Handlers only see this trait, so the backing store is chosen once when
/// [`crate::state::AppState`] is built.
#[async_trait]
pub trait MealStore: Send + Sync {
    /// Inserts a meal and returns it with its assigned id.
    async fn create(&self, description: &str, rating: &str) -> anyhow::Result<Meal>;
    async fn list_all(&self) -> anyhow::Result<Vec<Meal>>;
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Meal>>;
    /// Removes the meal if present. Returns whether a row was removed;
    /// a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool>;
    /// Trivial round trip used to check the database is reachable.
    async fn ping(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgMealStore {
    db: PgPool,
}

impl PgMealStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MealStore for PgMealStore {
    #[instrument(skip(self))]
    async fn create(&self, description: &str, rating: &str) -> anyhow::Result<Meal> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (description, rating)
            VALUES ($1, $2)
            RETURNING id, description, rating
            "#,
        )
        .bind(description)
        .bind(rating)
        .fetch_one(&self.db)
        .await?;
        Ok(meal)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, description, rating
            FROM meals
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Meal>> {
        let meal = sqlx::query_as::<_, Meal>(
            r#"
            SELECT id, description, rating
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(meal)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
