use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::repo::{Meal, MealStore};

/// In-memory `MealStore` for handler tests.
#[derive(Default)]
pub struct FakeMealStore {
    inner: Mutex<Inner>,
    failing_pings: AtomicUsize,
    pings: AtomicUsize,
    broken: bool,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    meals: Vec<Meal>,
}

impl FakeMealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query fails, like a database that went away mid-flight.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    /// The first `n` pings fail, later ones succeed.
    pub fn with_failing_pings(n: usize) -> Self {
        Self {
            failing_pings: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    pub fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Meal> {
        self.inner.lock().unwrap().meals.clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl MealStore for FakeMealStore {
    async fn create(&self, description: &str, rating: &str) -> anyhow::Result<Meal> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let meal = Meal {
            id: inner.next_id,
            description: description.to_string(),
            rating: rating.to_string(),
        };
        inner.meals.push(meal.clone());
        Ok(meal)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Meal>> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Meal>> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner.meals.iter().find(|m| m.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> anyhow::Result<bool> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.meals.len();
        inner.meals.retain(|m| m.id != id);
        Ok(inner.meals.len() != before)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let remaining = self.failing_pings.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_pings.store(remaining - 1, Ordering::SeqCst);
            anyhow::bail!("database is starting up");
        }
        Ok(())
    }
}
