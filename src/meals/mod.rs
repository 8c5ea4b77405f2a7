mod dto;
mod extractors;
mod handlers;
mod repo;
mod views;

#[cfg(test)]
pub(crate) mod fake;

use crate::state::AppState;
use axum::Router;

pub use repo::{MealStore, PgMealStore};

pub fn router() -> Router<AppState> {
    handlers::meal_routes()
}
