use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tracing::{debug, info, instrument};

use super::extractors::MealSubmission;
use super::views::IndexTemplate;
use crate::{error::AppError, state::AppState};

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home).post(home))
        .route("/add", get(add_without_form).post(add_meal))
        .route("/delete/:id", get(delete_meal).post(delete_meal))
}

#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let meals = state.store.list_all().await?;
    let page = IndexTemplate::new(meals).render()?;
    Ok(Html(page))
}

/// POST /add. Incomplete or unreadable submissions are dropped without
/// telling the user; the response is always a redirect home.
#[instrument(skip(state, form))]
pub async fn add_meal(
    State(state): State<AppState>,
    MealSubmission(form): MealSubmission,
) -> Result<Redirect, AppError> {
    match form.complete() {
        Some((description, rating)) => {
            let meal = state.store.create(description, rating).await?;
            info!(id = meal.id, rating = %meal.rating, "meal added");
        }
        None => debug!("incomplete meal submission ignored"),
    }
    Ok(Redirect::to("/"))
}

/// GET /add carries no form body, so there is never anything to store.
pub async fn add_without_form() -> Redirect {
    Redirect::to("/")
}

/// GET|POST /delete/:id. Unknown ids are a no-op.
#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    match parse_meal_id(&raw_id) {
        MealId::Invalid => return Ok(StatusCode::NOT_FOUND.into_response()),
        // No row can carry an id past the column's range.
        MealId::OutOfRange => debug!(raw_id = %raw_id, "delete of out-of-range id ignored"),
        MealId::Valid(id) => {
            if state.store.delete_by_id(id).await? {
                info!(id, "meal deleted");
            } else {
                debug!(id, "delete of unknown meal ignored");
            }
        }
    }
    Ok(Redirect::to("/").into_response())
}

#[derive(Debug, PartialEq, Eq)]
enum MealId {
    Valid(i32),
    OutOfRange,
    Invalid,
}

/// Only plain digit strings match the route.
fn parse_meal_id(raw: &str) -> MealId {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return MealId::Invalid;
    }
    match raw.parse::<i32>() {
        Ok(id) => MealId::Valid(id),
        Err(_) => MealId::OutOfRange,
    }
}
