use askama::Template;

use super::dto::RATING_OPTIONS;
use super::repo::Meal;

/// The listing page: every stored meal plus the add form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub meals: Vec<Meal>,
    pub ratings: &'static [&'static str],
}

impl IndexTemplate {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            ratings: &RATING_OPTIONS,
        }
    }
}
