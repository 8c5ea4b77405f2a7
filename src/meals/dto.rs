/// Choices offered by the add form. Not enforced when storing.
pub const RATING_OPTIONS: [&str; 5] = [
    "Nasty",
    "Didn't really like it",
    "Okay",
    "Pretty Good",
    "DELICIOUS",
];

/// Fields posted by the add form. Both are optional so that an incomplete
/// submission can be dropped quietly.
#[derive(Debug, Default)]
pub struct AddMealForm {
    pub meal: Option<String>,
    pub rating: Option<String>,
}

impl AddMealForm {
    /// Picks the first `meal` and first `rating` out of the submitted fields.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (name, value) in fields {
            match name.as_str() {
                "meal" if form.meal.is_none() => form.meal = Some(value),
                "rating" if form.rating.is_none() => form.rating = Some(value),
                _ => {}
            }
        }
        form
    }

    /// Description and rating, if both are present and non-empty.
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (self.meal.as_deref(), self.rating.as_deref()) {
            (Some(meal), Some(rating)) if !meal.is_empty() && !rating.is_empty() => {
                Some((meal, rating))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(meal: Option<&str>, rating: Option<&str>) -> AddMealForm {
        AddMealForm {
            meal: meal.map(String::from),
            rating: rating.map(String::from),
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn complete_requires_both_fields() {
        assert_eq!(
            form(Some("Pesto tortellini"), Some("Pretty Good")).complete(),
            Some(("Pesto tortellini", "Pretty Good"))
        );
        assert_eq!(form(Some("Pesto tortellini"), None).complete(), None);
        assert_eq!(form(None, Some("Okay")).complete(), None);
        assert_eq!(form(Some(""), Some("Okay")).complete(), None);
        assert_eq!(form(Some("Soup"), Some("")).complete(), None);
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(form(Some(" "), Some("Okay")).complete(), Some((" ", "Okay")));
    }

    #[test]
    fn unlisted_ratings_are_accepted() {
        assert_eq!(
            form(Some("Cereal"), Some("meh")).complete(),
            Some(("Cereal", "meh"))
        );
    }

    #[test]
    fn first_value_wins_for_repeated_fields() {
        let form = AddMealForm::from_fields(fields(&[
            ("meal", "a"),
            ("csrf", "x"),
            ("meal", "b"),
            ("rating", "Okay"),
            ("rating", "Nasty"),
        ]));
        assert_eq!(form.complete(), Some(("a", "Okay")));
    }

    #[test]
    fn empty_first_value_is_not_replaced_by_a_later_one() {
        let form = AddMealForm::from_fields(fields(&[
            ("meal", ""),
            ("meal", "Soup"),
            ("rating", "Okay"),
        ]));
        assert_eq!(form.meal.as_deref(), Some(""));
        assert_eq!(form.complete(), None);
    }
}
