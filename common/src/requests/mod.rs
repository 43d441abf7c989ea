use serde::{Deserialize, Serialize};
use std::num::ParseIntError;

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Form body posted by the create and edit pages.
///
/// `rating` is kept as raw text so the handler decides when coercion happens.
pub struct ReviewForm {
    pub title: String,
    pub text: String,
    pub rating: String,
}

impl ReviewForm {
    /// Coerces the submitted rating to an integer.
    pub fn rating(&self) -> Result<i64, ParseIntError> {
        self.rating.trim().parse()
    }
}
