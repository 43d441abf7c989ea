use serde::{Deserialize, Serialize};

/// Longest title the `thereviews` table is declared to hold.
pub const TITLE_MAX_LEN: usize = 60;

/// A single movie review as stored in the `thereviews` table.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `rating` is expected to be in `1..=5` but is not constrained by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub rating: i64,
}
