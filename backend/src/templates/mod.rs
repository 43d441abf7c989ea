//! # Page Templates
//!
//! Inline HTML for every page the server renders. User-supplied fields are
//! escaped with `html-escape` before they are written into markup.
//!
//! - `list`: the index table of all reviews.
//! - `form`: the create and edit forms.
//! - `detail`: a single review.

mod detail;
mod form;
mod list;

pub use detail::render_detail;
pub use form::{render_edit_form, render_new_form};
pub use list::render_list;

/// Number of slots on the star scale.
pub const STAR_SLOTS: i64 = 5;

const FILLED_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// Renders `rating` filled stars followed by `5 - rating` empty ones.
///
/// Ratings outside `0..=5` are clamped so the output always has five glyphs.
pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, STAR_SLOTS) as usize;
    let empty = STAR_SLOTS as usize - filled;
    format!("{}{}", FILLED_STAR.repeat(filled), EMPTY_STAR.repeat(empty))
}
