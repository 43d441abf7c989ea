use common::model::review::{Review, TITLE_MAX_LEN};
use html_escape::{encode_double_quoted_attribute, encode_text};

fn render_form(heading: &str, submit: &str, title: &str, text: &str, rating: Option<i64>) -> String {
    let rating = rating.map(|r| format!(r#" value="{r}""#)).unwrap_or_default();
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{heading}</title>
</head>
<body>
    <h1>{heading}</h1>
    <form method="POST">
        Title: <input type="text" name="title" maxlength="{max}" value="{title}" required><br>
        Review: <br><textarea name="text" rows="5" cols="40" required>{text}</textarea><br>
        Rating (1-5): <input type="number" name="rating" min="1" max="5"{rating} required><br>
        <button type="submit">{submit}</button>
    </form>
    <a href="/">← Back to reviews</a>
</body>
</html>
"#,
        max = TITLE_MAX_LEN,
        title = encode_double_quoted_attribute(title),
        text = encode_text(text),
    )
}

/// Renders the empty creation form posted to `/new`.
pub fn render_new_form() -> String {
    render_form("Create New Review", "Submit", "", "", None)
}

/// Renders the edit form pre-filled with `review`.
pub fn render_edit_form(review: &Review) -> String {
    render_form(
        "Edit Review",
        "Update",
        &review.title,
        &review.text,
        Some(review.rating),
    )
}
