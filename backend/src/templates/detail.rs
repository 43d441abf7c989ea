use super::stars;
use common::model::review::Review;
use html_escape::encode_text;

/// Renders the page for a single review.
pub fn render_detail(review: &Review) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>.stars {{ color: gold; }}</style>
</head>
<body>
    <h1>{title}</h1>
    <p class="stars">{stars}</p>
    <p>{text}</p>
    <a href="/">← Back to reviews</a>
</body>
</html>
"#,
        title = encode_text(&review.title),
        stars = stars(review.rating),
        text = encode_text(&review.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_detail() {
        let review = Review {
            id: 1,
            title: "Mr. Pumpkin Man".into(),
            text: "This is a pretty bad movie & then some".into(),
            rating: 4,
        };
        let html = render_detail(&review);
        assert!(html.contains("<h1>Mr. Pumpkin Man</h1>"));
        assert!(html.contains(r#"<p class="stars">★★★★☆</p>"#));
        assert!(html.contains("<p>This is a pretty bad movie &amp; then some</p>"));
    }
}
