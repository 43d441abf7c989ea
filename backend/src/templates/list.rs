use super::stars;
use common::model::review::Review;
use html_escape::encode_text;
use std::fmt::Write;

const HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Movie Reviews</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        body {
            background: url('/static/ghibli.png') no-repeat center center fixed;
            background-size: cover;
            font-family: 'Segoe UI', sans-serif;
            padding: 2rem;
            color: #333;
        }
        .review-table {
            background-color: rgba(255, 255, 255, 0.85);
            border-radius: 10px;
            box-shadow: 0 0 10px rgba(0,0,0,0.1);
            padding: 1rem;
        }
        .stars {
            color: gold;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1 class="text-center text-white mb-4">Ghibli Movie Theater Reviews</h1>
        <div class="text-center mb-3">
            <a href="/new" class="btn btn-success">➕ Add New Review</a>
        </div>
        <div class="review-table">
            <table class="table table-hover text-center align-middle">
                <thead class="table-dark">
                    <tr>
                        <th>Title</th>
                        <th>Rating</th>
                        <th>Actions</th>
                    </tr>
                </thead>
                <tbody>
"#;

const TAIL: &str = r#"                </tbody>
            </table>
        </div>
    </div>
    <script>
        function deleteReview(id, el) {
            fetch(`/delete/${id}`, { method: 'POST' })
            .then(res => {
                if (res.ok) {
                    el.closest('tr').remove();
                } else {
                    alert('Error deleting review.');
                }
            });
        }
    </script>
</body>
</html>
"#;

/// Renders the index page listing every review.
pub fn render_list(reviews: &[Review]) -> String {
    let mut html = String::from(HEAD);
    for review in reviews {
        let _ = write!(
            html,
            r#"                    <tr>
                        <td><a href="/review/{id}">{title}</a></td>
                        <td class="stars">{stars}</td>
                        <td>
                            <a href="/edit/{id}" class="btn btn-sm btn-primary">Edit</a>
                            <button onclick="deleteReview({id}, this)" class="btn btn-sm btn-danger">Delete</button>
                        </td>
                    </tr>
"#,
            id = review.id,
            title = encode_text(&review.title),
            stars = stars(review.rating),
        );
    }
    html.push_str(TAIL);
    html
}
