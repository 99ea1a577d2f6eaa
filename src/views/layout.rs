//! Page shell and shared HTML helpers.

pub const STYLESHEET: &str = r#"body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  background: #141414;
  color: #f1f1f1;
}
a { color: inherit; text-decoration: none; }
.App, .movie-details { max-width: 1100px; margin: 0 auto; padding: 24px; text-align: center; }
form { display: flex; gap: 8px; justify-content: center; margin-bottom: 24px; }
input[type="text"] { width: 320px; padding: 8px 12px; border-radius: 4px; border: 1px solid #444; background: #222; color: #f1f1f1; }
button, .button { padding: 8px 14px; border: 0; border-radius: 4px; background: #e50914; color: #fff; cursor: pointer; display: inline-block; }
.movie-results { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px; }
.movie-card { background: #1f1f1f; border-radius: 6px; padding: 12px; }
.movie-card img { width: 100%; height: 300px; object-fit: cover; border-radius: 4px; }
.movie-card h3 { font-size: 1rem; margin: 8px 0 4px; }
.movie-card p { margin: 2px 0; color: #bbb; font-size: 0.9rem; }
.pagination { display: flex; gap: 6px; justify-content: center; margin: 24px 0; flex-wrap: wrap; }
.pagination .button { background: #333; }
.pagination .button.active { background: #e50914; }
.movie-details img { max-width: 300px; border-radius: 6px; margin: 16px 0; }
.movie-details p { text-align: left; max-width: 640px; margin: 8px auto; }
"#;

/// Escapes text for element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps a rendered body in the document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{}</title>
    <link rel="stylesheet" href="/app.css">
</head>
<body>
{body}
</body>
</html>"#,
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("Amélie"), "Amélie");
    }

    #[test]
    fn page_escapes_title_but_not_body() {
        let html = page("A <Title>", "<main>ok</main>");
        assert!(html.contains("<title>A &lt;Title&gt;</title>"));
        assert!(html.contains("<main>ok</main>"));
        assert!(html.contains(r#"href="/app.css""#));
    }
}
