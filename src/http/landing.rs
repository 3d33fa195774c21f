//! Landing page served on `/` and `/proxy/`.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>CORS Relay</title>
  <style>
    body { background-color: #f0f2f5; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif; margin: 0; display: flex; justify-content: center; align-items: center; height: 100vh; }
    .container { text-align: center; }
    h1 { color: #333; }
    .form-wrapper { background-color: white; padding: 40px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
    input[type="text"] { width: 100%; max-width: 400px; box-sizing: border-box; font-size: 16px; padding: 12px; border: 1px solid #ccc; border-radius: 4px; margin-bottom: 20px; }
    button { padding: 12px 20px; background-color: #0052d9; color: white; font-size: 16px; border: none; border-radius: 4px; cursor: pointer; width: 100%; }
    button:hover { background-color: #003cab; }
  </style>
</head>
<body>
  <div class="container">
    <div class="form-wrapper">
      <h1>Enter the address to visit</h1>
      <form id="relay-form">
        <input type="text" id="url" name="url" placeholder="https://example.com" required />
        <button type="submit">Go</button>
      </form>
    </div>
  </div>
  <script>
    document.getElementById('relay-form').addEventListener('submit', event => {
      event.preventDefault();
      const target = document.getElementById('url').value;
      window.location.href = window.location.origin + '/proxy/' + target;
    });
  </script>
</body>
</html>
"#;

/// The landing page document.
pub fn landing_html() -> &'static str {
    LANDING_PAGE
}

/// Handler for the landing routes. Served as `text/html; charset=utf-8`.
pub async fn landing_page() -> Html<&'static str> {
    Html(landing_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_single_form() {
        let html = landing_html();
        assert_eq!(html.matches("<form").count(), 1);
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn test_script_targets_relay_path() {
        assert!(landing_html().contains("window.location.origin + '/proxy/' + target"));
    }
}
