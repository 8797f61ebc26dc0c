//! Content page for text links.

use askama::Template;
use askama_web::WebTemplate;

/// Template showing a stored text snippet.
///
/// Renders `templates/content.html`. `content` is HTML-escaped.
#[derive(Template, WebTemplate)]
#[template(path = "content.html")]
pub struct ContentTemplate {
    pub code: String,
    pub content: String,
    pub clicks: u64,
    pub home_path: String,
}
