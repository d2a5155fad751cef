//! Static HTML export of the landing page.

use shared::config::LandingConfig;
use yew::ServerRenderer;

use crate::pages::{Home, HomeProps};

/// Escapes text for use inside an HTML element or attribute.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders only the page body markup.
pub async fn render_body(config: LandingConfig) -> String {
    ServerRenderer::<Home>::with_props(move || HomeProps { config })
        .hydratable(false)
        .render()
        .await
}

/// Renders a complete, self-contained HTML document for the page.
///
/// # Arguments
/// * `config` - Page content; the font face becomes an inline style rule.
pub async fn render_document(config: LandingConfig) -> String {
    let title = escape_html(&format!("{} | {}", config.brand.name, config.brand.tagline));
    let style = config
        .font
        .style_rule()
        .map(|rule| format!("<style>{rule}</style>\n"))
        .unwrap_or_default();
    let body = render_body(config).await;

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         {style}\
         </head>\n\
         <body>{body}</body>\n\
         </html>\n"
    )
}
