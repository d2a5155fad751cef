//! Class composition from command-line tokens.

use shared::class_names::{ClassToken, compose};
use tracing::debug;

/// Interprets one argument: JSON when it parses, plain text otherwise.
fn parse_token(raw: &str) -> ClassToken {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => ClassToken::from(value),
        Err(_) => ClassToken::Text(raw.to_string()),
    }
}

/// Composes the given arguments into a single class string.
///
/// # Arguments
/// * `tokens` - Raw arguments, e.g. `btn` or `'{"btn--active": true}'`.
pub fn compose_arguments(tokens: &[String]) -> String {
    let parsed: Vec<ClassToken> = tokens.iter().map(|raw| parse_token(raw)).collect();
    debug!(?parsed, "parsed class tokens");
    compose(parsed)
}
