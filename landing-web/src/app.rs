use shared::config::LandingConfig;
use yew::{Html, function_component, html, use_memo};

use crate::pages::Home;

/// Browser root: renders [`Home`] with the built-in page configuration.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| LandingConfig::with_defaults());

    html! {
        <Home config={(*config).clone()} />
    }
}
