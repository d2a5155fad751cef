use shared::config::LandingConfig;
use yew::{Html, Properties, function_component, html};

use crate::components::{Hero, InstructionPanel};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: LandingConfig,
}

/// The landing page: hero, notebook instructions and the divider strip.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = &props.config;

    html! {
        <main class="flex min-h-screen flex-col items-stretch gap-0">
            <div id="aboveFold" class="flex flex-col justify-center items-center max-w-full w-full min-h-screen overflow-hidden">
                <div class="flex flex-col items-center gap-2 md:gap-10 pb-12 md:px-6 lg:px-10 w-full text-center">
                    <Hero
                        brand={config.brand.clone()}
                        logo={config.logo.clone()}
                        font={config.font.clone()}
                    />
                    <InstructionPanel
                        instructions={config.instructions.clone()}
                        launch={config.launch.clone()}
                    />
                </div>
            </div>
            <div id="dividerGradient" class="h-0.5 sm:h-1 w-full">{" "}</div>
        </main>
    }
}
