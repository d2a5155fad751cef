use shared::class_names;
use shared::config::{BrandConfig, FontConfig, LogoConfig};
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: BrandConfig,
    pub logo: LogoConfig,
    pub font: FontConfig,
}

/// Tagline classes: the generated font class first, then the utility classes.
pub(crate) fn tagline_classes(font: &FontConfig) -> String {
    class_names!(font.class_name.as_str(), "font-bold text-base text-purple-500")
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="flex pt-12 flex-col gap-1 items-center relative z-10">
            <a href={props.brand.homepage.clone()} target="_blank">
                <img
                    src={props.logo.src.clone()}
                    alt={props.logo.alt.clone()}
                    width={props.logo.width.to_string()}
                />
            </a>
            <h1 class="font-bold text-gray-900 text-4xl md:text-6xl">{ props.brand.name.clone() }</h1>
            <h2 class={tagline_classes(&props.font)}>{ props.brand.tagline.clone() }</h2>
        </div>
    }
}
