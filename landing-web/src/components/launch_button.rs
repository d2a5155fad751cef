use shared::class_names;
use shared::config::LaunchConfig;
use yew::{Html, Properties, function_component, html};

const BUTTON_CLASSES: &str = "mt-6 w-max flex flex-row text-white items-center justify-center \
     text-sm lg:text-base rounded py-3 px-8";

#[derive(Properties, PartialEq)]
pub struct LaunchButtonProps {
    pub launch: LaunchConfig,
}

#[function_component(LaunchButton)]
pub fn launch_button(props: &LaunchButtonProps) -> Html {
    let classes = class_names!(
        BUTTON_CLASSES,
        "hover:bg-purple-600 transition duration-400",
        "bg-purple-500"
    );
    let target = props.launch.new_tab.then_some("_blank");

    html! {
        <a href={props.launch.href.clone()} class={classes} target={target}>
            { props.launch.label.clone() }{" "}
            <div class="pl-2 font-bold">{"→"}</div>
        </a>
    }
}
