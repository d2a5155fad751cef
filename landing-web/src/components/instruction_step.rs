use shared::{class_map, class_names};
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct InstructionStepProps {
    pub children: Children,
    /// Stretch the row across the panel instead of padding it vertically
    #[prop_or(false)]
    pub full_width: bool,
    /// Looser line height on wide screens
    #[prop_or(false)]
    pub relaxed: bool,
}

pub(crate) fn row_classes(full_width: bool) -> String {
    class_names!(
        "flex",
        class_map! { "w-full" => full_width, "py-3" => !full_width },
        "flex-row gap-3"
    )
}

pub(crate) fn text_classes(relaxed: bool) -> String {
    class_names!(
        "w-full leading-loose",
        class_map! {
            "justify-start xl:leading-relaxed" => relaxed,
            "lg:leading-7" => !relaxed,
        },
        "text-sm lg:text-base items-baseline gap-0 text-left"
    )
}

/// A bulleted instruction row.
#[function_component(InstructionStep)]
pub fn instruction_step(props: &InstructionStepProps) -> Html {
    html! {
        <div class={row_classes(props.full_width)}>
            <span>{"•"}</span>
            <span class={text_classes(props.relaxed)}>
                { for props.children.iter() }
            </span>
        </div>
    }
}
