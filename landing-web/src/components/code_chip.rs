use shared::{class_map, class_names};
use yew::{AttrValue, Html, Properties, function_component, html};

/// Visual weight of an inline code snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChipTone {
    /// Outlined chip for names the reader should recognise
    #[default]
    Light,
    /// Terminal-style chip for text the reader should type
    Dark,
}

#[derive(Properties, PartialEq)]
pub struct CodeChipProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub tone: ChipTone,
}

pub(crate) fn chip_classes(tone: ChipTone) -> String {
    let dark = tone == ChipTone::Dark;
    class_names!(
        "font-mono py-1 px-2 border rounded",
        class_map! {
            "text-xs lg:text-sm font-semibold border-gray-400 text-gray-700" => !dark,
            "whitespace-break-spaces break-normal text-xs lg:text-[13px]" => dark,
            "bg-black bg-opacity-90 font-normal border-gray-900 mx-1 text-white" => dark,
        }
    )
}

#[function_component(CodeChip)]
pub fn code_chip(props: &CodeChipProps) -> Html {
    html! {
        <span class={chip_classes(props.tone)}>{ props.text.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_chip_classes() {
        let classes = chip_classes(ChipTone::Light);
        assert!(classes.starts_with("font-mono py-1 px-2 border rounded text-xs"));
        assert!(classes.contains("border-gray-400"));
        assert!(!classes.contains("bg-black"));
    }

    #[test]
    fn test_dark_chip_classes() {
        let classes = chip_classes(ChipTone::Dark);
        assert!(classes.contains("whitespace-break-spaces"));
        assert!(classes.ends_with("mx-1 text-white"));
        assert!(!classes.contains("border-gray-400"));
    }
}
