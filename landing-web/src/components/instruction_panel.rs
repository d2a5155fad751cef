use shared::config::{InstructionsConfig, LaunchConfig};
use yew::{Html, Properties, function_component, html};

use super::{ChipTone, CodeChip, InstructionStep, LaunchButton};

#[derive(Properties, PartialEq)]
pub struct InstructionPanelProps {
    pub instructions: InstructionsConfig,
    pub launch: LaunchConfig,
}

/// Two-step guide for enabling notebooks, followed by the launch link.
#[function_component(InstructionPanel)]
pub fn instruction_panel(props: &InstructionPanelProps) -> Html {
    let instructions = &props.instructions;

    html! {
        <div class="flex w-full xl:w-[1000px] max-w-[1000px] bg-white py-10 bg-opacity-30 border border-white rounded justify-start items-center flex-col px-3 md:px-6 xl:px-12 gap-2 lg:gap-4">
            <h3 class="px-2 lg:px-0 text-xl md:text-3xl text-left font-semibold text-gray-900 w-full flex pb-3">
                { instructions.heading.clone() }
            </h3>
            <InstructionStep full_width=true relaxed=true>
                {"To use the built in notebooks in Inference, you need to enable the notebooks feature via the environment variable "}
                <CodeChip text={instructions.feature_env_var.clone()} />
                {" ."}
            </InstructionStep>
            <InstructionStep>
                {"To do this, use the "}
                <CodeChip text={instructions.cli_flag.clone()} tone={ChipTone::Dark} />
                {" flag with the inference-cli: "}
                <CodeChip text={instructions.cli_command.clone()} tone={ChipTone::Dark} />
                {". Or, update your docker run command with the argument "}
                <CodeChip text={instructions.docker_argument.clone()} tone={ChipTone::Dark} />
                {"."}
            </InstructionStep>
            <LaunchButton launch={props.launch.clone()} />
        </div>
    }
}
