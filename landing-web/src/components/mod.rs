pub(crate) mod code_chip;
pub(crate) mod hero;
pub(crate) mod instruction_panel;
pub(crate) mod instruction_step;
pub(crate) mod launch_button;

// Re-export components for convenience
pub use code_chip::{ChipTone, CodeChip};
pub use hero::Hero;
pub use instruction_panel::InstructionPanel;
pub use instruction_step::InstructionStep;
pub use launch_button::LaunchButton;
