mod menu;
mod prompt;
mod report;
mod ui_text;

pub use menu::MenuChoice;
pub use prompt::ask_trial_count;
pub use report::{
    compute_sample_space, format_count, simulate_monte_carlo, write_simulation,
    write_theoretical,
};
pub use ui_text::UI_TEXT;
