mod commands;
mod error;
pub mod logging;
pub mod onboarding;
pub mod persona;
mod state;
pub mod store;
pub mod util;

pub use error::{AppError, Result};

pub fn run() {
    logging::init();

    tauri::Builder::default()
        .manage(state::AppState::load())
        .invoke_handler(tauri::generate_handler![
            commands::config::load_config,
            commands::config::save_config,
            commands::survey::get_survey_questions,
            commands::survey::submit_survey,
            commands::survey::get_persona_result,
            commands::survey::get_persona_summary,
            commands::survey::format_personas,
            commands::onboarding::get_onboarding_status,
            commands::onboarding::complete_onboarding,
            commands::onboarding::reset_onboarding,
        ])
        .run(tauri::generate_context!())
        .expect("failed to run Scrolls");
}
