use std::sync::Arc;
use tauri::State;

use crate::error::{AppError, Result};
use crate::onboarding;
use crate::persona::{
    format_top_personas, PersonaCategory, PersonaSummary, PersonaWheelData, SurveyAnswers,
    SurveyQuestion,
};
use crate::state::AppState;

/// Runs blocking store work off the async runtime.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Custom(format!("Background task failed: {e}")))?
}

/// Questions and answer options for the survey screen, in order.
#[tauri::command]
pub async fn get_survey_questions(state: State<'_, AppState>) -> Result<Vec<SurveyQuestion>> {
    Ok(state.table.questions.clone())
}

#[tauri::command]
pub async fn submit_survey(
    state: State<'_, AppState>,
    answers: SurveyAnswers,
) -> Result<PersonaSummary> {
    let store = Arc::clone(&state.store);
    let table = Arc::clone(&state.table);
    let wheel = blocking(move || onboarding::submit_survey(store.as_ref(), &table, &answers)).await?;
    Ok(PersonaSummary::from_wheel(wheel))
}

#[tauri::command]
pub async fn get_persona_result(state: State<'_, AppState>) -> Result<Option<PersonaWheelData>> {
    let store = Arc::clone(&state.store);
    blocking(move || onboarding::load_persona_result(store.as_ref())).await
}

#[tauri::command]
pub async fn get_persona_summary(state: State<'_, AppState>) -> Result<Option<PersonaSummary>> {
    let result = get_persona_result(state).await?;
    Ok(result.map(PersonaSummary::from_wheel))
}

/// Display string for a set of personas, e.g. "The Shepherd and The Seeker".
#[tauri::command]
pub async fn format_personas(personas: Vec<PersonaCategory>) -> String {
    format_top_personas(&personas, PersonaCategory::display_name)
}
