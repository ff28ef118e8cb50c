use std::sync::Arc;
use tauri::State;

use super::survey::blocking;
use crate::error::Result;
use crate::onboarding::{self, OnboardingStatus};
use crate::state::AppState;

#[tauri::command]
pub async fn get_onboarding_status(state: State<'_, AppState>) -> Result<OnboardingStatus> {
    let store = Arc::clone(&state.store);
    blocking(move || onboarding::onboarding_status(store.as_ref())).await
}

#[tauri::command]
pub async fn complete_onboarding(state: State<'_, AppState>) -> Result<()> {
    let store = Arc::clone(&state.store);
    blocking(move || onboarding::mark_onboarding_seen(store.as_ref())).await
}

#[tauri::command]
pub async fn reset_onboarding(state: State<'_, AppState>) -> Result<()> {
    let store = Arc::clone(&state.store);
    blocking(move || onboarding::reset_onboarding(store.as_ref())).await
}
