//! Onboarding flags and the stored survey result, kept in a [`KeyValueStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::persona::{
    calculate_persona_scores_with, PersonaCategory, PersonaWheelData, ScoringTable, SurveyAnswers,
};
use crate::store::KeyValueStore;

pub const KEY_HAS_SEEN_ONBOARDING: &str = "hasSeenOnboarding";
pub const KEY_SURVEY_ANSWERS: &str = "surveyAnswers";
pub const KEY_PERSONA_RESULT: &str = "personaResult";

/// What the webview needs to decide which screen to show first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub has_seen_onboarding: bool,
    pub survey_completed: bool,
    pub primary_persona: Option<PersonaCategory>,
}

fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Discarding unreadable '{}': {}", key, e);
            Ok(None)
        }
    }
}

pub fn has_seen_onboarding(store: &dyn KeyValueStore) -> Result<bool> {
    Ok(store.get(KEY_HAS_SEEN_ONBOARDING)?.as_deref() == Some("true"))
}

pub fn mark_onboarding_seen(store: &dyn KeyValueStore) -> Result<()> {
    store.set(KEY_HAS_SEEN_ONBOARDING, "true")
}

/// Scores the survey and stores both the answers and the result.
pub fn submit_survey(
    store: &dyn KeyValueStore,
    table: &ScoringTable,
    answers: &SurveyAnswers,
) -> Result<PersonaWheelData> {
    let wheel = calculate_persona_scores_with(table, answers);

    store.set(KEY_SURVEY_ANSWERS, &serde_json::to_string(answers)?)?;
    store.set(KEY_PERSONA_RESULT, &serde_json::to_string(&wheel)?)?;

    tracing::info!(
        answered = answers.answered_count(),
        primary = %wheel.primary_persona,
        top = wheel.top_personas.len(),
        "Survey scored"
    );
    Ok(wheel)
}

pub fn load_survey_answers(store: &dyn KeyValueStore) -> Result<Option<SurveyAnswers>> {
    load_json(store, KEY_SURVEY_ANSWERS)
}

pub fn load_persona_result(store: &dyn KeyValueStore) -> Result<Option<PersonaWheelData>> {
    load_json(store, KEY_PERSONA_RESULT)
}

pub fn onboarding_status(store: &dyn KeyValueStore) -> Result<OnboardingStatus> {
    let result = load_persona_result(store)?;
    Ok(OnboardingStatus {
        has_seen_onboarding: has_seen_onboarding(store)?,
        survey_completed: result.is_some(),
        primary_persona: result.map(|r| r.primary_persona),
    })
}

pub fn reset_onboarding(store: &dyn KeyValueStore) -> Result<()> {
    for key in [KEY_HAS_SEEN_ONBOARDING, KEY_SURVEY_ANSWERS, KEY_PERSONA_RESULT] {
        store.remove(key)?;
    }
    tracing::info!("Onboarding state cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn rooted_answers() -> SurveyAnswers {
        SurveyAnswers {
            question1: "I'm ready for deeper, more challenging study.".into(),
            question3: "Finding content that challenges me beyond basics.".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fresh_store_status() {
        let store = MemoryStore::default();
        assert_eq!(
            onboarding_status(&store).unwrap(),
            OnboardingStatus {
                has_seen_onboarding: false,
                survey_completed: false,
                primary_persona: None,
            }
        );
    }

    #[test]
    fn test_submit_then_load() {
        let store = MemoryStore::default();
        mark_onboarding_seen(&store).unwrap();
        let wheel = submit_survey(&store, ScoringTable::builtin(), &rooted_answers()).unwrap();

        assert_eq!(wheel.primary_persona, PersonaCategory::Rooted);
        assert_eq!(load_persona_result(&store).unwrap(), Some(wheel));
        assert_eq!(load_survey_answers(&store).unwrap(), Some(rooted_answers()));

        let status = onboarding_status(&store).unwrap();
        assert!(status.has_seen_onboarding);
        assert!(status.survey_completed);
        assert_eq!(status.primary_persona, Some(PersonaCategory::Rooted));
    }

    #[test]
    fn test_unreadable_result_reads_as_missing() {
        let store = MemoryStore::default();
        store.set(KEY_PERSONA_RESULT, "{\"scores\": 12}").unwrap();
        assert_eq!(load_persona_result(&store).unwrap(), None);
        assert!(!onboarding_status(&store).unwrap().survey_completed);
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = MemoryStore::default();
        mark_onboarding_seen(&store).unwrap();
        submit_survey(&store, ScoringTable::builtin(), &rooted_answers()).unwrap();

        reset_onboarding(&store).unwrap();
        assert!(!has_seen_onboarding(&store).unwrap());
        assert_eq!(load_survey_answers(&store).unwrap(), None);
        assert_eq!(load_persona_result(&store).unwrap(), None);
    }
}
