//! Persona assignment from the onboarding survey.
//!
//! Everything in here is pure: answers go in, a ranked persona wheel comes
//! out. Persistence and IPC live in `onboarding` and `commands`.

mod answers;
mod profile;
mod scoring;
mod table;

pub use answers::SurveyAnswers;
pub use profile::{PersonaProfile, PersonaSummary};
pub use scoring::{
    calculate_persona_scores, calculate_persona_scores_with, determine_top_personas,
    format_top_personas, PersonaScore, PersonaWheelData,
};
pub use table::{AnswerOption, PersonaPoints, ScoringTable, ScoringTableError, SurveyQuestion};

use serde::{Deserialize, Serialize};

/// One of the five spiritual-engagement archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaCategory {
    Shepherd,
    Seeker,
    Vessel,
    Builder,
    Rooted,
}

impl PersonaCategory {
    pub const COUNT: usize = 5;

    /// Declaration order. Ties keep this order after ranking.
    pub const ALL: [PersonaCategory; Self::COUNT] = [
        PersonaCategory::Shepherd,
        PersonaCategory::Seeker,
        PersonaCategory::Vessel,
        PersonaCategory::Builder,
        PersonaCategory::Rooted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonaCategory::Shepherd => "shepherd",
            PersonaCategory::Seeker => "seeker",
            PersonaCategory::Vessel => "vessel",
            PersonaCategory::Builder => "builder",
            PersonaCategory::Rooted => "rooted",
        }
    }

    /// Name shown on the result screen, e.g. "The Shepherd".
    pub fn display_name(self) -> &'static str {
        match self {
            PersonaCategory::Shepherd => "The Shepherd",
            PersonaCategory::Seeker => "The Seeker",
            PersonaCategory::Vessel => "The Vessel",
            PersonaCategory::Builder => "The Builder",
            PersonaCategory::Rooted => "The Rooted",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PersonaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&PersonaCategory::Rooted).unwrap();
        assert_eq!(json, "\"rooted\"");
        let back: PersonaCategory = serde_json::from_str("\"shepherd\"").unwrap();
        assert_eq!(back, PersonaCategory::Shepherd);
    }

    #[test]
    fn test_all_matches_index_order() {
        for (i, category) in PersonaCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
