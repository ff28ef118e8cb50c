use serde::Serialize;

use super::{format_top_personas, PersonaCategory, PersonaWheelData};

/// Result-screen copy for one persona.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    pub category: PersonaCategory,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

impl PersonaCategory {
    pub fn profile(self) -> PersonaProfile {
        let (tagline, description) = match self {
            PersonaCategory::Shepherd => (
                "You grow by caring for others.",
                "Your faith shows up in how you look after the people around you. \
                 Scrolls will lean toward passages on community, encouragement, \
                 and leading with a servant's heart.",
            ),
            PersonaCategory::Seeker => (
                "You grow by asking honest questions.",
                "You want to understand, not just accept. Scrolls will walk through \
                 the big questions one at a time, with context and room to wonder.",
            ),
            PersonaCategory::Vessel => (
                "You grow by drawing near.",
                "Prayer, worship, and stillness are where you meet God. Scrolls will \
                 favor psalms, prayers, and short reflections you can sit with.",
            ),
            PersonaCategory::Builder => (
                "You grow by putting faith to work.",
                "You like faith you can practice. Scrolls will pair each reading with \
                 a small step you can take today and help you keep the habit going.",
            ),
            PersonaCategory::Rooted => (
                "You grow by going deeper.",
                "You are ready for more than the basics. Scrolls will bring longer \
                 passages, historical background, and cross references to study.",
            ),
        };
        PersonaProfile {
            category: self,
            name: self.display_name(),
            tagline,
            description,
        }
    }
}

/// Everything the result screen needs in one payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSummary {
    /// e.g. "The Shepherd and The Seeker"
    pub headline: String,
    pub primary: PersonaProfile,
    pub top: Vec<PersonaProfile>,
    pub wheel: PersonaWheelData,
}

impl PersonaSummary {
    pub fn from_wheel(wheel: PersonaWheelData) -> Self {
        Self {
            headline: format_top_personas(&wheel.top_personas, PersonaCategory::display_name),
            primary: wheel.primary_persona.profile(),
            top: wheel.top_personas.iter().map(|c| c.profile()).collect(),
            wheel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{calculate_persona_scores, SurveyAnswers};

    #[test]
    fn test_profile_name_matches_display_name() {
        for category in PersonaCategory::ALL {
            let profile = category.profile();
            assert_eq!(profile.category, category);
            assert_eq!(profile.name, category.display_name());
            assert!(!profile.tagline.is_empty());
        }
    }

    #[test]
    fn test_summary_for_two_way_tie() {
        let answers = SurveyAnswers {
            question8: "Acts".into(),
            ..Default::default()
        };
        let summary = PersonaSummary::from_wheel(calculate_persona_scores(&answers));
        assert_eq!(summary.headline, "The Shepherd and The Builder");
        assert_eq!(summary.primary.category, PersonaCategory::Shepherd);
        assert_eq!(summary.top.len(), 2);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = PersonaSummary::from_wheel(calculate_persona_scores(&SurveyAnswers::default()));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["headline"], "The Shepherd");
        assert_eq!(json["wheel"]["primaryPersona"], "shepherd");
        assert_eq!(json["wheel"]["topPersonas"][0], "shepherd");
    }
}
