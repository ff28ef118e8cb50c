use serde::{Deserialize, Serialize};

use super::{PersonaCategory, ScoringTable, SurveyAnswers};

/// Absolute width of the near-tie band below the top score.
const TIE_BAND_POINTS: f64 = 2.0;
/// Relative width of the near-tie band, as a fraction of the top score.
const TIE_BAND_RATIO: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaScore {
    pub category: PersonaCategory,
    pub score: u32,
    /// 0..=100, rounded independently per category.
    pub percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaWheelData {
    /// Highest score first.
    pub scores: Vec<PersonaScore>,
    pub top_personas: Vec<PersonaCategory>,
    pub primary_persona: PersonaCategory,
}

/// Scores `answers` against the bundled table.
pub fn calculate_persona_scores(answers: &SurveyAnswers) -> PersonaWheelData {
    calculate_persona_scores_with(ScoringTable::builtin(), answers)
}

/// Scores `answers` against `table`. Skipped questions and answer text the
/// table doesn't know contribute nothing.
pub fn calculate_persona_scores_with(
    table: &ScoringTable,
    answers: &SurveyAnswers,
) -> PersonaWheelData {
    let mut totals = [0u32; PersonaCategory::COUNT];

    for (question_id, answer) in answers.iter() {
        let Some(points) = table.points_for(question_id, answer) else {
            continue;
        };
        for (category, value) in points.iter() {
            totals[category.index()] += value;
        }
    }

    let total: u32 = totals.iter().sum();

    let mut scores: Vec<PersonaScore> = PersonaCategory::ALL
        .into_iter()
        .map(|category| {
            let score = totals[category.index()];
            PersonaScore {
                category,
                score,
                percentage: percentage_of(score, total),
            }
        })
        .collect();

    // sort_by is stable: equal scores keep declaration order
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    let top_personas = determine_top_personas(&scores);
    let primary_persona = scores[0].category;

    PersonaWheelData {
        scores,
        top_personas,
        primary_persona,
    }
}

/// round(100 * score / total) with halves rounding up; 0 when total is 0.
fn percentage_of(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (score, total) = (u64::from(score), u64::from(total));
    ((200 * score + total) / (2 * total)) as u32
}

/// Picks the persona(s) to present as the result from scores sorted
/// highest first.
///
/// Anything within `max(top - 2, top * 0.95)` of the top score counts as a
/// near-tie. One or two near-ties are returned as-is. With three or more, only
/// entries exactly matching the first or second score are kept, which can drop
/// an entry that was inside the band.
pub fn determine_top_personas(sorted: &[PersonaScore]) -> Vec<PersonaCategory> {
    let Some(first) = sorted.first() else {
        return Vec::new();
    };

    let top = first.score;
    if top == 0 {
        return vec![first.category];
    }

    let top_f = f64::from(top);
    let threshold = (top_f - TIE_BAND_POINTS).max(top_f * TIE_BAND_RATIO);

    let top_tiers: Vec<PersonaCategory> = sorted
        .iter()
        .filter(|s| f64::from(s.score) >= threshold)
        .map(|s| s.category)
        .collect();

    if top_tiers.len() <= 2 {
        return top_tiers;
    }

    let second = sorted[1].score;
    sorted
        .iter()
        .filter(|s| s.score == top || s.score == second)
        .map(|s| s.category)
        .collect()
}

/// Joins display names: "A", "A and B", "A, B, and C".
pub fn format_top_personas<F, S>(top: &[PersonaCategory], name_of: F) -> String
where
    F: Fn(PersonaCategory) -> S,
    S: AsRef<str>,
{
    let names: Vec<S> = top.iter().map(|&c| name_of(c)).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [a, b] => format!("{} and {}", a.as_ref(), b.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|n| n.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
