use serde::{Deserialize, Serialize};

pub const QUESTION_IDS: [&str; 10] = [
    "question1",
    "question2",
    "question3",
    "question4",
    "question5",
    "question6",
    "question7",
    "question8",
    "question9",
    "question10",
];

/// Raw survey responses as the webview sends them. An empty string means
/// the question was skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub question1: String,
    pub question2: String,
    pub question3: String,
    pub question4: String,
    pub question5: String,
    pub question6: String,
    pub question7: String,
    pub question8: String,
    pub question9: String,
    pub question10: String,
}

impl SurveyAnswers {
    fn fields(&self) -> [&String; 10] {
        [
            &self.question1,
            &self.question2,
            &self.question3,
            &self.question4,
            &self.question5,
            &self.question6,
            &self.question7,
            &self.question8,
            &self.question9,
            &self.question10,
        ]
    }

    /// `(question id, answer)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        QUESTION_IDS
            .into_iter()
            .zip(self.fields())
            .map(|(id, answer)| (id, answer.as_str()))
    }

    /// Returns false if `question_id` isn't one of the ten survey questions.
    pub fn set(&mut self, question_id: &str, answer: impl Into<String>) -> bool {
        let slot = match question_id {
            "question1" => &mut self.question1,
            "question2" => &mut self.question2,
            "question3" => &mut self.question3,
            "question4" => &mut self.question4,
            "question5" => &mut self.question5,
            "question6" => &mut self.question6,
            "question7" => &mut self.question7,
            "question8" => &mut self.question8,
            "question9" => &mut self.question9,
            "question10" => &mut self.question10,
            _ => return false,
        };
        *slot = answer.into();
        true
    }

    pub fn answered_count(&self) -> usize {
        self.fields().iter().filter(|a| !a.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let answers: SurveyAnswers =
            serde_json::from_str(r#"{"question3": "Worship and music."}"#).unwrap();
        assert_eq!(answers.question3, "Worship and music.");
        assert_eq!(answers.question1, "");
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn test_set_by_id() {
        let mut answers = SurveyAnswers::default();
        assert!(answers.set("question10", "Practical and hands-on."));
        assert!(!answers.set("question11", "anything"));
        assert_eq!(answers.question10, "Practical and hands-on.");
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn test_iter_follows_question_order() {
        let ids: Vec<_> = SurveyAnswers::default().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, QUESTION_IDS);
    }
}
