use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::answers::QUESTION_IDS;
use super::PersonaCategory;
use super::PersonaCategory::{Builder, Rooted, Seeker, Shepherd, Vessel};

pub const ANSWERS_PER_QUESTION: usize = 5;
pub const MAX_POINTS: u32 = 4;

/// Points a single answer allocates to each persona. Zero means no contribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaPoints {
    #[serde(skip_serializing_if = "is_zero")]
    pub shepherd: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub seeker: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub vessel: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub builder: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub rooted: u32,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

impl PersonaPoints {
    pub fn get(&self, category: PersonaCategory) -> u32 {
        match category {
            Shepherd => self.shepherd,
            Seeker => self.seeker,
            Vessel => self.vessel,
            Builder => self.builder,
            Rooted => self.rooted,
        }
    }

    fn slot(&mut self, category: PersonaCategory) -> &mut u32 {
        match category {
            Shepherd => &mut self.shepherd,
            Seeker => &mut self.seeker,
            Vessel => &mut self.vessel,
            Builder => &mut self.builder,
            Rooted => &mut self.rooted,
        }
    }

    fn from_pairs(pairs: &[(PersonaCategory, u32)]) -> Self {
        let mut points = Self::default();
        for &(category, value) in pairs {
            *points.slot(category) += value;
        }
        points
    }

    /// Categories with a non-zero allocation, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PersonaCategory, u32)> + '_ {
        PersonaCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|&(_, v)| v > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub points: PersonaPoints,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub id: String,
    pub prompt: String,
    pub answers: Vec<AnswerOption>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringTableError {
    #[error("invalid scoring table JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected {expected} questions, found {found}")]
    QuestionCount { expected: usize, found: usize },

    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("question '{question}' has {found} answers, expected {expected}")]
    AnswerCount {
        question: String,
        expected: usize,
        found: usize,
    },

    #[error("question '{question}' lists answer '{answer}' twice")]
    DuplicateAnswer { question: String, answer: String },

    #[error("answer '{answer}' to '{question}' allocates no points")]
    EmptyAllocation { question: String, answer: String },

    #[error("answer '{answer}' to '{question}' gives {points} points to {category}, expected 1-4")]
    PointsOutOfRange {
        question: String,
        answer: String,
        category: PersonaCategory,
        points: u32,
    },
}

/// Survey answer text to persona points, per question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub questions: Vec<SurveyQuestion>,
}

impl ScoringTable {
    /// The table shipped with the app.
    pub fn builtin() -> &'static ScoringTable {
        static TABLE: OnceLock<ScoringTable> = OnceLock::new();
        TABLE.get_or_init(|| ScoringTable {
            questions: BUILTIN
                .iter()
                .map(|q| SurveyQuestion {
                    id: q.id.to_string(),
                    prompt: q.prompt.to_string(),
                    answers: q
                        .answers
                        .iter()
                        .map(|(text, pairs)| AnswerOption {
                            text: text.to_string(),
                            points: PersonaPoints::from_pairs(pairs),
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    /// Parses and validates a variant table.
    pub fn from_json(json: &str) -> Result<Self, ScoringTableError> {
        let table: ScoringTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn question(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// `None` for an unknown question, an empty answer, or answer text the
    /// question doesn't offer.
    pub fn points_for(&self, question_id: &str, answer: &str) -> Option<&PersonaPoints> {
        if answer.is_empty() {
            return None;
        }
        self.question(question_id)?
            .answers
            .iter()
            .find(|a| a.text == answer)
            .map(|a| &a.points)
    }

    pub fn validate(&self) -> Result<(), ScoringTableError> {
        if self.questions.len() != QUESTION_IDS.len() {
            return Err(ScoringTableError::QuestionCount {
                expected: QUESTION_IDS.len(),
                found: self.questions.len(),
            });
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !QUESTION_IDS.contains(&question.id.as_str()) {
                return Err(ScoringTableError::UnknownQuestion(question.id.clone()));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ScoringTableError::DuplicateQuestion(question.id.clone()));
            }
            if question.answers.len() != ANSWERS_PER_QUESTION {
                return Err(ScoringTableError::AnswerCount {
                    question: question.id.clone(),
                    expected: ANSWERS_PER_QUESTION,
                    found: question.answers.len(),
                });
            }

            let mut texts = HashSet::new();
            for answer in &question.answers {
                if !texts.insert(answer.text.as_str()) {
                    return Err(ScoringTableError::DuplicateAnswer {
                        question: question.id.clone(),
                        answer: answer.text.clone(),
                    });
                }
                if answer.points.is_empty() {
                    return Err(ScoringTableError::EmptyAllocation {
                        question: question.id.clone(),
                        answer: answer.text.clone(),
                    });
                }
                if let Some((category, points)) =
                    answer.points.iter().find(|&(_, v)| v > MAX_POINTS)
                {
                    return Err(ScoringTableError::PointsOutOfRange {
                        question: question.id.clone(),
                        answer: answer.text.clone(),
                        category,
                        points,
                    });
                }
            }
        }
        Ok(())
    }
}

struct BuiltinQuestion {
    id: &'static str,
    prompt: &'static str,
    answers: [(&'static str, &'static [(PersonaCategory, u32)]); ANSWERS_PER_QUESTION],
}

const BUILTIN: [BuiltinQuestion; 10] = [
    BuiltinQuestion {
        id: "question1",
        prompt: "Where are you in your faith journey right now?",
        answers: [
            ("I'm just starting to explore faith.", &[(Seeker, 3)]),
            ("I'm returning after some time away.", &[(Seeker, 2), (Vessel, 1)]),
            ("I'm growing steadily and want more consistency.", &[(Builder, 2), (Rooted, 1)]),
            ("I'm ready for deeper, more challenging study.", &[(Rooted, 3)]),
            ("I'm leading or mentoring others in their faith.", &[(Shepherd, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question2",
        prompt: "What kind of content helps you grow the most?",
        answers: [
            ("Simple, encouraging daily reflections.", &[(Vessel, 2), (Seeker, 1)]),
            ("In-depth biblical teaching and analysis.", &[(Rooted, 2), (Seeker, 1)]),
            ("Practical guidance I can apply to everyday life.", &[(Builder, 3)]),
            ("Stories of faith and community.", &[(Shepherd, 2), (Vessel, 1)]),
            ("Honest answers to the questions I wrestle with.", &[(Seeker, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question3",
        prompt: "What is your biggest challenge in your spiritual life?",
        answers: [
            ("Staying consistent with reading and prayer.", &[(Builder, 2), (Vessel, 1)]),
            ("Understanding what the Bible actually means.", &[(Seeker, 3)]),
            ("Finding content that challenges me beyond basics.", &[(Rooted, 4)]),
            ("Feeling close to God from day to day.", &[(Vessel, 3)]),
            ("Knowing how to support others in their faith.", &[(Shepherd, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question4",
        prompt: "How do you most like to spend time with God?",
        answers: [
            ("Quiet prayer and reflection.", &[(Vessel, 3)]),
            ("Studying scripture verse by verse.", &[(Rooted, 3)]),
            ("Serving others and putting faith into action.", &[(Builder, 3), (Shepherd, 1)]),
            ("Worship and music.", &[(Vessel, 2), (Shepherd, 1)]),
            ("Asking questions and exploring new ideas.", &[(Seeker, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question5",
        prompt: "How much time can you give to reading each day?",
        answers: [
            ("Less than 5 minutes.", &[(Seeker, 1), (Builder, 1)]),
            ("5 to 10 minutes.", &[(Builder, 2)]),
            ("10 to 20 minutes.", &[(Vessel, 1), (Builder, 1)]),
            ("20 to 30 minutes.", &[(Rooted, 2)]),
            ("More than 30 minutes.", &[(Rooted, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question6",
        prompt: "Which best describes how you walk in faith with others?",
        answers: [
            ("I love encouraging and caring for others.", &[(Shepherd, 4)]),
            ("I prefer to grow privately for now.", &[(Seeker, 2), (Vessel, 1)]),
            ("I like to organize and get things done together.", &[(Builder, 3), (Shepherd, 1)]),
            ("I share what I'm learning in a small group.", &[(Shepherd, 2), (Rooted, 1)]),
            ("I lean on others for support right now.", &[(Vessel, 2), (Seeker, 1)]),
        ],
    },
    BuiltinQuestion {
        id: "question7",
        prompt: "What do you hope to gain from your daily Scrolls?",
        answers: [
            ("A daily habit I can actually keep.", &[(Builder, 3)]),
            ("Answers to questions I've been carrying.", &[(Seeker, 3)]),
            ("Deeper knowledge of scripture and its history.", &[(Rooted, 3)]),
            ("Peace, comfort, and closeness with God.", &[(Vessel, 3)]),
            ("Tools to help me lead and care for others.", &[(Shepherd, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question8",
        prompt: "Which book of the Bible draws you in the most?",
        answers: [
            ("Psalms", &[(Vessel, 3)]),
            ("Proverbs", &[(Builder, 2), (Rooted, 1)]),
            ("Romans", &[(Rooted, 3)]),
            ("John", &[(Seeker, 2), (Shepherd, 1)]),
            ("Acts", &[(Shepherd, 2), (Builder, 2)]),
        ],
    },
    BuiltinQuestion {
        id: "question9",
        prompt: "When you face a hard decision, you usually...",
        answers: [
            ("Pray and wait for peace.", &[(Vessel, 3)]),
            ("Search scripture for guidance.", &[(Rooted, 3)]),
            ("Talk it through with people I trust.", &[(Shepherd, 2), (Seeker, 1)]),
            ("Make a plan and take the next step.", &[(Builder, 3)]),
            ("Question everything until it makes sense.", &[(Seeker, 3)]),
        ],
    },
    BuiltinQuestion {
        id: "question10",
        prompt: "How would a close friend describe your faith?",
        answers: [
            ("Curious and searching.", &[(Seeker, 3)]),
            ("Steady and deeply grounded.", &[(Rooted, 3)]),
            ("Warm and caring toward others.", &[(Shepherd, 3)]),
            ("Passionate and heartfelt.", &[(Vessel, 3)]),
            ("Practical and hands-on.", &[(Builder, 3)]),
        ],
    },
];
