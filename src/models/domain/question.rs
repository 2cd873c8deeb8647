use serde::{Deserialize, Serialize};

/// The closed set of question kinds. Anything else fails schema validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

/// Either the answer text itself (true-false, short-answer) or an index into
/// `options` (multiple-choice). The wire format is an untagged union.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Index(u64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,

    #[serde(rename = "type")]
    pub kind: QuestionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(rename = "correctAnswer")]
    pub correct_answer: CorrectAnswer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
