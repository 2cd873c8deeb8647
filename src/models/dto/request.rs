use serde::{Deserialize, Serialize};
use validator::Validate;

/// Requested question kind, or `mixed` to let the model pick per question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionTypeFilter {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Mixed,
}

impl QuestionTypeFilter {
    /// Human-readable form for the prompt, separators normalized to spaces.
    pub fn prompt_noun(self) -> &'static str {
        match self {
            QuestionTypeFilter::MultipleChoice => "multiple choice",
            QuestionTypeFilter::TrueFalse => "true false",
            QuestionTypeFilter::ShortAnswer => "short answer",
            QuestionTypeFilter::Mixed => "mixed",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    pub input: String,

    #[serde(default)]
    pub file_content: Option<String>,

    pub question_type: QuestionTypeFilter,

    #[validate(range(min = 1, message = "questionCount must be a positive integer"))]
    pub question_count: u32,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerRequest {
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordProgressRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1))]
    pub question_id: String,

    pub correct: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    pub user_id: Option<String>,
}
