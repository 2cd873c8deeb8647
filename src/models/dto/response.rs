use serde::Serialize;

use crate::models::domain::Question;

#[derive(Debug, Serialize)]
pub struct QuestionBatchResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerResponse {
    pub is_correct: bool,
}

#[derive(Debug, Serialize)]
pub struct RecordProgressResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{CorrectAnswer, QuestionKind};

    #[test]
    fn check_answer_response_uses_camel_case() {
        let json = serde_json::to_value(CheckAnswerResponse { is_correct: true }).unwrap();
        assert_eq!(json["isCorrect"], true);
    }

    #[test]
    fn question_batch_response_wraps_questions_array() {
        let response = QuestionBatchResponse {
            questions: vec![Question {
                text: "Is water wet?".to_string(),
                kind: QuestionKind::TrueFalse,
                options: None,
                correct_answer: CorrectAnswer::Text("true".to_string()),
                hint: None,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["questions"].is_array());
        assert_eq!(json["questions"][0]["type"], "true-false");
    }
}
