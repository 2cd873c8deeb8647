#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{CorrectAnswer, Question, QuestionKind};

    /// A well-formed single-question model response.
    pub const VALID_BATCH_RESPONSE: &str = r#"[
        {
            "question": "Paris is the capital of France.",
            "type": "true-false",
            "correctAnswer": "true",
            "hint": "Think of the Eiffel Tower."
        }
    ]"#;

    /// The same batch wrapped the way chatty models like to wrap it.
    pub const FENCED_BATCH_RESPONSE: &str = "```json\n[\n    {\n        \"question\": \"Paris is the capital of France.\",\n        \"type\": \"true-false\",\n        \"correctAnswer\": \"true\",\n        \"hint\": \"Think of the Eiffel Tower.\"\n    }\n]\n```";

    pub fn true_false_question() -> Question {
        Question {
            text: "Paris is the capital of France.".to_string(),
            kind: QuestionKind::TrueFalse,
            options: None,
            correct_answer: CorrectAnswer::Text("true".to_string()),
            hint: Some("Think of the Eiffel Tower.".to_string()),
        }
    }

    pub fn multiple_choice_question() -> Question {
        Question {
            text: "Which planet is closest to the sun?".to_string(),
            kind: QuestionKind::MultipleChoice,
            options: Some(vec![
                "Mercury".to_string(),
                "Venus".to_string(),
                "Earth".to_string(),
                "Mars".to_string(),
            ]),
            correct_answer: CorrectAnswer::Index(0),
            hint: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::{Question, QuestionKind};

    #[test]
    fn valid_batch_response_parses_into_one_question() {
        let questions: Vec<Question> = serde_json::from_str(VALID_BATCH_RESPONSE).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0], true_false_question());
    }

    #[test]
    fn fenced_batch_response_contains_the_valid_batch() {
        assert!(FENCED_BATCH_RESPONSE.starts_with("```json"));
        assert!(FENCED_BATCH_RESPONSE.ends_with("```"));
    }

    #[test]
    fn multiple_choice_fixture_has_options() {
        let question = multiple_choice_question();
        assert_eq!(question.kind, QuestionKind::MultipleChoice);
        assert_eq!(question.options.as_ref().map(Vec::len), Some(4));
    }
}
