use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{
    constants::{prompts, MAX_QUESTION_COUNT, RAW_RESPONSE_EXCERPT_LEN},
    errors::{AppError, AppResult},
    models::{
        domain::{Question, QuestionKind},
        dto::request::GenerateQuestionsRequest,
    },
    services::model_service::GenerativeModel,
};

static FENCE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```(?:json)?\s*").expect("fence-open pattern is valid"));
static FENCE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```\s*$").expect("fence-close pattern is valid"));

/// Generates a validated question batch from free text via one model call.
pub struct QuestionService {
    model: Arc<dyn GenerativeModel>,
}

impl QuestionService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, request: GenerateQuestionsRequest) -> AppResult<Vec<Question>> {
        if request.question_count > MAX_QUESTION_COUNT {
            return Err(AppError::CountTooLarge(request.question_count));
        }

        let prompt = prompts::question_generation_prompt(
            request.question_count,
            request.question_type,
            &request.input,
            request.file_content.as_deref().unwrap_or(""),
        );

        let raw = self.model.generate_text(&prompt).await?;
        if raw.is_empty() {
            return Err(AppError::EmptyModelResponse);
        }

        let cleaned = clean_model_response(&raw);
        let elements = parse_question_array(&cleaned, &raw)?;
        let coerced = coerce_questions(elements);
        let questions = validate_batch(coerced, &raw)?;

        log::info!(
            "Generated {} questions ({} requested)",
            questions.len(),
            request.question_count
        );

        Ok(questions)
    }
}

/// Strips conversational/code-fence wrapping so the remainder is a candidate
/// JSON array literal. Purely textual; idempotent on already-clean input.
fn clean_model_response(text: &str) -> String {
    let trimmed = text.trim();
    let without_open = FENCE_OPEN.replace(trimmed, "");
    let without_fences = FENCE_CLOSE.replace(&without_open, "");
    let candidate = without_fences.trim();

    match (candidate.find('['), candidate.rfind(']')) {
        (Some(start), Some(end)) if start < end => candidate[start..=end].to_string(),
        _ => candidate.to_string(),
    }
}

fn raw_excerpt(raw: &str) -> String {
    let excerpt: String = raw.chars().take(RAW_RESPONSE_EXCERPT_LEN).collect();
    format!("{}...", excerpt)
}

/// Parses the cleaned text and checks it is an array whose every element has
/// a non-empty `question` and a `type`. Anything else is a parse failure
/// carrying an excerpt of the unnormalized model output.
fn parse_question_array(cleaned: &str, raw: &str) -> AppResult<Vec<Value>> {
    let parsed: Value = serde_json::from_str(cleaned).map_err(|e| AppError::ParseFailure {
        details: e.to_string(),
        raw_response: raw_excerpt(raw),
    })?;

    let elements = match parsed {
        Value::Array(elements) => elements,
        _ => {
            return Err(AppError::ParseFailure {
                details: "Response is not an array".to_string(),
                raw_response: raw_excerpt(raw),
            })
        }
    };

    for (index, element) in elements.iter().enumerate() {
        let has_question = element
            .get("question")
            .and_then(Value::as_str)
            .is_some_and(|text| !text.is_empty());
        let has_type = element
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| !kind.is_empty());

        if !has_question || !has_type {
            return Err(AppError::ParseFailure {
                details: format!("Question at index {} is missing required fields", index),
                raw_response: raw_excerpt(raw),
            });
        }
    }

    Ok(elements)
}

/// Coerces each element to the canonical shape: `type` defaults to
/// short-answer, `options` is kept (defaulting to `[]`) only for
/// multiple-choice, `correctAnswer` and `hint` pass through unchanged.
fn coerce_questions(elements: Vec<Value>) -> Vec<Value> {
    elements
        .into_iter()
        .map(|element| {
            let mut question = serde_json::Map::new();

            if let Some(text) = element.get("question") {
                question.insert("question".to_string(), text.clone());
            }

            let kind = element
                .get("type")
                .cloned()
                .filter(|kind| !kind.is_null())
                .unwrap_or_else(|| Value::String("short-answer".to_string()));
            let is_multiple_choice = kind.as_str() == Some("multiple-choice");
            question.insert("type".to_string(), kind);

            if is_multiple_choice {
                let options = element
                    .get("options")
                    .cloned()
                    .filter(|options| !options.is_null())
                    .unwrap_or_else(|| Value::Array(Vec::new()));
                question.insert("options".to_string(), options);
            }

            if let Some(answer) = element.get("correctAnswer") {
                if !answer.is_null() {
                    question.insert("correctAnswer".to_string(), answer.clone());
                }
            }

            if let Some(hint) = element.get("hint") {
                if !hint.is_null() {
                    question.insert("hint".to_string(), hint.clone());
                }
            }

            Value::Object(question)
        })
        .collect()
}

/// Deserializes the coerced batch into the closed domain types and enforces
/// that multiple-choice questions carry at least one option.
fn validate_batch(elements: Vec<Value>, raw: &str) -> AppResult<Vec<Question>> {
    let questions: Vec<Question> =
        serde_json::from_value(Value::Array(elements)).map_err(|e| AppError::SchemaInvalid {
            details: e.to_string(),
            raw_response: raw_excerpt(raw),
        })?;

    for (index, question) in questions.iter().enumerate() {
        if question.kind == QuestionKind::MultipleChoice
            && question.options.as_ref().map_or(true, |o| o.is_empty())
        {
            return Err(AppError::SchemaInvalid {
                details: format!(
                    "Question at index {} is multiple-choice but has no options",
                    index
                ),
                raw_response: raw_excerpt(raw),
            });
        }
    }

    Ok(questions)
}
