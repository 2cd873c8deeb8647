use crate::models::dto::request::QuestionTypeFilter;

/// Type fragment used when the client asks for a mix of question kinds.
pub const MIXED_TYPE_INSTRUCTION: &str =
    "The questions can be multiple-choice, true-false, or short-answer.";

/// The object shape the model must emit for every question. Kept verbatim in
/// the prompt so the model has no room to improvise field names.
pub const QUESTION_OBJECT_SHAPE: &str = r#"{
  "question": "the question text",
  "type": "multiple-choice" OR "true-false" OR "short-answer",
  "options": ["option1", "option2", ...] (only for multiple-choice),
  "correctAnswer": string or index of the correct option,
  "hint": "optional hint"
}"#;

/// Instruction fragment pinning (or mixing) the question kind.
pub fn type_instruction(filter: QuestionTypeFilter) -> String {
    match filter {
        QuestionTypeFilter::Mixed => MIXED_TYPE_INSTRUCTION.to_string(),
        other => format!("The questions should be {}.", other.prompt_noun()),
    }
}

/// Full generation instruction: strict JSON array output, exact count, kind
/// constraint, then the source content.
pub fn question_generation_prompt(
    question_count: u32,
    filter: QuestionTypeFilter,
    input: &str,
    file_content: &str,
) -> String {
    format!(
        "You are a JSON generator for educational questions.\n\
         Generate exactly {question_count} questions in valid JSON format.\n\
         {type_prompt}\n\n\
         Respond ONLY with a JSON array of objects, nothing else. Each object must have:\n\
         {shape}\n\n\
         Content to generate questions from:\n\
         {input}\n\
         {file_content}",
        type_prompt = type_instruction(filter),
        shape = QUESTION_OBJECT_SHAPE,
    )
}

/// Grading instruction: judge semantic equivalence, answer with one bare token.
pub fn answer_grading_prompt(correct_answer: &str, user_answer: &str) -> String {
    format!(
        "You are a quiz grader. Compare these two answers and respond with true \
         if they convey the same basic meaning (even with variations in style, \
         phrasing, or use of synonyms) or false if the meaning differs significantly.\n\n\
         Correct answer: \"{correct_answer}\"\n\
         User answer: \"{user_answer}\"\n\n\
         Respond ONLY with true or false, no other text."
    )
}
