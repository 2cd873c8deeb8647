pub mod prompts;

/// Hard ceiling on the number of questions a single request may ask for.
pub const MAX_QUESTION_COUNT: u32 = 20;

/// How much of a raw model response is surfaced in parse diagnostics.
pub const RAW_RESPONSE_EXCERPT_LEN: usize = 200;
