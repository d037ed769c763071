// LLM prompt template for post generation.
// The template is filled by placeholder replacement; nothing else touches the wording.

use crate::generation::options::{Purpose, Tone};

/// Post generation prompt. Replace: {topic}, {purpose}, {tone}
pub const POST_PROMPT_TEMPLATE: &str = r#"Generate social media posts about: '{topic}'.
Purpose: {purpose}

Requirements:
1. LinkedIn: A {tone} post of at least 200 words with appropriate emojis and hashtags.
2. Twitter: A concise {tone} post with emojis and hashtags (within character limit).
3. WhatsApp: A {tone} message with emojis that can be easily shared.

Include emojis naturally throughout all posts to enhance engagement."#;

/// Builds the single prompt sent to the model.
///
/// The topic is substituted last so placeholder-like text inside it is kept verbatim.
pub fn build_prompt(topic: &str, tone: Tone, purpose: Purpose) -> String {
    POST_PROMPT_TEMPLATE
        .replace("{purpose}", purpose.label())
        .replace("{tone}", tone.label())
        .replace("{topic}", topic)
}
