// Post generation: prompt building, the completion call, and splitting the reply
// into per-platform posts. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod options;
pub mod partitioner;
pub mod prompts;
