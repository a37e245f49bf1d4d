//! Advisor runtime - prompt construction and the completion client.
//!
//! This crate wraps the external language-model call for counsel:
//! - **Prompt** (`prompt`) - fixed instruction role parameterized by the
//!   selected industry and category labels
//! - **Client** (`llm`, `openai`) - `LlmClient` seam plus the
//!   chat-completions implementation
//! - **Runtime** (`runtime`) - `AdvisorRuntime::answer`, which never fails:
//!   completion errors are logged and replaced with a fixed fallback string
//!
//! The model is strictly an answer generator. Which industry and category
//! apply is decided by the interaction flow before this crate is invoked.

pub mod llm;
pub mod openai;
pub mod prompt;
pub mod runtime;

pub use llm::{ChatPrompt, LlmClient};
pub use openai::OpenAiClient;
pub use runtime::{AdvisorRuntime, FALLBACK_ANSWER};
