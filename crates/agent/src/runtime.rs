use std::sync::Arc;

use counsel_core::domain::{Category, Industry};
use tracing::warn;

use crate::llm::LlmClient;
use crate::prompt::advisory_prompt;

/// Shown to the user whenever the completion call fails, whatever the cause.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't reach the advisor service just now. Please try again in a moment.";

pub struct AdvisorRuntime {
    client: Arc<dyn LlmClient>,
}

impl AdvisorRuntime {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Answers a user query for the selected industry and category.
    ///
    /// Never fails and never retries: any client error is logged for
    /// operators and replaced with `FALLBACK_ANSWER`.
    pub async fn answer(&self, query: &str, industry: Industry, category: Category) -> String {
        let prompt = advisory_prompt(query, industry.label(), category.label());

        match self.client.complete(&prompt).await {
            Ok(answer) => answer,
            Err(error) => {
                warn!(
                    event_name = "agent.completion_failed",
                    industry = industry.value(),
                    category = category.value(),
                    error = %error,
                    "completion call failed; answering with fallback"
                );
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}
