use anyhow::Result;
use async_trait::async_trait;

/// Two-role chat prompt: a fixed instruction role and the user's raw query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String>;
}
