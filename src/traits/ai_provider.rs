use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// External text-generation service. Implementations are built once at
/// startup and shared behind an `Arc`.
#[async_trait]
pub trait AiProvider: Send + Sync {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;

    fn model_name(&self) -> &str;
}
