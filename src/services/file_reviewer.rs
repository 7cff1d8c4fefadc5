use std::sync::Arc;
use crate::config::constants::REVIEW_ERROR_SENTINEL;
use crate::helpers::prompt_generator::generate_file_review_prompt;
use crate::structs::file_review::FileReview;
use crate::structs::source_file::SourceFile;
use crate::traits::ai_provider::AiProvider;

/// Asks the model about each file in turn. A failed call never aborts the
/// batch; that file gets the sentinel text instead.
#[derive(Clone)]
pub struct FileReviewer {
    provider: Arc<dyn AiProvider>,
}

impl FileReviewer {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn review(&self, sources: &[SourceFile], focus: Option<&str>) -> Vec<FileReview> {
        let mut reviews = Vec::with_capacity(sources.len());

        for source in sources {
            let prompt = generate_file_review_prompt(source, focus);
            let review = match self.provider.generate(prompt).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("⚠️ {} review failed for {}: {}", self.provider.model_name(), source.path, e);
                    REVIEW_ERROR_SENTINEL.to_string()
                }
            };

            reviews.push(FileReview {
                file: source.path.clone(),
                review,
            });
        }

        log::info!("🤖 Generated {} file reviews with {}", reviews.len(), self.provider.model_name());
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, Sequence};
    use crate::enums::ai_provider_error::AiProviderError;

    mock! {
        Provider {}

        #[async_trait]
        impl AiProvider for Provider {
            async fn generate(&self, prompt: String) -> Result<String, AiProviderError>;
            fn model_name(&self) -> &str;
        }
    }

    fn sources(paths: &[&str]) -> Vec<SourceFile> {
        paths
            .iter()
            .map(|path| SourceFile {
                path: (*path).to_string(),
                content: format!("// {}", path),
            })
            .collect()
    }

    #[test]
    fn reviews_each_file_in_order() {
        let mut provider = MockProvider::new();
        let mut seq = Sequence::new();
        provider.expect_model_name().return_const("test-model".to_string());
        provider
            .expect_generate()
            .withf(|prompt: &String| prompt.contains("File: a.js"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("looks fine".to_string()));
        provider
            .expect_generate()
            .withf(|prompt: &String| prompt.contains("File: b.js"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("rename x".to_string()));

        let reviewer = FileReviewer::new(Arc::new(provider));
        let reviews = tokio_test::block_on(reviewer.review(&sources(&["a.js", "b.js"]), None));

        assert_eq!(
            reviews,
            vec![
                FileReview { file: "a.js".to_string(), review: "looks fine".to_string() },
                FileReview { file: "b.js".to_string(), review: "rename x".to_string() },
            ]
        );
    }

    #[test]
    fn failures_degrade_to_sentinel() {
        let mut provider = MockProvider::new();
        provider.expect_model_name().return_const("test-model".to_string());
        provider
            .expect_generate()
            .withf(|prompt: &String| prompt.contains("File: broken.js"))
            .returning(|_| Err(AiProviderError::NetworkError("connection reset".to_string())));
        provider
            .expect_generate()
            .withf(|prompt: &String| prompt.contains("File: ok.js"))
            .returning(|_| Ok("fine".to_string()));

        let reviewer = FileReviewer::new(Arc::new(provider));
        let reviews = tokio_test::block_on(reviewer.review(&sources(&["broken.js", "ok.js"]), Some("naming")));

        assert_eq!(reviews[0].review, REVIEW_ERROR_SENTINEL);
        assert_eq!(reviews[1].review, "fine");
    }

    #[test]
    fn empty_input_makes_no_calls() {
        let mut provider = MockProvider::new();
        provider.expect_model_name().return_const("test-model".to_string());
        provider.expect_generate().never();

        let reviewer = FileReviewer::new(Arc::new(provider));
        assert!(tokio_test::block_on(reviewer.review(&[], None)).is_empty());
    }
}
