//! The text-generation capability the pipeline depends on, plus an optional
//! retry/timeout wrapper around any implementation.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::llm::prompts::PromptTemplate;
use log::warn;
use std::future::Future;
use std::time::Duration;

/// Generate text from one instruction and two ordered text inputs.
pub trait TextGenerator {
    fn generate(
        &self,
        template: &PromptTemplate,
        resume_text: &str,
        job_description: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    fn model_name(&self) -> &str {
        "unknown"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
    pub timeout: Option<Duration>,
}

impl RetryPolicy {
    /// Single attempt, no deadline.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
            timeout: None,
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: config.retry_backoff(),
            timeout: config.timeout(),
        }
    }

    /// Delay before retry number `retry` (0-based): backoff, 2x, 4x, ...
    fn delay_for(&self, retry: u32) -> Duration {
        self.backoff.saturating_mul(1u32 << retry.min(16))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Wraps a generator with a per-attempt deadline and bounded retries on
/// transient failures. With [`RetryPolicy::none`] it behaves exactly like
/// the inner generator.
pub struct ResilientGenerator<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G> ResilientGenerator<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G> ResilientGenerator<G>
where
    G: TextGenerator + Sync,
{
    async fn attempt(
        &self,
        template: &PromptTemplate,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        let call = self.inner.generate(template, resume_text, job_description);
        match self.policy.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(GenerationError::Timeout(limit))),
            None => call.await,
        }
    }
}

impl<G> TextGenerator for ResilientGenerator<G>
where
    G: TextGenerator + Sync,
{
    async fn generate(
        &self,
        template: &PromptTemplate,
        resume_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        let mut retry = 0;
        loop {
            match self.attempt(template, resume_text, job_description).await {
                Err(e) if e.is_transient() && retry < self.policy.max_retries => {
                    let delay = self.policy.delay_for(retry);
                    warn!(
                        "Generation attempt {} failed ({}), retrying after {}ms",
                        retry + 1,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    retry += 1;
                }
                outcome => return outcome,
            }
        }
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
