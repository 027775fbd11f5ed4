//! Auditor Orchestrator
//!
//! Ties the prompt builder, the API client and the normalizer together
//! behind one entry point. `analyze` is infallible by contract: transport,
//! auth and quota failures produce the same degraded result shape as
//! malformed replies, so the presentation layer never branches on errors.

use codeaudit_core::{normalize, AnalysisRequest, AuditorConfig, NormalizedResult};
use tracing::{debug, warn};

use crate::openai::OpenAiClient;
use crate::prompt;

/// AI-backed code auditor.
pub struct CodeAuditor {
    config: AuditorConfig,
    client: OpenAiClient,
}

impl CodeAuditor {
    /// Create an auditor from a validated configuration.
    #[must_use]
    pub fn new(config: AuditorConfig) -> Self {
        let client = OpenAiClient::new(&config);
        Self { config, client }
    }

    #[must_use]
    pub fn config(&self) -> &AuditorConfig {
        &self.config
    }

    /// Analyze one code snippet; one request in flight, no retry.
    pub async fn analyze(&self, request: &AnalysisRequest) -> NormalizedResult {
        let (system, user) = prompt::build_prompts(request);
        debug!(
            filename = %request.filename,
            language = %request.language,
            "submitting analysis request"
        );

        match self.client.complete(system, &user).await {
            Ok(reply) => normalize(&reply, &self.config.weights),
            Err(err) => {
                warn!(filename = %request.filename, error = %err, "analysis failed");
                NormalizedResult::failure(&err.to_string())
            }
        }
    }
}
