//! Critique service — one request in, one critique (or one error) out.
//!
//! Without a provider the service runs in demo mode and never touches the network.
//! With one, it makes exactly one completion call per request and never retries.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::critique::models::{CritiqueRequest, CritiqueResponse};
use crate::critique::parser::{build_prompt, fill_template, score_reply, TierThresholds};
use crate::critique::prompts::{CANNED_CRITIQUES, EMPTY_REPLY_FALLBACK};
use crate::critique::randomness::RandomSource;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;

/// Demo-mode score band, inclusive.
pub const DEMO_SCORE_RANGE: (u32, u32) = (65, 89);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Live,
    Demo,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Demo => "demo",
        }
    }
}

pub struct CritiqueService {
    provider: Option<Arc<dyn CompletionProvider>>,
    rng: Arc<dyn RandomSource>,
}

impl CritiqueService {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>, rng: Arc<dyn RandomSource>) -> Self {
        Self { provider, rng }
    }

    pub fn mode(&self) -> Mode {
        if self.provider.is_some() {
            Mode::Live
        } else {
            Mode::Demo
        }
    }

    pub async fn submit(&self, request: &CritiqueRequest) -> Result<CritiqueResponse, AppError> {
        validate(request)?;

        let span = info_span!("critique", request_id = %Uuid::new_v4(), filename = %request.filename);
        async {
            let response = match &self.provider {
                None => self.demo_critique(&request.filename),
                Some(provider) => self.live_critique(provider.as_ref(), request).await?,
            };
            info!(
                "Critique ready: mode={} score={} level={:?}",
                self.mode().as_str(),
                response.score,
                response.roast_level
            );
            Ok::<_, AppError>(response)
        }
        .instrument(span)
        .await
    }

    fn demo_critique(&self, filename: &str) -> CritiqueResponse {
        let template = CANNED_CRITIQUES[self.rng.index(CANNED_CRITIQUES.len())];
        let (low, high) = DEMO_SCORE_RANGE;
        let score = self.rng.between(low, high);
        let score_text = score.to_string();
        let critique = fill_template(
            template,
            &[("filename", filename), ("score", score_text.as_str())],
        );
        CritiqueResponse::scored(critique, score, &TierThresholds::DEMO)
    }

    async fn live_critique(
        &self,
        provider: &dyn CompletionProvider,
        request: &CritiqueRequest,
    ) -> Result<CritiqueResponse, AppError> {
        let prompt = build_prompt(&request.resume_text, &request.filename);
        let reply = provider
            .complete(&prompt)
            .await?
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string());
        let score = score_reply(&reply, self.rng.as_ref());
        Ok(CritiqueResponse::scored(reply, score, &TierThresholds::LIVE))
    }
}

/// Stricter than a plain emptiness check: whitespace-only fields are rejected too.
fn validate(request: &CritiqueRequest) -> Result<(), AppError> {
    if request.resume_text.trim().is_empty() || request.filename.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Resume text and filename are required".to_string(),
        ));
    }
    Ok(())
}
