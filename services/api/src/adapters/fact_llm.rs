//! services/api/src/adapters/fact_llm.rs
//!
//! This module contains the adapter for the generative fact service.
//! It implements the `FactGenerationService` port from the `core` crate.

const FACT_PROMPT_TEMPLATE: &str =
    "Provide a unique, mind-blowing fun fact about the planet {planet} in 30 words or less.";

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::responses::CreateResponseArgs,
    Client,
};
use async_trait::async_trait;
use stellar_voyage_core::ports::{FactGenerationService, PortError, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `FactGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiFactAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    top_p: f32,
}

impl OpenAiFactAdapter {
    /// Creates a new `OpenAiFactAdapter` with fixed generation knobs.
    pub fn new(client: Client<OpenAIConfig>, model: String, temperature: f32, top_p: f32) -> Self {
        Self {
            client,
            model,
            temperature,
            top_p,
        }
    }
}

//=========================================================================================
// `FactGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl FactGenerationService for OpenAiFactAdapter {
    /// Requests a short fact about the named planet. Returns the trimmed
    /// model output; the caller substitutes the fallback text on error or
    /// on an empty response.
    async fn generate_fact(&self, planet_name: &str) -> PortResult<String> {
        let prompt = FACT_PROMPT_TEMPLATE.replace("{planet}", planet_name);

        let request = CreateResponseArgs::default()
            .model(&self.model)
            .input(prompt)
            .temperature(self.temperature)
            .top_p(self.top_p)
            .max_output_tokens(120u32)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .responses()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let text = response.output_text().unwrap_or_default();
        Ok(text.trim().to_string())
    }
}
