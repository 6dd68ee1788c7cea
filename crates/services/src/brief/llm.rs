use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{BriefGenerator, BriefTier};
use crate::error::BriefError;

const SYSTEM_PROMPT: &str = "You are a ruthless, witty Chief Marketing Officer grading an MBA \
candidate. Reply with a two or three sentence private brief. Be cutting but precise, reference \
marketing strategy concepts, and never use bullet points.";

#[derive(Clone, Debug)]
pub struct BriefLlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl BriefLlmConfig {
    /// Read `HUMBUG_AI_*` settings. Returns `None` without an API key.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("HUMBUG_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("HUMBUG_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("HUMBUG_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Brief generator backed by an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct LlmBriefGenerator {
    client: Client,
    config: Option<BriefLlmConfig>,
}

impl LlmBriefGenerator {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(BriefLlmConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<BriefLlmConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

fn brief_prompt(correct: u32, session_title: &str) -> String {
    let tier = BriefTier::for_correct(correct);
    format!(
        "Session: {session_title}. Score: {correct}/10 ({tier} performance). \
         Write the brief.",
        tier = tier.label()
    )
}

fn chat_request(model: &str, correct: u32, session_title: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: brief_prompt(correct, session_title),
            },
        ],
        temperature: 0.9,
    }
}

#[async_trait]
impl BriefGenerator for LlmBriefGenerator {
    async fn generate_brief(
        &self,
        correct: u32,
        session_title: &str,
    ) -> Result<String, BriefError> {
        let config = self.config.as_ref().ok_or(BriefError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = chat_request(&config.model, correct, session_title);

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BriefError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(BriefError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
