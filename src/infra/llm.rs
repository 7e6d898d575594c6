use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::domain::language::Language;
use crate::domain::prompt::{SCHEMA_NAME, build_prompt, commit_message_schema};
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

pub struct OpenRouterClient {
    http: Client,
    api_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            model,
        }
    }
}

#[async_trait]
impl LanguageModelService for OpenRouterClient {
    async fn generate_commit_message(
        &self,
        api_key: &str,
        changes: &ChangeSet,
        language: Language,
    ) -> AppResult<CommitMessage> {
        let request_body = ChatCompletionRequest::new(&self.model, language, changes)?;
        debug!(model = %self.model, language = language.as_str(), "requesting commit message");

        let response = self
            .http
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(AppError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AppError::Transport)?;

        if status != StatusCode::OK {
            let status = status.as_u16();
            let error_body: Value = serde_json::from_slice(&body)
                .map_err(|source| AppError::ApiErrorBody { status, source })?;
            return Err(AppError::Api {
                status,
                body: error_body,
            });
        }

        decode_commit_message(&body)
    }
}

/// The envelope is decoded first; the message content is itself a JSON
/// document and gets its own decode step.
fn decode_commit_message(body: &[u8]) -> AppResult<CommitMessage> {
    let envelope: ChatCompletionResponse =
        serde_json::from_slice(body).map_err(AppError::Envelope)?;

    let content = envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(AppError::EmptyResponse)?;

    serde_json::from_str(&content).map_err(AppError::CommitMessage)
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

impl ChatCompletionRequest {
    fn new(model: &str, language: Language, changes: &ChangeSet) -> AppResult<Self> {
        let schema = commit_message_schema(language);
        let prompt = build_prompt(language, &schema, changes)?;

        Ok(Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaDescriptor {
                    name: SCHEMA_NAME,
                    strict: true,
                    schema,
                },
            },
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaDescriptor,
}

#[derive(Debug, Serialize)]
struct JsonSchemaDescriptor {
    name: &'static str,
    strict: bool,
    schema: Value,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatChoiceMessage,
}

#[derive(Default, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
