use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use crate::ai::DefinitionService;
use crate::error::LookupError;
use crate::models::{Config, WordDefinition};
use crate::prompts;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Token ceiling for one dictionary entry.
const MAX_COMPLETION_TOKENS: u32 = 800;

/// Low randomness keeps entries consistent and factual.
const TEMPERATURE: f32 = 0.3;

/// OpenAI-backed dictionary lookup client.
///
/// A missing API key degrades to a per-request configuration failure rather
/// than preventing startup; no network call is attempted in that case.
pub struct OpenAiDefinitionClient {
    http: Option<OpenAiHttpClient>,
    model: String,
}

impl OpenAiDefinitionClient {
    pub fn new(api_key: Option<String>, model: String, timeout: Duration) -> Self {
        Self {
            http: api_key.map(|key| OpenAiHttpClient::new(key, timeout)),
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.model.clone(),
            config.timeout,
        )
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.map(|http| http.with_base_url(base_url));
        self
    }
}

#[async_trait]
impl DefinitionService for OpenAiDefinitionClient {
    async fn lookup(&self, word: &str) -> std::result::Result<WordDefinition, LookupError> {
        let Some(http) = &self.http else {
            tracing::error!("Lookup failed for word '{}': API key not configured", word);
            return Err(LookupError::MissingCredential);
        };

        let system_message = ChatMessage {
            role: "system".to_string(),
            content: Some(prompts::DEFINITION_SYSTEM.to_string()),
        };

        let user_message = ChatMessage {
            role: "user".to_string(),
            content: Some(prompts::render(
                prompts::DEFINITION_USER,
                &[("word", word)],
            )),
        };

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![system_message, user_message],
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
            response_format: Some(ResponseFormat::json_object()),
        };

        let response = match http.chat_completion(&request).await {
            Ok(response) => response,
            Err(e) => {
                let error = LookupError::classify(&e.to_string());
                tracing::error!("OpenAI API error for word '{}': {}", word, e);
                return Err(error);
            }
        };

        let choice = match response.choices.first() {
            Some(choice) => choice,
            None => {
                tracing::error!("Empty completion for word '{}'", word);
                return Err(LookupError::Upstream(
                    "No response choices from the AI service".to_string(),
                ));
            }
        };

        if let Some(reason) = choice.finish_reason.as_deref() {
            if reason != "stop" {
                tracing::warn!(
                    "Completion for word '{}' finished with reason '{}'",
                    word,
                    reason
                );
            }
        }

        let content = match choice.message.content.clone() {
            Some(content) => content,
            None => {
                tracing::error!("Completion for word '{}' had no content", word);
                return Err(LookupError::Upstream(
                    "No response choices from the AI service".to_string(),
                ));
            }
        };

        let payload: Value = serde_json::from_str(&content).map_err(|e| {
            tracing::error!("JSON parsing error for word '{}': {}", word, e);
            LookupError::Parse
        })?;

        let entry = WordDefinition::from_payload(&payload);
        tracing::info!("Successfully retrieved definition for word: {}", word);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FIELD_PLACEHOLDER;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer, api_key: Option<&str>) -> OpenAiDefinitionClient {
        OpenAiDefinitionClient::new(
            api_key.map(str::to_string),
            "gpt-5".to_string(),
            Duration::from_secs(5),
        )
        .with_base_url(server.uri())
    }

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_lookup_parses_full_entry() {
        let server = MockServer::start().await;

        let content = serde_json::json!({
            "definition": "the occurrence of happy events by chance",
            "part_of_speech": "noun",
            "examples": ["a stroke of serendipity"],
            "contextual_sentences": ["Finding that book was serendipity."],
            "pronunciation": "/ˌserənˈdipədē/",
            "etymology": "coined by Horace Walpole"
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
            .mount(&server)
            .await;

        let entry = make_client(&server, Some("test-key"))
            .lookup("serendipity")
            .await
            .unwrap();

        assert_eq!(entry.part_of_speech, "noun");
        assert_eq!(entry.examples, vec!["a stroke of serendipity"]);
        assert_eq!(entry.pronunciation.as_deref(), Some("/ˌserənˈdipədē/"));
    }

    #[tokio::test]
    async fn test_lookup_sends_model_temperature_and_json_format() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("\"model\":\"gpt-5\""))
            .and(body_string_contains("\"temperature\":0.3"))
            .and(body_string_contains("\"type\":\"json_object\""))
            .and(body_string_contains("serendipity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{}")))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server, Some("test-key"))
            .lookup("serendipity")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_lookup_normalizes_missing_and_scalar_fields() {
        let server = MockServer::start().await;

        let content = serde_json::json!({
            "definition": "a greeting",
            "examples": "say hello"
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
            .mount(&server)
            .await;

        let entry = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap();

        assert_eq!(entry.part_of_speech, FIELD_PLACEHOLDER);
        assert_eq!(entry.examples, vec!["say hello"]);
        assert_eq!(entry.contextual_sentences, vec![FIELD_PLACEHOLDER]);
    }

    #[tokio::test]
    async fn test_lookup_reports_parse_error_for_non_json_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("Sorry, I cannot answer that.")),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::Parse);
    }

    #[tokio::test]
    async fn test_lookup_classifies_rate_limit_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string("Rate limit reached for gpt-5"),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::RateLimit);
    }

    #[tokio::test]
    async fn test_lookup_classifies_auth_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("Incorrect API key provided"),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::Auth);
    }

    #[tokio::test]
    async fn test_lookup_classifies_quota_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_string("You exceeded your current quota, please check your plan"),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap_err();
        assert_eq!(err, LookupError::Quota);
    }

    #[tokio::test]
    async fn test_lookup_without_credential_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = make_client(&server, None).lookup("hello").await.unwrap_err();
        assert_eq!(err, LookupError::MissingCredential);
    }

    #[tokio::test]
    async fn test_lookup_tolerates_truncated_finish_reason() {
        let server = MockServer::start().await;

        let content = serde_json::json!({
            "definition": "cut short",
            "part_of_speech": "adjective",
            "examples": ["a truncated reply"],
            "contextual_sentences": ["The reply was truncated."]
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "length"
                }]
            })))
            .mount(&server)
            .await;

        let entry = make_client(&server, Some("test-key"))
            .lookup("truncated")
            .await
            .unwrap();
        assert_eq!(entry.definition, "cut short");
    }

    #[tokio::test]
    async fn test_lookup_reports_empty_choices_as_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let err = make_client(&server, Some("test-key"))
            .lookup("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }
}
