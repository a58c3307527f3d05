use super::DefinitionService;
use crate::error::LookupError;
use crate::models::{WordDefinition, FIELD_PLACEHOLDER};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the OpenAI definition client.
///
/// Queued responses are served in order and cycle when exhausted; with no
/// queue, a synthetic entry for the requested word is returned. Clones share
/// the queue and the call counter, so tests can keep a handle for
/// call-count assertions after handing a clone to the server.
#[derive(Clone)]
pub struct MockDefinitionClient {
    responses: Arc<Mutex<Vec<std::result::Result<WordDefinition, LookupError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockDefinitionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_definition(self, entry: WordDefinition) -> Self {
        self.responses.lock().unwrap().push(Ok(entry));
        self
    }

    pub fn with_error(self, error: LookupError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockDefinitionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DefinitionService for MockDefinitionClient {
    async fn lookup(&self, word: &str) -> std::result::Result<WordDefinition, LookupError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(WordDefinition {
                definition: format!("A mock definition of {}", word),
                part_of_speech: "noun".to_string(),
                examples: vec![format!("An example with {}", word)],
                contextual_sentences: vec![FIELD_PLACEHOLDER.to_string()],
                pronunciation: None,
                etymology: None,
            })
        } else {
            let index = (*count - 1) % responses.len();
            responses[index].clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(definition: &str) -> WordDefinition {
        WordDefinition {
            definition: definition.to_string(),
            part_of_speech: "noun".to_string(),
            examples: vec!["example".to_string()],
            contextual_sentences: vec!["sentence".to_string()],
            pronunciation: None,
            etymology: None,
        }
    }

    #[tokio::test]
    async fn test_mock_default_entry_mentions_word() {
        let client = MockDefinitionClient::new();
        let result = client.lookup("apple").await.unwrap();
        assert!(result.definition.contains("apple"));
        assert!(!result.examples.is_empty());
    }

    #[tokio::test]
    async fn test_mock_cycles_queued_responses() {
        let client = MockDefinitionClient::new()
            .with_definition(entry("first"))
            .with_definition(entry("second"));

        assert_eq!(client.lookup("a").await.unwrap().definition, "first");
        assert_eq!(client.lookup("b").await.unwrap().definition, "second");
        // Should cycle back
        assert_eq!(client.lookup("c").await.unwrap().definition, "first");
    }

    #[tokio::test]
    async fn test_mock_returns_queued_error() {
        let client = MockDefinitionClient::new().with_error(LookupError::RateLimit);
        assert_eq!(client.lookup("a").await.unwrap_err(), LookupError::RateLimit);
    }

    #[tokio::test]
    async fn test_mock_call_count_is_shared_across_clones() {
        let client = MockDefinitionClient::new();
        let clone = client.clone();

        assert_eq!(client.get_call_count(), 0);
        clone.lookup("a").await.unwrap();
        assert_eq!(client.get_call_count(), 1);
    }
}
