//! AI service integration for dictionary lookups
//!
//! Provides the lookup trait implemented by the OpenAI-backed client and an
//! injectable mock for tests.

pub mod mock;
pub mod openai;

pub use mock::MockDefinitionClient;
pub use openai::OpenAiDefinitionClient;

use crate::error::LookupError;
use crate::models::WordDefinition;
use async_trait::async_trait;

/// One best-effort dictionary lookup per call; no retries, no caching.
///
/// Implementations must never panic on arbitrary input: every failure mode
/// comes back as a [`LookupError`] value.
#[async_trait]
pub trait DefinitionService: Send + Sync {
    async fn lookup(&self, word: &str) -> std::result::Result<WordDefinition, LookupError>;
}
