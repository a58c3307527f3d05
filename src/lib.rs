//! WordWise - AI-backed dictionary lookup web service
//!
//! Accepts a word through a small web UI or JSON endpoint, asks an LLM
//! chat-completions API for a structured dictionary entry, and renders the
//! normalized result back as HTML or JSON.

pub mod ai;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;

pub use error::{Error, LookupError, Result};
