pub mod client;
pub mod definition;
pub mod types;

pub use definition::OpenAiDefinitionClient;
