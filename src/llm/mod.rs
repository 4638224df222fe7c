pub mod client;
pub mod prompt;
pub mod providers;

pub use client::{create_client, LlmClient};
pub use prompt::cookie_lookup_prompt;

#[cfg(test)]
pub use client::MockLlmClient;
