//! One request/response cycle: cookie name in, parsed record out.

use crate::llm::{cookie_lookup_prompt, LlmClient};
use crate::parser::{parse_response, CookieRecord};
use crate::CookieFinderError;

/// A cookie name as typed by the user, trimmed and known to be non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieQuery(String);

impl CookieQuery {
    /// Returns `None` for empty or whitespace-only input
    pub fn new(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Run a lookup for raw user input.
///
/// Blank input yields `Ok(None)` without contacting the model. Client errors
/// are returned unchanged.
pub async fn lookup(
    client: &dyn LlmClient,
    input: &str,
) -> Result<Option<CookieRecord>, CookieFinderError> {
    let Some(query) = CookieQuery::new(input) else {
        return Ok(None);
    };

    tracing::info!("Looking up cookie: {}", query.name());
    let prompt = cookie_lookup_prompt(query.name());

    let reply = client.complete(&prompt).await.map_err(|e| {
        tracing::warn!("Lookup failed for {}: {}", query.name(), e);
        e
    })?;

    let record = parse_response(&reply);
    tracing::info!(
        "Parsed {} attributes for {}",
        record.attributes.len(),
        query.name()
    );

    Ok(Some(record))
}
