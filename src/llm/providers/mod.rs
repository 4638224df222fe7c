pub mod anthropic;
pub mod openai;

use crate::CookieFinderError;

/// Turn a non-success HTTP response into an error carrying the body
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, CookieFinderError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(CookieFinderError::Llm(format!(
        "API request failed with status {}: {}",
        status, error_text
    )))
}
