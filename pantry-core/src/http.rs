//! Shared HTTP client utilities
//!
//! A single lazily-initialized client is used for all provider calls so
//! connections are pooled across requests.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Timeout for provider requests. Generating a full recipe set can take a
/// while, so this is generous.
const REQUEST_TIMEOUT_SECS: u64 = 60;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client for provider calls
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent("pantry-chef/1.0")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

/// Strip markdown code blocks from a JSON response
///
/// Even with a response schema declared, some models wrap their JSON in
/// markdown fences:
/// ```json
/// [{"recipeName": "..."}]
/// ```
///
/// This function removes such wrappers and returns the clean JSON content.
pub fn strip_markdown_json(content: &str) -> &str {
    let trimmed = content.trim();

    // Handle ```json ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```json")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    // Handle ``` ... ```
    if let Some(stripped) = trimmed
        .strip_prefix("```")
        .and_then(|s| s.strip_suffix("```"))
    {
        return stripped.trim();
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown_json_with_json_block() {
        let input = "```json\n[{\"recipeName\": \"test\"}]\n```";
        assert_eq!(strip_markdown_json(input), r#"[{"recipeName": "test"}]"#);
    }

    #[test]
    fn test_strip_markdown_json_with_plain_block() {
        let input = "```\n[{\"recipeName\": \"test\"}]\n```";
        assert_eq!(strip_markdown_json(input), r#"[{"recipeName": "test"}]"#);
    }

    #[test]
    fn test_strip_markdown_json_no_block() {
        let input = r#"[{"recipeName": "test"}]"#;
        assert_eq!(strip_markdown_json(input), input);
    }

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
