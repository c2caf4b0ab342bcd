use thiserror::Error;

/// Everything that can go wrong between receiving a generation request and
/// returning a recipe array.
///
/// The `Display` strings are the exact prose sent to the client; nothing
/// structured crosses the API boundary. Causes worth keeping (transport
/// errors, provider status bodies, decode failures) stay server-side and are
/// only ever logged.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The operator never configured the provider credential. Deliberately
    /// vague: the message must not leak which variable is missing.
    #[error("The API key is not configured on the server.")]
    NotConfigured,

    /// The request carried no ingredients. The only client-fault variant.
    #[error("Ingredients are required.")]
    MissingIngredients,

    /// The provider call itself failed (connect, timeout, TLS).
    #[error("The AI service could not be reached. Please try again.")]
    Provider(#[from] reqwest::Error),

    /// The provider answered with a non-success status (auth, quota, ...).
    #[error("The AI service rejected the request. Please try again.")]
    ProviderApi { status: u16, message: String },

    /// The provider succeeded but sent no text at all.
    #[error("The AI model returned an empty response. Please try again.")]
    EmptyResponse,

    /// The provider's text was not valid JSON.
    #[error("The AI model returned a malformed response. Please try again.")]
    MalformedResponse(#[source] serde_json::Error),

    /// The provider's JSON was not an array of recipes matching the schema.
    /// Schema conformance is only a request-time hint, so this is checked
    /// here rather than trusted.
    #[error("The AI model returned an unexpected data structure. Please try again.")]
    UnexpectedShape(#[source] serde_json::Error),
}

impl GenerateError {
    /// HTTP status the proxy responds with for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingIngredients => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_ingredients_is_a_client_error() {
        assert_eq!(GenerateError::MissingIngredients.status_code(), 400);
        assert_eq!(GenerateError::NotConfigured.status_code(), 500);
        assert_eq!(GenerateError::EmptyResponse.status_code(), 500);
        assert_eq!(
            GenerateError::ProviderApi {
                status: 429,
                message: "quota".to_string(),
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_configuration_error_does_not_leak_the_variable_name() {
        let message = GenerateError::NotConfigured.to_string();
        assert!(!message.contains("GEMINI"));
        assert!(!message.contains("API_KEY"));
    }

    #[test]
    fn test_provider_api_message_stays_out_of_display() {
        let err = GenerateError::ProviderApi {
            status: 403,
            message: "key abc123 is invalid".to_string(),
        };
        assert!(!err.to_string().contains("abc123"));
    }
}
