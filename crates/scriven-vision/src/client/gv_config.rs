//! Configuration for the Cloud Vision HTTP client.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Default endpoint of the Vision REST surface.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

/// Environment variable consulted when resolving credentials.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Fixed module tag sent with every request for usage attribution.
pub const MODULE_TAG: &str = "cloud-vision";

/// Credentials for the Vision REST surface.
///
/// An API key travels as the `key` query parameter; an access token as an
/// `Authorization: Bearer` header. Token refresh is out of scope here;
/// callers that need it hold the refresh machinery themselves and rebuild
/// the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GvCredentials {
    /// Google API key.
    ApiKey(String),
    /// OAuth2 access token.
    AccessToken(String),
}

impl GvCredentials {
    /// Creates API key credentials.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(key.into())
    }

    /// Creates access token credentials.
    pub fn access_token(token: impl Into<String>) -> Self {
        Self::AccessToken(token.into())
    }

    /// Resolves credentials from the environment.
    ///
    /// Fails with a configuration error when nothing is set; construction
    /// is the only point where this failure can surface, and it is not
    /// retryable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(std::env::var(API_KEY_ENV).ok())
    }

    fn from_lookup(api_key: Option<String>) -> Result<Self> {
        match api_key.filter(|key| !key.is_empty()) {
            Some(key) => Ok(Self::ApiKey(key)),
            None => Err(Error::config(format!(
                "no Cloud Vision credentials found; set the {API_KEY_ENV} environment \
                 variable or pass an API key or access token explicitly"
            ))),
        }
    }
}

/// Configuration for the Cloud Vision HTTP client.
///
/// # Examples
///
/// ```ignore
/// use scriven_vision::{GvConfig, GvCredentials};
/// use std::time::Duration;
///
/// let config = GvConfig::new(GvCredentials::api_key("my-key"))
///     .with_quota_project("my-project")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct GvConfig {
    /// Endpoint of the Vision service
    endpoint: Url,

    /// Credentials attached to every request
    credentials: GvCredentials,

    /// Project billed for quota, sent as `x-goog-user-project`
    quota_project: Option<String>,

    /// Request timeout duration
    timeout: Duration,

    /// User agent string for HTTP requests
    user_agent: String,
}

impl GvConfig {
    /// Creates a configuration with the given credentials and default settings.
    pub fn new(credentials: GvCredentials) -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should be valid"),
            credentials,
            quota_project: None,
            timeout: Duration::from_secs(30),
            user_agent: format!(
                "scriven-vision/{} module/{}",
                env!("CARGO_PKG_VERSION"),
                MODULE_TAG
            ),
        }
    }

    /// Creates a configuration with credentials resolved from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GvCredentials::from_env()?))
    }

    /// Get the endpoint of the Vision service.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the configured credentials.
    pub fn credentials(&self) -> &GvCredentials {
        &self.credentials
    }

    /// Get the project billed for quota (if configured).
    pub fn quota_project(&self) -> Option<&str> {
        self.quota_project.as_deref()
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the user agent string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Override the service endpoint, e.g. for an emulator.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self> {
        self.endpoint = Url::parse(endpoint.as_ref()).map_err(|e| {
            Error::config(format!("Invalid endpoint '{}': {}", endpoint.as_ref(), e))
        })?;
        Ok(self)
    }

    /// Set the project billed for quota.
    pub fn with_quota_project(mut self, project: impl Into<String>) -> Self {
        self.quota_project = Some(project.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = GvConfig::new(GvCredentials::api_key("key"));
        assert_eq!(config.endpoint().as_str(), "https://vision.googleapis.com/");
        assert_eq!(config.quota_project(), None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().contains(MODULE_TAG));
    }

    #[test]
    fn test_fluent_api() {
        let config = GvConfig::new(GvCredentials::access_token("token"))
            .with_quota_project("my-project")
            .with_timeout(Duration::from_secs(45));

        assert_eq!(config.quota_project(), Some("my-project"));
        assert_eq!(config.timeout(), Duration::from_secs(45));
        assert_eq!(config.credentials(), &GvCredentials::access_token("token"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = GvConfig::new(GvCredentials::api_key("key")).with_endpoint("not a valid url");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        let error = GvCredentials::from_lookup(None).unwrap_err();
        assert!(error.is_config());
        assert!(error.to_string().contains(API_KEY_ENV));

        let error = GvCredentials::from_lookup(Some(String::new())).unwrap_err();
        assert!(error.is_config());
    }

    #[test]
    fn test_lookup_with_key() {
        let credentials = GvCredentials::from_lookup(Some("secret".into())).unwrap();
        assert_eq!(credentials, GvCredentials::ApiKey("secret".into()));
    }
}
