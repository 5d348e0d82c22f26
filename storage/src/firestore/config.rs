//! Connection settings for the Firestore backend.

/// Public Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    /// REST root up to and including the API version, without a trailing slash.
    pub base_url: String,
    /// OAuth2 bearer token; `None` when talking to the emulator.
    pub access_token: Option<String>,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
        }
    }

    /// Points at a local emulator (`FIRESTORE_EMULATOR_HOST`, e.g. `localhost:8080`).
    pub fn for_emulator(project_id: impl Into<String>, host: &str) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: format!("http://{}/v1", host.trim_end_matches('/')),
            access_token: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// `projects/{project}/databases/(default)/documents`
    pub fn documents_root(&self) -> String {
        format!("projects/{}/databases/(default)/documents", self.project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_public_endpoint() {
        let config = FirestoreConfig::new("demo");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.access_token.is_none());
        assert_eq!(
            config.documents_root(),
            "projects/demo/databases/(default)/documents"
        );
    }

    #[test]
    fn test_for_emulator() {
        let config = FirestoreConfig::for_emulator("demo", "localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = FirestoreConfig::new("demo")
            .with_base_url("http://127.0.0.1:1234/")
            .with_access_token("tok");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
        assert_eq!(config.access_token.as_deref(), Some("tok"));
    }
}
