use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.hooktheory.com/v1";
pub const DEFAULT_WWW_BASE_URL: &str = "https://www.hooktheory.com";

/// Everything the client needs, passed in explicitly. Credentials are
/// never read from the environment or any other global inside the
/// client itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub www_base_url: String,
    pub username: String,
    pub password: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            www_base_url: DEFAULT_WWW_BASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl ClientConfig {
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_hosts() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_base_url, "https://api.hooktheory.com/v1");
        assert_eq!(cfg.www_base_url, "https://www.hooktheory.com");
        assert!(cfg.username.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: ClientConfig =
            toml::from_str("username = \"alice\"\npassword = \"secret\"").unwrap();
        assert_eq!(cfg.username, "alice");
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    }
}
