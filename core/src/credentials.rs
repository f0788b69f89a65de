use crate::config::UpstreamConfig;

/// Where the upstream API key comes from.
///
/// `Env` reads the named variable on every resolution and never caches
/// the value. `Static` pins a key from the config file (or a test).
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    Env { var: String },
    Static { key: String },
}

impl ApiKeySource {
    /// Build the source from config. A non-empty literal key takes
    /// precedence over the environment variable name.
    pub fn from_config(upstream: &UpstreamConfig) -> Self {
        match &upstream.api_key {
            Some(key) if !key.is_empty() => Self::Static { key: key.clone() },
            _ => Self::Env {
                var: upstream.api_key_env.clone(),
            },
        }
    }

    /// Resolve the key. Unset and empty both count as "not configured".
    pub fn resolve(&self) -> Option<String> {
        let key = match self {
            Self::Env { var } => std::env::var(var).ok()?,
            Self::Static { key } => key.clone(),
        };
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// Human-readable origin for startup logs and `status` output.
    pub fn describe(&self) -> String {
        match self {
            Self::Env { var } => format!("environment variable {}", var),
            Self::Static { .. } => "config file".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_key_resolves() {
        let source = ApiKeySource::Static {
            key: "sk-test".to_string(),
        };
        assert_eq!(source.resolve().as_deref(), Some("sk-test"));
    }

    #[test]
    fn empty_static_key_counts_as_missing() {
        let source = ApiKeySource::Static { key: String::new() };
        assert!(source.resolve().is_none());
    }

    #[test]
    fn env_source_tracks_process_environment() {
        let var = "OPENAI_RELAY_CREDENTIAL_TEST_A";
        let source = ApiKeySource::Env {
            var: var.to_string(),
        };

        std::env::remove_var(var);
        assert!(source.resolve().is_none());

        std::env::set_var(var, "sk-from-env");
        assert_eq!(source.resolve().as_deref(), Some("sk-from-env"));

        std::env::remove_var(var);
    }

    #[test]
    fn empty_env_value_counts_as_missing() {
        let var = "OPENAI_RELAY_CREDENTIAL_TEST_B";
        std::env::set_var(var, "");
        let source = ApiKeySource::Env {
            var: var.to_string(),
        };
        assert!(source.resolve().is_none());
        std::env::remove_var(var);
    }

    #[test]
    fn config_literal_wins_over_env_name() {
        let upstream = UpstreamConfig {
            api_key: Some("sk-literal".to_string()),
            ..UpstreamConfig::default()
        };
        let source = ApiKeySource::from_config(&upstream);
        assert!(matches!(source, ApiKeySource::Static { .. }));
    }

    #[test]
    fn empty_config_literal_falls_back_to_env_name() {
        let upstream = UpstreamConfig {
            api_key: Some(String::new()),
            api_key_env: "SOME_KEY_VAR".to_string(),
            ..UpstreamConfig::default()
        };
        match ApiKeySource::from_config(&upstream) {
            ApiKeySource::Env { var } => assert_eq!(var, "SOME_KEY_VAR"),
            other => panic!("expected env source, got {:?}", other),
        }
    }
}
