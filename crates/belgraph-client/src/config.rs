//! Connection settings for the remote knowledge-graph server.
//!
//! A config is passed explicitly to [`HttpBackend::new`](crate::transport::HttpBackend::new);
//! there is no process-wide connection state. [`ConnectConfig::from_env`]
//! reads the following variables, applying defaults where absent:
//!
//! | Variable            | Default                 | Description                    |
//! |---------------------|-------------------------|--------------------------------|
//! | `BELGRAPH_SERVER`   | `http://localhost:2480` | Server base URL                |
//! | `BELGRAPH_DB`       | `bel`                   | Database name                  |
//! | `BELGRAPH_USER`     | `guest`                 | Basic-auth username            |
//! | `BELGRAPH_PASSWORD` | `guest`                 | Basic-auth password            |

/// Settings for one server connection: address, database, credentials.
/// Configure once, reuse across every call made through the same backend.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Server base URL, e.g. `https://graphstore.example.org`.
    pub server: String,

    /// Database name addressed by every stored-function call.
    pub db_name: String,

    /// Basic-auth username.
    pub user: String,

    /// Basic-auth password.
    pub password: String,
}

impl ConnectConfig {
    pub fn new(
        server: impl Into<String>,
        db_name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            db_name: db_name.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Load settings from `BELGRAPH_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            server: env_str("BELGRAPH_SERVER", "http://localhost:2480"),
            db_name: env_str("BELGRAPH_DB", "bel"),
            user: env_str("BELGRAPH_USER", "guest"),
            password: env_str("BELGRAPH_PASSWORD", "guest"),
        }
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_construction() {
        let config = ConnectConfig::new("https://kg.example.org", "covid", "alice", "secret");
        assert_eq!(config.server, "https://kg.example.org");
        assert_eq!(config.db_name, "covid");
        assert_eq!(config.user, "alice");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        // Unset in the test environment, so every field takes its default.
        let config = ConnectConfig::from_env();
        assert_eq!(config.server, "http://localhost:2480");
        assert_eq!(config.db_name, "bel");
    }
}
