//! Typed view of the document the LionWeb repository server reads at start-up.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub server: ServerSection,
    pub startup: StartupSection,
    pub logging: LoggingSection,
    pub database: DatabaseSection,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSection {
    pub server_port: u16,
    pub expected_token: Option<String>,
    pub body_limit: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSection {
    pub create_database: bool,
    pub create_repositories: Vec<RepositorySpec>,
}

/// A repository the server creates when it starts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySpec {
    pub name: String,
    pub lion_web_version: String,
    pub history: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSection {
    pub request: String,
    pub database: Vec<String>,
    pub express: String,
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSection {
    pub host: String,
    pub user: String,
    pub db: String,
    pub pass: String,
    pub port: u16,
}

impl std::fmt::Debug for DatabaseSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSection")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("db", &self.db)
            .field("pass", &"***")
            .field("port", &self.port)
            .finish()
    }
}
