use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://192.168.4.83:5279";
pub const DEFAULT_SERVER_NAME: &str = "audiarr";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

/// Client settings. Held in memory only; nothing is persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Title shown when the server-name lookup fails.
    #[serde(default = "default_server_name")]
    pub fallback_server_name: String,
    /// Select the first artist and album as listings arrive.
    #[serde(default)]
    pub auto_select_first: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            fallback_server_name: default_server_name(),
            auto_select_first: false,
        }
    }
}

impl ClientConfig {
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    pub fn with_auto_select(mut self, auto_select_first: bool) -> Self {
        self.auto_select_first = auto_select_first;
        self
    }
}
