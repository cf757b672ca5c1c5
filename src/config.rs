use serde::Deserialize;

/// Server configuration.
///
/// Loaded from an optional YAML file; every field has a default so the
/// server runs with no configuration at all.
///
/// ```yaml
/// server:
///   listen_addr: "127.0.0.1:3000"
/// files:
///   root: "files"
///   index: "files/index.html"
///   not_found: "files/notfound.html"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the TCP listener binds to
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Served-root prefix request paths must carry for GET
    pub root: String,
    /// Resource served for an empty request path
    pub index: String,
    /// Resource whose bytes become every 404 body
    pub not_found: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            root: "files".to_string(),
            index: "files/index.html".to_string(),
            not_found: "files/notfound.html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `SERVEBOT_CONFIG`
    /// (default `config.yaml`), falling back to built-in defaults when
    /// the file is absent. `LISTEN` overrides the bind address either
    /// way.
    pub fn load() -> Self {
        let path =
            std::env::var("SERVEBOT_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => match Self::from_yaml(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Ignoring unparsable config {}: {}", path, e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Ok(listen) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen;
        }

        cfg
    }

    /// Parses a YAML configuration document.
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
