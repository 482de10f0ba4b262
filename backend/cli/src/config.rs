use uiscope_gateway::DEFAULT_MAX_DEPTH;

/// uiscope runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Optional JSON fixture tree served by the demo host
    pub tree_path: Option<String>,
    /// Traversal depth guard
    pub max_depth: usize,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            tree_path: None,
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Self {
            bind_address: lookup("UISCOPE_BIND").unwrap_or(defaults.bind_address),
            port: lookup("UISCOPE_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            tree_path: lookup("UISCOPE_TREE"),
            max_depth: lookup("UISCOPE_MAX_DEPTH")
                .and_then(|d| d.parse().ok())
                .unwrap_or(defaults.max_depth),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}
