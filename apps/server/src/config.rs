//! Server configuration from environment variables.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind, e.g. "127.0.0.1:8440".
    pub listen_addr: String,
    /// Directory holding the SQLite database and backups.
    pub data_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: std::env::var("LT_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:8440".to_string()),
            data_dir: std::env::var("LT_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("LT_LISTEN_ADDR");
        std::env::remove_var("LT_DATA_DIR");
        let config = Config::from_env();
        assert_eq!(config.listen_addr, "127.0.0.1:8440");
        assert_eq!(config.data_dir, "./data");
    }
}
