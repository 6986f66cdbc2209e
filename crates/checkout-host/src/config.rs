//! Host Configuration

/// Host configuration, read from the environment
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the built WASM frontend
    pub static_dir: String,

    /// Payment service that receives relayed checkout requests
    pub upstream_url: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            upstream_url: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            upstream_url: std::env::var("PAYMENT_UPSTREAM_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}
