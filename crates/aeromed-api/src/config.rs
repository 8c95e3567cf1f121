use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3001";

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `AEROMED_ADDR`
    pub addr: SocketAddr,
    /// `AEROMED_JWT_SECRET`, required.
    pub jwt_secret: String,
    /// `AEROMED_SEED_FILE`, optional JSON directory seed.
    pub seed_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let addr_value = lookup("AEROMED_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_value
            .parse()
            .map_err(|e| eyre::eyre!("invalid AEROMED_ADDR '{addr_value}': {e}"))?;

        let jwt_secret = lookup("AEROMED_JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| eyre::eyre!("AEROMED_JWT_SECRET must be set"))?;

        let seed_file = lookup("AEROMED_SEED_FILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            addr,
            jwt_secret,
            seed_file,
        })
    }
}
