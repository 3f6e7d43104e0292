use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.llama.fi";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the DeFiLlama API, without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Reads `DEFILLAMA_BASE_URL`, falling back to the public API.
    pub fn from_env() -> Self {
        Self {
            base_url: base_url_or_default(env::var("DEFILLAMA_BASE_URL").ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn base_url_or_default(raw: Option<String>) -> String {
    raw.map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
