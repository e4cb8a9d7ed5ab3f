use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub static_root_prefix: String,
    pub list_page_path: String,
    pub redirect_delay_ms: u64,
    pub notification_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: required("API_BASE_URL")?,
            static_root_prefix: env::var("STATIC_ROOT_PREFIX")
                .unwrap_or_else(|_| "src/web_app/static/".into()),
            list_page_path: env::var("LIST_PAGE_PATH").unwrap_or_else(|_| "/promotions".into()),
            redirect_delay_ms: env::var("REDIRECT_DELAY_MS")
                .unwrap_or_else(|_| "1500".into())
                .parse()?,
            notification_timeout_ms: env::var("NOTIFICATION_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".into())
                .parse()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".into(),
            static_root_prefix: "src/web_app/static/".into(),
            list_page_path: "/promotions".into(),
            redirect_delay_ms: 1500,
            notification_timeout_ms: 5000,
        }
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
