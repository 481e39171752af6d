use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_url")]
    pub url: String,
    #[serde(default = "default_calendar_timeout")]
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Name of the env var holding the generation credential. The
    /// credential itself never lives in the config file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_llm_timeout")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// "rules" | "narrative"
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// "broad" | "keyword"
    #[serde(default = "default_relevance_policy")]
    pub relevance_policy: String,
    #[serde(default)]
    pub annotate_sentiment: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            url: default_calendar_url(),
            request_timeout_ms: default_calendar_timeout(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            timeout_ms: default_llm_timeout(),
            max_retries: default_max_retries(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            relevance_policy: default_relevance_policy(),
            annotate_sentiment: false,
        }
    }
}

fn default_calendar_url() -> String {
    "https://www.forexfactory.com/calendar".into()
}

fn default_calendar_timeout() -> u64 {
    60_000
}

fn default_model() -> String {
    "Qwen/Qwen2.5-7B-Instruct".into()
}

fn default_api_base() -> String {
    "https://router.huggingface.co/v1".into()
}

fn default_api_key_env() -> String {
    "HF_API_KEY".into()
}

fn default_llm_timeout() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

fn default_strategy() -> String {
    "rules".into()
}

fn default_relevance_policy() -> String {
    "keyword".into()
}

impl AppConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
