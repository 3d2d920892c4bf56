use headshot_studio_adapters::{DEFAULT_API_BASE, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
    pub output_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            output_dir: ".".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = non_empty_env("GEMINI_API_BASE") {
            config.api_base = base;
        }
        if let Some(model) = non_empty_env("GEMINI_MODEL") {
            config.model = model;
        }
        config.api_key =
            non_empty_env("GEMINI_API_KEY").or_else(|| non_empty_env("GOOGLE_API_KEY"));
        if let Some(dir) = non_empty_env("HEADSHOT_OUTPUT_DIR") {
            config.output_dir = dir;
        }
        config
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
