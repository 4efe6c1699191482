use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    /// Адрес проекта, например `https://xyz.supabase.co`; пустой: origin страницы
    #[serde(default)]
    pub url: String,
    /// Публичный (anon) ключ проекта
    #[serde(default)]
    pub anon_key: String,
}

impl BackendConfig {
    pub fn resolved_url(&self, origin: &str) -> String {
        let url = self.url.trim();
        let url = if url.is_empty() { origin } else { url };
        url.trim_end_matches('/').to_string()
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[backend]
url = ""
anon_key = ""
"#;

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Загрузить конфигурацию.
///
/// Встроенные значения по умолчанию перекрываются переменными окружения
/// `SUPPLIERS_BACKEND_URL` и `SUPPLIERS_BACKEND_ANON_KEY`, заданными при сборке.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let config = parse_config(DEFAULT_CONFIG)?;
    let config = apply_overrides(
        config,
        option_env!("SUPPLIERS_BACKEND_URL"),
        option_env!("SUPPLIERS_BACKEND_ANON_KEY"),
    );
    if config.backend.url.is_empty() {
        log::info!("Backend URL not configured, using page origin");
    } else {
        log::info!("Backend URL: {}", config.backend.url);
    }
    Ok(config)
}

fn apply_overrides(mut config: AppConfig, url: Option<&str>, anon_key: Option<&str>) -> AppConfig {
    if let Some(url) = url.filter(|v| !v.trim().is_empty()) {
        config.backend.url = url.trim().to_string();
    }
    if let Some(key) = anon_key.filter(|v| !v.trim().is_empty()) {
        config.backend.anon_key = key.trim().to_string();
    }
    config
}
