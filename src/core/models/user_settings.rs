use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::global_constants;
use crate::infrastructure::LogHandle;

const SETTINGS_LOG: LogHandle = LogHandle::new(global_constants::LOG_TAG_SETTINGS);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

/// Deployment tier of the warehouse service; selects the API host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WarehouseEnvironment {
    #[default]
    Prod,
    Staging,
    Autopush,
    Dev,
}

impl WarehouseEnvironment {
    pub fn host(&self) -> &'static str {
        match self {
            WarehouseEnvironment::Prod => global_constants::WAREHOUSE_HOST_PROD,
            WarehouseEnvironment::Staging => global_constants::WAREHOUSE_HOST_STAGING,
            WarehouseEnvironment::Autopush => global_constants::WAREHOUSE_HOST_AUTOPUSH,
            WarehouseEnvironment::Dev => global_constants::WAREHOUSE_HOST_DEV,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PROD" => Some(WarehouseEnvironment::Prod),
            "STAGING" => Some(WarehouseEnvironment::Staging),
            "AUTOPUSH" => Some(WarehouseEnvironment::Autopush),
            "DEV" => Some(WarehouseEnvironment::Dev),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    pub project_id: String,
    pub project_number: String,
    pub region: String,
    #[serde(default)]
    pub environment: WarehouseEnvironment,
    pub index_endpoint_id: String,
    pub corpus_id: String,
    pub index_id: String,
    #[serde(default = "default_query")]
    pub default_query: String,
    #[serde(default = "default_page_title")]
    pub page_title: String,
    #[serde(default = "default_logo_url")]
    pub logo_url: Option<String>,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_query() -> String {
    global_constants::DEFAULT_QUERY.to_string()
}

fn default_page_title() -> String {
    global_constants::DEFAULT_PAGE_TITLE.to_string()
}

fn default_logo_url() -> Option<String> {
    Some(global_constants::DEFAULT_LOGO_URL.to_string())
}

fn default_request_timeout_seconds() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            project_id: global_constants::DEFAULT_PROJECT_ID.to_string(),
            project_number: global_constants::DEFAULT_PROJECT_NUMBER.to_string(),
            region: global_constants::DEFAULT_REGION.to_string(),
            environment: WarehouseEnvironment::default(),
            index_endpoint_id: global_constants::DEFAULT_INDEX_ENDPOINT_ID.to_string(),
            corpus_id: global_constants::DEFAULT_CORPUS_ID.to_string(),
            index_id: global_constants::DEFAULT_INDEX_ID.to_string(),
            default_query: default_query(),
            page_title: default_page_title(),
            logo_url: default_logo_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl ServiceSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        let mut settings = if !settings_path.exists() {
            SETTINGS_LOG.info("No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            default_settings
        } else {
            let contents = std::fs::read_to_string(&settings_path)?;
            let settings: ServiceSettings = serde_json::from_str(&contents)?;
            SETTINGS_LOG.info(format!("Loaded settings from {:?}", settings_path));
            settings
        };

        settings.apply_overrides(|key| std::env::var(key).ok());

        SETTINGS_LOG.debug(format!("Index endpoint: {}", settings.index_endpoint_name()));
        SETTINGS_LOG.debug(format!("Warehouse environment: {:?}", settings.environment));

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        SETTINGS_LOG.info(format!("Saved settings to {:?}", settings_path));
        Ok(())
    }

    /// Applies `VISIONAI_*` overrides; `lookup` is usually `std::env::var`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let string_fields: [(&str, &mut String); 7] = [
            ("VISIONAI_PROJECT_ID", &mut self.project_id),
            ("VISIONAI_PROJECT_NUMBER", &mut self.project_number),
            ("VISIONAI_REGION", &mut self.region),
            ("VISIONAI_INDEX_ENDPOINT_ID", &mut self.index_endpoint_id),
            ("VISIONAI_CORPUS_ID", &mut self.corpus_id),
            ("VISIONAI_INDEX_ID", &mut self.index_id),
            ("VISIONAI_DEFAULT_QUERY", &mut self.default_query),
        ];

        for (key, field) in string_fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                SETTINGS_LOG.info(format!("Overriding {} from environment", key));
                *field = value.trim().to_string();
            }
        }

        if let Some(value) = lookup("VISIONAI_ENVIRONMENT") {
            match WarehouseEnvironment::parse(&value) {
                Some(environment) => self.environment = environment,
                None => SETTINGS_LOG.warn(format!(
                    "Ignoring unknown VISIONAI_ENVIRONMENT value: {}",
                    value
                )),
            }
        }

        if let Some(value) = lookup("VISIONAI_REQUEST_TIMEOUT_SECONDS") {
            match value.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => self.request_timeout_seconds = seconds,
                _ => SETTINGS_LOG.warn(format!(
                    "Ignoring invalid VISIONAI_REQUEST_TIMEOUT_SECONDS value: {}",
                    value
                )),
            }
        }
    }

    pub fn index_endpoint_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/indexEndpoints/{}",
            self.project_number, self.region, self.index_endpoint_id
        )
    }

    pub fn corpus_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/corpora/{}",
            self.project_number, self.region, self.corpus_id
        )
    }

    pub fn index_name(&self) -> String {
        format!("{}/indexes/{}", self.corpus_name(), self.index_id)
    }

    pub fn warehouse_base_url(&self) -> String {
        format!(
            "https://{}/{}",
            self.environment.host(),
            global_constants::WAREHOUSE_API_VERSION
        )
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_environment_serializes_uppercase() {
        let serialized = serde_json::to_string(&WarehouseEnvironment::Prod).unwrap();
        assert_eq!(serialized, "\"PROD\"");

        let parsed: WarehouseEnvironment = serde_json::from_str("\"STAGING\"").unwrap();
        assert_eq!(parsed, WarehouseEnvironment::Staging);
    }

    #[test]
    fn test_environment_selects_host() {
        assert_eq!(
            WarehouseEnvironment::Prod.host(),
            "warehouse-visionai.googleapis.com"
        );
        assert_eq!(
            WarehouseEnvironment::Autopush.host(),
            "autopush-warehouse-visionai.sandbox.googleapis.com"
        );
    }

    #[test]
    fn test_default_settings_match_deployed_index() {
        let settings = ServiceSettings::default();

        assert_eq!(settings.project_id, "applied-ai-practice00");
        assert_eq!(settings.default_query, "customers");
        assert_eq!(settings.request_timeout_seconds, 30);
        assert_eq!(
            settings.warehouse_base_url(),
            "https://warehouse-visionai.googleapis.com/v1"
        );
        assert_eq!(
            settings.index_name(),
            "projects/653524927160/locations/us-central1/corpora/9012545256067295047/indexes/index-7912126009553124814"
        );
    }

    #[test]
    fn test_deserialization_fills_optional_fields() {
        let json = r#"{
            "project_id": "p",
            "project_number": "1",
            "region": "europe-west4",
            "index_endpoint_id": "ie-1",
            "corpus_id": "2",
            "index_id": "index-3"
        }"#;

        let settings: ServiceSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.environment, WarehouseEnvironment::Prod);
        assert_eq!(settings.default_query, "customers");
        assert_eq!(
            settings.logo_url.as_deref(),
            Some(global_constants::DEFAULT_LOGO_URL)
        );
        assert_eq!(
            settings.index_endpoint_name(),
            "projects/1/locations/europe-west4/indexEndpoints/ie-1"
        );
    }

    #[test]
    fn test_apply_overrides_replaces_known_keys() {
        let mut settings = ServiceSettings::default();
        let env: HashMap<&str, &str> = HashMap::from([
            ("VISIONAI_PROJECT_NUMBER", "42"),
            ("VISIONAI_REGION", "asia-east1"),
            ("VISIONAI_ENVIRONMENT", "staging"),
            ("VISIONAI_REQUEST_TIMEOUT_SECONDS", "5"),
        ]);

        settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.project_number, "42");
        assert_eq!(settings.region, "asia-east1");
        assert_eq!(settings.environment, WarehouseEnvironment::Staging);
        assert_eq!(settings.request_timeout_seconds, 5);
    }

    #[test]
    fn test_apply_overrides_ignores_invalid_values() {
        let mut settings = ServiceSettings::default();
        let env: HashMap<&str, &str> = HashMap::from([
            ("VISIONAI_ENVIRONMENT", "moon"),
            ("VISIONAI_REQUEST_TIMEOUT_SECONDS", "soon"),
            ("VISIONAI_REGION", "   "),
        ]);

        settings.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.environment, WarehouseEnvironment::Prod);
        assert_eq!(settings.request_timeout_seconds, 30);
        assert_eq!(settings.region, "us-central1");
    }

    #[test]
    fn test_settings_file_roundtrip() {
        let temp_dir = std::env::temp_dir().join("vision-video-search-test");
        std::fs::create_dir_all(&temp_dir).unwrap();

        let original = ServiceSettings {
            environment: WarehouseEnvironment::Dev,
            logo_url: Some("https://example.com/logo.png".to_string()),
            theme_mode: ThemeMode::Light,
            ..ServiceSettings::default()
        };

        let test_file = temp_dir.join("test_settings.json");
        std::fs::write(&test_file, serde_json::to_string_pretty(&original).unwrap()).unwrap();

        let loaded: ServiceSettings =
            serde_json::from_str(&std::fs::read_to_string(&test_file).unwrap()).unwrap();

        assert_eq!(loaded.environment, WarehouseEnvironment::Dev);
        assert_eq!(loaded.logo_url, original.logo_url);
        assert_eq!(loaded.theme_mode, ThemeMode::Light);

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
