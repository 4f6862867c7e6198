use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::NotifierError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotifierSettings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub page: PageSettings,
    #[serde(default)]
    pub notifier: BehaviorSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Origin of the application serving the sign-in endpoint
    pub base_url: String,
    /// Path of the endpoint that exchanges the code for a session
    pub connect_path: String,
    /// Anti-forgery state token rendered into the page for this sign-in attempt
    pub state_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub signin_button_selector: String,
    pub status_selector: String,
    pub disclaimer_selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Where the page goes once the server confirms the login
    pub redirect_path: String,
    /// Delay before that navigation, in milliseconds
    pub redirect_delay_ms: u64,
    /// Render the server-call failure message when the request itself fails.
    /// Off by default: a failed request leaves the page as it was.
    pub report_transport_failures: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_path: "/gconnect".to_string(),
            state_token: String::new(),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            signin_button_selector: "#signinButton".to_string(),
            status_selector: "#result".to_string(),
            disclaimer_selector: ".disclaimer".to_string(),
        }
    }
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            redirect_path: "/exercises".to_string(),
            redirect_delay_ms: 4000,
            report_transport_failures: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl NotifierSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Settings file cannot be read or parsed
    /// - TOML parsing fails
    pub fn load() -> Result<Self, NotifierError> {
        Self::load_env_file();

        // Load base settings from TOML or defaults
        let mut settings = Self::load_base_settings()?;

        // Apply environment variable overrides
        Self::apply_env_overrides(&mut settings);

        Ok(settings)
    }

    /// Initialize the `env_logger` backend from the logging settings
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed
    pub fn init_logging(&self) -> Result<(), NotifierError> {
        env_logger::Builder::new()
            .parse_filters(&self.logging.level)
            .try_init()
            .map_err(|e| NotifierError::Settings(format!("Failed to initialize logger: {e}")))
    }

    /// Load base settings from TOML file(s) or use defaults
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (applied separately after loading base settings)
    /// 2. Settings.toml in `SIGNIN_SECRETS_DIR` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    fn load_base_settings() -> Result<Self, NotifierError> {
        let mut settings = Self::default();

        let default_config_path = Path::new("Settings.toml");
        if default_config_path.exists() {
            settings = Self::from_file(default_config_path)?;
            println!(
                "✓ Loaded base settings from {}",
                default_config_path.display()
            );
        }

        if let Ok(secrets_dir) = std::env::var("SIGNIN_SECRETS_DIR") {
            let secrets_path = Path::new(&secrets_dir).join("Settings.toml");
            if secrets_path.exists() {
                settings = Self::from_file(&secrets_path)?;
                println!("✓ Overriding settings from {}", secrets_path.display());
            } else {
                println!(
                    "ℹ SIGNIN_SECRETS_DIR set but no Settings.toml found at: {}",
                    secrets_path.display()
                );
            }
        }

        Ok(settings)
    }

    /// Parse a single TOML settings file; missing sections take their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_file(path: &Path) -> Result<Self, NotifierError> {
        let toml_content = fs::read_to_string(path)?;
        Ok(basic_toml::from_str(&toml_content)?)
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_server_env_overrides(&mut settings.server);
        Self::apply_page_env_overrides(&mut settings.page);
        Self::apply_behavior_env_overrides(&mut settings.notifier);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    fn apply_server_env_overrides(server_settings: &mut ServerSettings) {
        Self::apply_string_env_override("SERVER_BASE_URL", &mut server_settings.base_url);
        Self::apply_string_env_override("CONNECT_PATH", &mut server_settings.connect_path);
        Self::apply_string_env_override("SIGNIN_STATE", &mut server_settings.state_token);
    }

    fn apply_page_env_overrides(page_settings: &mut PageSettings) {
        Self::apply_string_env_override(
            "SIGNIN_BUTTON_SELECTOR",
            &mut page_settings.signin_button_selector,
        );
        Self::apply_string_env_override("STATUS_SELECTOR", &mut page_settings.status_selector);
        Self::apply_string_env_override(
            "DISCLAIMER_SELECTOR",
            &mut page_settings.disclaimer_selector,
        );
    }

    fn apply_behavior_env_overrides(behavior_settings: &mut BehaviorSettings) {
        Self::apply_string_env_override("REDIRECT_PATH", &mut behavior_settings.redirect_path);
        if let Ok(value_str) = std::env::var("REDIRECT_DELAY_MS") {
            if let Ok(value) = value_str.parse::<u64>() {
                behavior_settings.redirect_delay_ms = value;
            }
        }
        if let Ok(value_str) = std::env::var("REPORT_TRANSPORT_FAILURES") {
            if let Ok(value) = value_str.parse::<bool>() {
                behavior_settings.report_transport_failures = value;
            }
        }
    }

    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        Self::apply_string_env_override("RUST_LOG", &mut logging_settings.level);
    }

    /// Helper function to apply non-empty string environment variable overrides
    fn apply_string_env_override(env_var: &str, target: &mut String) {
        if let Ok(value) = std::env::var(env_var) {
            if !value.is_empty() {
                *target = value;
            }
        }
    }

    /// Load environment variables from .env file
    fn load_env_file() {
        if let Ok(contents) = fs::read_to_string(".env") {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    std::env::set_var(key.trim(), value.trim());
                }
            }
        }
    }

    /// Absolute URL for a page path, resolved against the server origin
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        match url::Url::parse(&self.server.base_url).and_then(|base| base.join(path)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{path}", self.server.base_url.trim_end_matches('/')),
        }
    }
}
