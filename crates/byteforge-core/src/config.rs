use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable that overrides `mailer.api_key`
pub const MAILER_API_KEY_ENV: &str = "BYTEFORGE_MAILER_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub mailer: MailerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to section-to-section scrolls and entrance timelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value when the animation finishes
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    /// Quadratic ease-in-out, the curve the page uses by default
    #[default]
    InOutQuad,
}

/// Full-page step navigation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Minimum absolute wheel delta that counts as a step request
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,
    /// Wheel delta reported for a single terminal wheel notch
    #[serde(default = "default_wheel_notch_delta")]
    pub wheel_notch_delta: f64,
    /// Duration of the scroll between two sections
    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u64,
    /// Lock held after the scroll lands, absorbs trailing wheel events
    #[serde(default = "default_cooldown")]
    pub cooldown_ms: u64,
    /// Force-release a scroll that never reports completion (0 = wait forever)
    #[serde(default = "default_stall_timeout")]
    pub stall_timeout_ms: u64,
    /// Easing for the section scroll
    #[serde(default)]
    pub easing: EasingType,
    /// Duration of a section's entrance presentation
    #[serde(default = "default_entrance_duration")]
    pub entrance_duration_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: default_wheel_threshold(),
            wheel_notch_delta: default_wheel_notch_delta(),
            scroll_duration_ms: default_scroll_duration(),
            cooldown_ms: default_cooldown(),
            stall_timeout_ms: default_stall_timeout(),
            easing: EasingType::default(),
            entrance_duration_ms: default_entrance_duration(),
            animation_fps: default_animation_fps(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Client-side contact form settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// URL the contact form posts to
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the contact endpoint listens on
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// How leads leave the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MailTransport {
    /// Write each lead as a JSON file into `outbox_dir`
    #[default]
    Outbox,
    /// POST each lead to a transactional mail API
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    #[serde(default)]
    pub transport: MailTransport,
    /// Address that receives every lead
    #[serde(default = "default_operator_address")]
    pub operator_address: String,
    /// Sending account
    #[serde(default = "default_sender_address")]
    pub sender_address: String,
    /// Display name used in the From header
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    /// Mail API endpoint (http transport)
    #[serde(default)]
    pub api_url: Option<String>,
    /// Mail API key (http transport), overridden by BYTEFORGE_MAILER_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,
    /// Outbox directory (outbox transport), defaults to <data_dir>/outbox
    #[serde(default)]
    pub outbox_dir: Option<PathBuf>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            transport: MailTransport::default(),
            operator_address: default_operator_address(),
            sender_address: default_sender_address(),
            sender_name: default_sender_name(),
            api_url: None,
            api_key: None,
            outbox_dir: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl MailerConfig {
    /// API key from the environment, falling back to the config file
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(MAILER_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("byteforge")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_wheel_threshold() -> f64 {
    10.0
}

fn default_wheel_notch_delta() -> f64 {
    120.0
}

fn default_scroll_duration() -> u64 {
    1200
}

fn default_cooldown() -> u64 {
    700
}

fn default_stall_timeout() -> u64 {
    4000
}

fn default_entrance_duration() -> u64 {
    600
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_contact_endpoint() -> String {
    "http://127.0.0.1:8787/api/contact".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}

fn default_operator_address() -> String {
    "leads@byteforge.dev".to_string()
}

fn default_sender_address() -> String {
    "website@byteforge.dev".to_string()
}

fn default_sender_name() -> String {
    "ByteForge Website".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(config_path: &std::path::Path) -> crate::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/byteforge/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("byteforge")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal page owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("byteforge.log")
    }

    /// Directory the outbox transport writes leads into
    pub fn outbox_dir(&self) -> PathBuf {
        self.mailer
            .outbox_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| self.data_dir().join("outbox"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.navigator.wheel_threshold, 10.0);
        assert_eq!(config.navigator.cooldown_ms, 700);
        assert_eq!(config.navigator.scroll_duration_ms, 1200);
        assert_eq!(config.navigator.easing, EasingType::InOutQuad);
        assert_eq!(config.mailer.transport, MailTransport::Outbox);
        assert_eq!(config.server.bind_address.port(), 8787);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [navigator]
            cooldown_ms = 1000
            easing = "cubic"

            [mailer]
            transport = "http"
            api_url = "https://mail.example.com/send"
            "#,
        )
        .unwrap();
        assert_eq!(config.navigator.cooldown_ms, 1000);
        assert_eq!(config.navigator.easing, EasingType::Cubic);
        assert_eq!(config.navigator.wheel_threshold, 10.0);
        assert_eq!(config.mailer.transport, MailTransport::Http);
        assert_eq!(
            config.mailer.api_url.as_deref(),
            Some("https://mail.example.com/send")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("navigator = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_outbox_dir_defaults_under_data_dir() {
        let mut config = AppConfig::default();
        config.general.data_dir = PathBuf::from("/var/lib/byteforge");
        assert_eq!(config.outbox_dir(), PathBuf::from("/var/lib/byteforge/outbox"));

        config.mailer.outbox_dir = Some(PathBuf::from("/srv/leads"));
        assert_eq!(config.outbox_dir(), PathBuf::from("/srv/leads"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = PathBuf::from("/absolute/path");
        assert_eq!(expand_tilde(&path), path);
    }
}
