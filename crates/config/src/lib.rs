//! Layered configuration for lectern.
//!
//! Sources are merged in order, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. `config.toml`, `config.yaml` or `config.json` in the platform config
//!    directory (e.g. `~/.config/lectern/` on Linux)
//! 3. An explicitly provided file, whose format follows its extension
//! 4. Environment variables prefixed `LECTERN_`, nested with `__`
//!    (e.g. `LECTERN_PROXY__ORIGIN`, `LECTERN_WATERMARK__INTERVAL_MS`)
//!
//! The merged result is validated before it is returned, so a bad proxy
//! origin or an out-of-range watermark fails at startup rather than halfway
//! through generating a document.

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;
use url::Url;

pub const DEFAULT_PROXY_ORIGIN: &str = "https://engineers-babu.onrender.com";
pub const DEFAULT_PROXY_MARKER: &str = "classplus";
const ENV_PREFIX: &str = "LECTERN_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub viewer: ViewerConfig,
    pub watermark: WatermarkConfig,
    pub output: OutputConfig,
}

/// Where DRM-hosted videos are sent to be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Proxy origin; `None` (or an empty string) disables rewriting
    pub origin: Option<String>,
    /// Case-insensitive token identifying DRM-hosted URLs
    pub marker: String,
}
impl Default for ProxyConfig {
    fn default() -> Self {
        Self { origin: Some(DEFAULT_PROXY_ORIGIN.to_string()), marker: DEFAULT_PROXY_MARKER.to_string() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}
impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Heading shown at the top of the generated document
    pub title: String,
    pub subtitle: String,
    /// Initial theme of the open viewer
    pub theme: Theme,
    /// Delay before the open viewer selects its first subject
    pub autoselect_delay_ms: u64,
}
impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Lectern".to_string(),
            subtitle: "HTML VIEWER".to_string(),
            theme: Theme::Light,
            autoselect_delay_ms: 500,
        }
    }
}

/// Moving requester watermark of the protected viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkConfig {
    pub interval_ms: u64,
    pub opacity: f32,
    /// Lowest position on either axis, as a percentage of the player
    pub min_percent: u8,
    /// Highest position on either axis, as a percentage of the player
    pub max_percent: u8,
}
impl Default for WatermarkConfig {
    fn default() -> Self {
        Self { interval_ms: 3000, opacity: 0.35, min_percent: 5, max_percent: 75 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for generated documents; defaults to next to the listing
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Loads and validates the configuration from every source, with `explicit`
    /// layered above the platform config files.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(dirs) = ProjectDirs::from("", "", "lectern") {
            let dir = dirs.config_dir();
            tracing::trace!(dir = %dir.display(), "Looking for platform configuration files");
            figment = figment
                .merge(Toml::file(dir.join("config.toml")))
                .merge(Yaml::file(dir.join("config.yaml")))
                .merge(Json::file(dir.join("config.json")));
        }
        if let Some(path) = explicit {
            figment = Self::merge_file(figment, path)?;
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Loads from a single file layered over the defaults, ignoring the
    /// platform directory and environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        Self::from_figment(Self::merge_file(figment, path.as_ref())?)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()
    }

    fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
        if !path.is_file() {
            exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
        }
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        Ok(match extension.as_deref() {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
        })
    }

    /// Checks every value and normalizes the proxy origin (an empty origin
    /// becomes `None`).
    pub fn validate(mut self) -> Result<Self> {
        self.proxy.origin = match self.proxy.origin.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(origin) => Some(validate_origin(origin)?),
        };
        if self.proxy.marker.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidValue { field: "proxy.marker", value: "must not be empty".to_string() });
        }
        if self.viewer.title.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidValue { field: "viewer.title", value: "must not be empty".to_string() });
        }
        let watermark = &self.watermark;
        if watermark.interval_ms == 0 {
            exn::bail!(ErrorKind::InvalidValue {
                field: "watermark.interval_ms",
                value: "must be positive".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&watermark.opacity) {
            exn::bail!(ErrorKind::InvalidValue { field: "watermark.opacity", value: watermark.opacity.to_string() });
        }
        if watermark.max_percent > 100 || watermark.min_percent > watermark.max_percent {
            exn::bail!(ErrorKind::InvalidValue {
                field: "watermark.max_percent",
                value: format!("{}..{} is not within 0..100", watermark.min_percent, watermark.max_percent),
            });
        }
        Ok(self)
    }
}

/// An origin is a bare `http(s)` URL: host and optional path, no query,
/// fragment or credentials. Returned without a trailing slash.
fn validate_origin(origin: &str) -> Result<String> {
    let invalid =
        |reason: &str| ErrorKind::InvalidValue { field: "proxy.origin", value: format!("{origin} ({reason})") };
    let url = Url::parse(origin).or_raise(|| invalid("not a URL"))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        exn::bail!(invalid("must be an http or https URL"));
    }
    if url.query().is_some() || url.fragment().is_some() || !url.username().is_empty() || url.password().is_some() {
        exn::bail!(invalid("must not carry a query, fragment or credentials"));
    }
    Ok(origin.trim_end_matches('/').to_string())
}
