//! Viewer document generation.
//!
//! A document is assembled from the embedded `templates/viewer.html` [upon]
//! template. The engine's default formatter HTML-escapes every interpolated
//! value, so titles from the listing can't inject markup. Only the embedded
//! stylesheets, the embedded runtime and the script-escaped JSON blocks are
//! written verbatim, through the `raw` formatter.
//!
//! # Template Variables
//!
//! | Variable       | Type     | Description                                   |
//! |----------------|----------|-----------------------------------------------|
//! | `title`        | `String` | Heading and `<title>` of the document         |
//! | `subtitle`     | `String` | Small caption under the heading               |
//! | `has_subtitle` | `bool`   | Whether `subtitle` is non-empty               |
//! | `variant`      | `String` | `open` or `protected`                         |
//! | `protected`    | `bool`   | Whether the protected layout is used          |
//! | `theme`        | `String` | Initial theme class of `<body>`               |
//! | `watermark`    | `String` | Watermark label (empty for the open viewer)   |
//! | `styles`       | `String` | Base stylesheet followed by the variant's     |
//! | `catalog`      | `String` | Script-escaped catalog JSON                   |
//! | `settings`     | `String` | Script-escaped runtime settings JSON          |
//! | `runtime`      | `String` | Core runtime followed by the variant's        |

use crate::assets::Assets;
use crate::embed::script_json;
use crate::error::{ErrorKind, Result};
use crate::guard::{KeyGuard, Requester, Watermark};
use crate::session::BootPlan;
use exn::ResultExt;
use lectern_catalog::Catalog;
use lectern_config::{Config, ViewerConfig, WatermarkConfig};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::instrument;
use upon::{Engine, Template};

const TEMPLATE: &str = "templates/viewer.html";

/// Which viewer to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Full three-section viewer with search and theme toggle.
    Open,
    /// Minimal autoplaying viewer, watermarked for the requester.
    Protected(Requester),
}
impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Protected(_) => "protected",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Protected(_))
    }

    pub fn requester(&self) -> Option<&Requester> {
        match self {
            Self::Open => None,
            Self::Protected(requester) => Some(requester),
        }
    }

    fn styles(&self) -> [&'static str; 2] {
        match self {
            Self::Open => ["styles/base.css", "styles/open.css"],
            Self::Protected(_) => ["styles/base.css", "styles/protected.css"],
        }
    }

    fn runtime(&self) -> [&'static str; 2] {
        match self {
            Self::Open => ["runtime/core.js", "runtime/open.js"],
            Self::Protected(_) => ["runtime/core.js", "runtime/protected.js"],
        }
    }
}
impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Runtime settings embedded next to the catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Settings {
    variant: &'static str,
    theme: &'static str,
    boot: BootPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    watermark: Option<Watermark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    guard: Option<KeyGuard>,
    lock_landscape: bool,
}

/// A generated, self-contained HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}
impl Document {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.html.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.html
    }
}

/// Renders catalogs into viewer documents.
///
/// The template is compiled once, on construction, so a broken template
/// surfaces before any listing is read. Generation itself has no side
/// effects: the same catalog and variant always produce the same bytes.
pub struct Generator {
    engine: Engine<'static>,
    template: Template<'static>,
    viewer: ViewerConfig,
    watermark: WatermarkConfig,
}
impl Generator {
    pub fn new(viewer: ViewerConfig, watermark: WatermarkConfig) -> Result<Self> {
        let mut engine = Engine::new();
        addons::configure(&mut engine);
        let source = Assets::text(TEMPLATE)?;
        let template = engine.compile(source.into_owned()).or_raise(|| ErrorKind::Template)?;
        Ok(Self { engine, template, viewer, watermark })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.viewer.clone(), config.watermark.clone())
    }

    #[instrument(skip_all, fields(variant = %variant, subjects = catalog.folders().len()))]
    pub fn generate(&self, catalog: &Catalog, variant: &Variant) -> Result<Document> {
        let settings = self.settings(catalog, variant);
        let label = settings.watermark.as_ref().map(|w| w.label.clone()).unwrap_or_default();
        let styles = Assets::concat(&variant.styles())?;
        let runtime = Assets::concat(&variant.runtime())?;
        let catalog = script_json(catalog)?;
        let settings = script_json(&settings)?;
        let html = self
            .template
            .render(
                &self.engine,
                upon::value! {
                    title: &self.viewer.title,
                    subtitle: &self.viewer.subtitle,
                    has_subtitle: !self.viewer.subtitle.is_empty(),
                    variant: variant.as_str(),
                    protected: variant.is_protected(),
                    theme: self.viewer.theme.as_str(),
                    watermark: label,
                    styles: styles,
                    catalog: catalog,
                    settings: settings,
                    runtime: runtime,
                },
            )
            .to_string()
            .or_raise(|| ErrorKind::Template)?;
        tracing::debug!(bytes = html.len(), "Viewer document rendered");
        Ok(Document { html })
    }

    fn settings(&self, catalog: &Catalog, variant: &Variant) -> Settings {
        let boot = match variant {
            Variant::Open => BootPlan::open(catalog, self.viewer.autoselect_delay_ms),
            Variant::Protected(_) => BootPlan::protected(catalog),
        };
        Settings {
            variant: variant.as_str(),
            theme: self.viewer.theme.as_str(),
            boot,
            watermark: variant.requester().map(|r| Watermark::new(r, &self.watermark)),
            guard: variant.is_protected().then(KeyGuard::default),
            lock_landscape: variant.is_protected(),
        }
    }
}

/// Custom [`upon`] extensions for HTML output.
mod addons {
    use std::fmt::Write;
    use upon::{Engine, Value, fmt as upon_fmt};

    /// Writes strings through unescaped. Only used for content the generator
    /// controls or has already escaped for its context.
    fn raw_formatter(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::String(s) => f.write_str(s)?,
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    /// Default formatter: strings are HTML-escaped so they are safe both as
    /// element text and inside quoted attribute values.
    fn escape_html(f: &mut upon_fmt::Formatter<'_>, value: &Value) -> upon_fmt::Result {
        match value {
            Value::String(s) => {
                for c in s.chars() {
                    match c {
                        '&' => f.write_str("&amp;")?,
                        '<' => f.write_str("&lt;")?,
                        '>' => f.write_str("&gt;")?,
                        '"' => f.write_str("&quot;")?,
                        '\'' => f.write_str("&#39;")?,
                        c => f.write_char(c)?,
                    }
                }
            },
            v => upon_fmt::default(f, v)?,
        };
        Ok(())
    }

    /// Escapes every value by default and registers the `raw` formatter.
    pub(crate) fn configure(engine: &mut Engine<'_>) {
        engine.set_default_formatter(&escape_html);
        engine.add_formatter("raw", raw_formatter);
    }
}
