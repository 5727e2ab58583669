//! Protocol handlers keyed by URL scheme.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use url::Url;

use crate::config::Config;
use crate::error_handling::ProtocolError;

/// A fetch protocol implementation, advertised by the URL schemes it serves.
pub trait Protocol: Debug + Send + Sync {
    /// Short name of the handler, for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// URL schemes this handler serves.
    fn schemes(&self) -> &'static [&'static str];
}

/// The built-in protocol handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ProtocolKind {
    /// Plain and TLS HTTP.
    Http,
    /// Local filesystem access.
    File,
}

impl ProtocolKind {
    fn construct(self) -> Arc<dyn Protocol> {
        match self {
            ProtocolKind::Http => Arc::new(HttpProtocol),
            ProtocolKind::File => Arc::new(FileProtocol),
        }
    }
}

/// Handler for `http` and `https` URLs.
#[derive(Debug)]
pub struct HttpProtocol;

impl Protocol for HttpProtocol {
    fn name(&self) -> &'static str {
        "http"
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["http", "https"]
    }
}

/// Handler for `file` URLs.
#[derive(Debug)]
pub struct FileProtocol;

impl Protocol for FileProtocol {
    fn name(&self) -> &'static str {
        "file"
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["file"]
    }
}

/// Maps URL schemes to protocol handlers.
///
/// Every handler is constructed exactly once, when the registry is built;
/// lookups only hand out shared references.
#[derive(Debug)]
pub struct ProtocolRegistry {
    by_scheme: HashMap<&'static str, Arc<dyn Protocol>>,
}

impl ProtocolRegistry {
    /// Builds a registry over the handler kinds enabled in `config`.
    pub fn from_config(config: &Config) -> Result<Self, ProtocolError> {
        Self::with_kinds(&config.protocols)
    }

    /// Builds a registry over the given handler kinds.
    ///
    /// Fails when two handlers claim the same scheme.
    pub fn with_kinds(kinds: &[ProtocolKind]) -> Result<Self, ProtocolError> {
        let mut by_scheme: HashMap<&'static str, Arc<dyn Protocol>> = HashMap::new();
        for kind in kinds {
            let handler = kind.construct();
            for &scheme in handler.schemes() {
                if by_scheme.insert(scheme, Arc::clone(&handler)).is_some() {
                    return Err(ProtocolError::DuplicateScheme(scheme.to_string()));
                }
                debug!(
                    "Registered protocol handler '{}' for scheme '{}'",
                    handler.name(),
                    scheme
                );
            }
        }
        Ok(Self { by_scheme })
    }

    /// Looks up the handler responsible for a URL by its scheme.
    pub fn lookup(&self, url: &str) -> Result<Arc<dyn Protocol>, ProtocolError> {
        let parsed = Url::parse(url).map_err(|source| ProtocolError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        self.by_scheme
            .get(parsed.scheme())
            .cloned()
            .ok_or_else(|| ProtocolError::NotFound(parsed.scheme().to_string()))
    }
}

impl Default for ProtocolRegistry {
    /// Registry over every built-in handler.
    fn default() -> Self {
        let kinds: Vec<ProtocolKind> = ProtocolKind::iter().collect();
        Self::with_kinds(&kinds).unwrap_or_else(|e| {
            panic!(
                "Failed to register built-in protocol handlers: {}. This is a programming error.",
                e
            )
        })
    }
}
