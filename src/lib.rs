//! Outlink extraction from JavaScript, for web crawlers.
//!
//! Crawlers run into JavaScript in two forms: standalone `.js` resources and
//! scripts embedded in HTML documents, in `<script>` bodies, `on*` event
//! handler attributes, and `javascript:` hrefs. This crate scans both forms
//! for URL-shaped string literals and resolves them into absolute outlinks.
//! Nothing is ever executed; links assembled at runtime by the script are
//! invisible to the scan, which is the accepted trade-off for handling
//! arbitrary code cheaply and safely.
//!
//! [`filter_document`] augments the parse of an HTML document,
//! [`parse_js_resource`] parses a fetched `.js` file from scratch, and
//! [`extract_js_links`] is the bare scanning pipeline underneath both. The
//! crawler-side registries for protocol handlers ([`ProtocolRegistry`]) and
//! refetch policies ([`FetchScheduleRegistry`]) live here as well.
//!
//! # Examples
//!
//! ```
//! use js_outlinks::extract_js_links;
//!
//! let js = r#"window.location = "files/report.pdf";"#;
//! let links = extract_js_links(js, "", "http://www.example.com/archive/");
//! assert_eq!(links.len(), 1);
//! assert_eq!(
//!     links[0].to_url(),
//!     "http://www.example.com/archive/files/report.pdf"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod parse;
mod registry;
mod scan;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, ProtocolError, ScheduleError};
pub use parse::{filter_document, parse_js_resource, Outlink, ParseResult, ParseStatus};
pub use registry::{
    AdaptiveFetchSchedule, DefaultFetchSchedule, FetchSchedule, FetchScheduleRegistry,
    FileProtocol, HttpProtocol, Protocol, ProtocolKind, ProtocolRegistry, ScheduleKind,
};
pub use run::scan_js_file;
pub use scan::extract_js_links;

// Internal run module (file-driven entry point backing the CLI)
mod run {
    use std::fs;
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::info;

    use crate::parse::Outlink;
    use crate::scan::extract_js_links;

    /// Reads a JavaScript file and extracts its outlinks.
    ///
    /// The file is decoded as UTF-8, lossily, and scanned with `base_url` as
    /// the resolution base. Fails only when the file cannot be read.
    pub fn scan_js_file(path: &Path, base_url: &str) -> Result<Vec<Outlink>> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read script file '{}'", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        info!(
            "Scanning {} ({} bytes) against base '{}'",
            path.display(),
            bytes.len(),
            base_url
        );
        Ok(extract_js_links(&text, "", base_url))
    }
}
