//! schemer-engine: Headless engine for the schemer color-scheme explorer
//!
//! This crate provides the core logic for schemer, including:
//! - Configuration
//! - Scheme fetching over a pluggable transport
//! - Wire decoding of the color API's scheme responses
//! - Once-populated mode discovery
//! - The session context shared by the TUI and CLI

pub mod color;
pub mod config;
pub mod fetcher;
pub mod modes;
pub mod scheme;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use color::{parse_rgb, random_hex, strip_marker};
pub use config::{Config, ConfigError};
pub use fetcher::{SchemeError, SchemeFetcher};
pub use modes::{capitalize_first, ModeCatalog, ModeOption};
pub use scheme::{ColorEntry, SchemeResponse};
pub use session::{Applied, SchemeSession};
pub use transport::{CurlTransport, Transport};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
