//! z2m-docgen - Wiki page generator for the Zigbee bridge device catalog.
//!
//! Renders two documentation pages from the static device and converter
//! catalogs shipped with the bridge:
//!
//! - `Supported-devices.md`: one markdown table of supported hardware per vendor
//! - `Integrating-with-home-assistant.io.md`: Home Assistant MQTT discovery
//!   snippets for every device entity
//!
//! Generation is offline and deterministic: the same catalogs always produce
//! byte-identical pages, so regenerated output stays reviewable as a diff.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use z2m_docgen::catalog::{DeviceCatalog, embedded_converters};
//! use z2m_docgen::docs::DocsGenerator;
//!
//! # fn main() -> z2m_docgen::Result<()> {
//! let devices = DeviceCatalog::embedded()?;
//! let converters = embedded_converters()?;
//!
//! DocsGenerator::new("wiki").generate_all(&devices, &converters)?;
//! # Ok(())
//! # }
//! ```

/// Static device and converter catalogs.
pub mod catalog;

/// Core error types and result aliases.
pub mod core;

/// Documentation page rendering and generation.
pub mod docs;

/// Tracing setup for the command line binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{DocgenError, Result};
