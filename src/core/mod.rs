use std::{
    fmt,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for documentation generation.
///
/// Covers catalog parsing, discovery snippet rendering, and persisting the
/// generated pages. Converter entries referencing unknown devices are not an
/// error; they are reported through the diagnostic stream and generation
/// continues.
#[derive(Error, Debug)]
pub enum DocgenError {
    /// Catalog data failed to parse
    #[error("failed to parse {catalog} catalog: {details}")]
    CatalogParse {
        /// Which catalog failed to parse
        catalog: &'static str,
        /// Parse error details
        details: String,
    },

    /// Discovery payload could not be serialized
    #[error("failed to render discovery config: {0}")]
    Render(#[from] serde_yaml::Error),

    /// Generated page could not be written
    #[error("failed to write '{path}': {details}")]
    Write {
        /// Path of the page being written
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

/// A specialized `Result` type for docgen operations.
pub type Result<T> = result::Result<T, DocgenError>;

impl DocgenError {
    /// Creates a catalog parse error naming the catalog that failed.
    pub fn catalog_parse(catalog: &'static str, error: impl fmt::Display) -> Self {
        DocgenError::CatalogParse {
            catalog,
            details: error.to_string(),
        }
    }

    /// Creates a write error with file path context.
    pub fn write(error: impl fmt::Display, path: &Path) -> Self {
        DocgenError::Write {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
