use serde::Deserialize;

use crate::core::{DocgenError, Result};

const CONVERTERS_YAML: &str = include_str!("../../assets/converters.yaml");

/// One protocol converter and the device models it claims to handle.
///
/// The converter catalog is maintained separately from the device catalog;
/// [`super::missing_converter_models`] cross-checks the two.
#[derive(Debug, Clone, Deserialize)]
pub struct ConverterEntry {
    /// ZCL cluster the converter consumes.
    pub cluster: String,

    /// Model numbers of the devices this converter handles.
    pub devices: Vec<String>,
}

/// Loads the converter catalog embedded in the binary.
///
/// # Errors
///
/// Returns [`DocgenError::CatalogParse`] if the embedded data is invalid.
pub fn embedded_converters() -> Result<Vec<ConverterEntry>> {
    parse_converters(CONVERTERS_YAML)
}

/// Parses a converter catalog from YAML text.
///
/// # Errors
///
/// Returns [`DocgenError::CatalogParse`] if the text is not a sequence of
/// converter entries.
pub fn parse_converters(yaml: &str) -> Result<Vec<ConverterEntry>> {
    serde_yaml::from_str(yaml).map_err(|err| DocgenError::catalog_parse("converter", err))
}
