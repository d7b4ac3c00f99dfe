//! Static device and converter catalogs.
//!
//! Both catalogs are YAML documents embedded at compile time: the device
//! catalog maps internal Zigbee identifiers to device descriptors, the
//! converter catalog lists which models each protocol converter handles.
//! Records are immutable once loaded; everything downstream is a pure fold
//! over them.

mod converter;
mod device;
mod validate;


pub use converter::{ConverterEntry, embedded_converters, parse_converters};
pub use device::{AutomationConfig, DeviceDescriptor};
pub use validate::missing_converter_models;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::{DocgenError, Result};

const DEVICES_YAML: &str = include_str!("../../assets/devices.yaml");

/// Ordered catalog of supported devices, keyed by internal device identifier.
///
/// Iteration follows the order entries appear in the catalog file. Vendor
/// grouping and the sorted vendor list derived here are what keep the
/// generated pages stable between runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct DeviceCatalog {
    devices: IndexMap<String, DeviceDescriptor>,
}

impl DeviceCatalog {
    /// Loads the device catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::CatalogParse`] if the embedded data is invalid.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(DEVICES_YAML)
    }

    /// Parses a device catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::CatalogParse`] if the text is not a mapping of
    /// device identifiers to descriptors.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|err| DocgenError::catalog_parse("device", err))
    }

    /// Number of devices in the catalog.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the catalog contains no devices.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Devices in catalog order.
    pub fn devices(&self) -> impl Iterator<Item = &DeviceDescriptor> {
        self.devices.values()
    }

    /// Whether any descriptor carries the given model number.
    pub fn contains_model(&self, model: &str) -> bool {
        self.devices.values().any(|device| device.model == model)
    }

    /// Distinct vendor names, sorted lexicographically.
    pub fn vendors(&self) -> Vec<&str> {
        let mut vendors: Vec<&str> = self
            .devices
            .values()
            .map(|device| device.vendor.as_str())
            .collect();
        vendors.sort_unstable();
        vendors.dedup();
        vendors
    }

    /// Devices of one vendor, in catalog order.
    pub fn by_vendor(&self, vendor: &str) -> Vec<&DeviceDescriptor> {
        self.devices
            .values()
            .filter(|device| device.vendor == vendor)
            .collect()
    }
}
