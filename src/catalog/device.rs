use serde::Deserialize;
use serde_yaml::Mapping;

/// Static description of one supported hardware model.
///
/// Descriptors are loaded once from the embedded catalog and never mutated
/// afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDescriptor {
    /// Manufacturer model number, unique across the catalog.
    pub model: String,

    /// Vendor name; groups the supported devices page.
    pub vendor: String,

    /// Human-readable device description.
    pub description: String,

    /// Summary of the supported functionality, or the literal `-` for
    /// devices that are planned but not yet supported.
    pub supports: String,

    /// Home Assistant entities exposed for this device, in catalog order.
    #[serde(default)]
    pub homeassistant: Vec<AutomationConfig>,
}

/// One Home Assistant entity definition attached to a device.
#[derive(Debug, Clone, Deserialize)]
pub struct AutomationConfig {
    /// Entity type, e.g. `sensor`, `binary_sensor`, `switch` or `light`.
    #[serde(rename = "type")]
    pub entity_type: String,

    /// MQTT discovery payload. The schema is open; values are overlaid on
    /// the generator defaults when the snippet is rendered.
    #[serde(default)]
    pub discovery_payload: Mapping,
}
