//! Unit tests for the docs module
//!
//! Rendering of the device table, discovery snippets, and the integration
//! guide. No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use serde_yaml::{Mapping, Value};

use crate::{
    catalog::{AutomationConfig, DeviceCatalog},
    docs::{discovery_block, homeassistant_page, supported_devices_page},
};

const MIXED_VENDOR_CATALOG: &str = r#"
zeta.switch:
  model: Z1
  vendor: Zeta
  description: smart switch
  supports: on/off
alpha.bulb:
  model: A1
  vendor: Alpha
  description: white bulb
  supports: on/off, brightness
alpha.sensor:
  model: A2
  vendor: Alpha
  description: motion sensor
  supports: occupancy
"#;

fn sensor_config(pairs: &[(&str, Value)]) -> AutomationConfig {
    let mut payload = Mapping::new();
    for (key, value) in pairs {
        payload.insert(Value::from(*key), value.clone());
    }

    AutomationConfig {
        entity_type: "sensor".to_string(),
        discovery_payload: payload,
    }
}

#[test]
fn vendor_sections_are_sorted() {
    let catalog = DeviceCatalog::from_yaml(MIXED_VENDOR_CATALOG).unwrap();
    let page = supported_devices_page(&catalog);

    let alpha = page.find("### Alpha").unwrap();
    let zeta = page.find("### Zeta").unwrap();
    assert!(alpha < zeta);
}

#[test]
fn vendor_rows_keep_catalog_order() {
    let catalog = DeviceCatalog::from_yaml(MIXED_VENDOR_CATALOG).unwrap();
    let page = supported_devices_page(&catalog);

    let first = page.find("| A1 |").unwrap();
    let second = page.find("| A2 |").unwrap();
    assert!(first < second);
}

#[test]
fn device_rows_follow_the_wiki_table_shape() {
    let catalog = DeviceCatalog::from_yaml(
        "a.bulb:\n  model: A1\n  vendor: Alpha\n  description: white bulb\n  supports: on/off\n",
    )
    .unwrap();
    let page = supported_devices_page(&catalog);

    assert!(page.contains("| Model | Description | Picture |\n"));
    assert!(page.contains("| A1 | Alpha white bulb (on/off) | ![A1](images/devices/A1.jpg) |\n"));
}

#[test]
fn image_reference_replaces_first_slash() {
    let catalog = DeviceCatalog::from_yaml(
        "x.smoke:\n  model: JTYJ-GD-01LM/BW\n  vendor: Xiaomi\n  description: smoke detector\n  supports: '-'\n",
    )
    .unwrap();
    let page = supported_devices_page(&catalog);

    assert!(page.contains("| JTYJ-GD-01LM/BW |"));
    assert!(page.contains("(images/devices/JTYJ-GD-01LM-BW.jpg)"));
}

#[test]
fn planned_devices_render_like_supported_ones() {
    let catalog = DeviceCatalog::from_yaml(
        "x.leak:\n  model: SJCGQ11LM\n  vendor: Xiaomi\n  description: water leak sensor\n  supports: '-'\n",
    )
    .unwrap();
    let page = supported_devices_page(&catalog);

    assert!(page.contains("| SJCGQ11LM | Xiaomi water leak sensor (-) |"));
}

#[test]
fn discovery_block_applies_defaults() {
    let block = discovery_block(&sensor_config(&[])).unwrap();

    assert_eq!(
        block,
        "sensor:\n  - platform: mqtt\n    state_topic: zigbee2mqtt/<FRIENDLY_NAME>\n    availability_topic: zigbee2mqtt/bridge/state\n"
    );
}

#[test]
fn payload_keys_override_defaults() {
    let config = sensor_config(&[
        ("state_topic", Value::from("zigbee2mqtt/custom")),
        ("platform", Value::from("mqtt_json")),
    ]);
    let block = discovery_block(&config).unwrap();

    assert!(block.contains("state_topic: zigbee2mqtt/custom\n"));
    assert!(block.contains("platform: mqtt_json\n"));
    assert!(block.contains("availability_topic: zigbee2mqtt/bridge/state\n"));
}

#[test]
fn command_topic_follows_bridge_convention() {
    let config = sensor_config(&[("command_topic", Value::from("ignored"))]);
    let block = discovery_block(&config).unwrap();

    assert!(block.contains("command_topic: zigbee2mqtt/<FRIENDLY_NAME>/set\n"));
    assert!(!block.contains("ignored"));
}

#[test]
fn command_topic_is_not_added_when_absent() {
    let block = discovery_block(&sensor_config(&[])).unwrap();

    assert!(!block.contains("command_topic"));
}

#[test]
fn nested_payload_values_pass_through() {
    let mut device = Mapping::new();
    device.insert(Value::from("manufacturer"), Value::from("Xiaomi"));
    let config = sensor_config(&[("device", Value::Mapping(device))]);
    let block = discovery_block(&config).unwrap();

    assert!(block.contains("    device:\n      manufacturer: Xiaomi\n"));
}

#[test]
fn sequence_payload_values_pass_through() {
    let attributes = Value::Sequence(vec![Value::from("battery"), Value::from("voltage")]);
    let config = sensor_config(&[("json_attributes", attributes)]);
    let block = discovery_block(&config).unwrap();

    assert!(block.contains("json_attributes:\n"));
    assert!(block.contains("- battery\n"));
    assert!(block.contains("- voltage\n"));
}

#[test]
fn guide_separates_multiple_snippets_with_a_blank_line() {
    let catalog = DeviceCatalog::from_yaml(
        r#"
x.ht:
  model: WSDCGQ01LM
  vendor: Xiaomi
  description: temperature & humidity sensor
  supports: temperature and humidity
  homeassistant:
    - type: sensor
      discovery_payload:
        device_class: temperature
    - type: sensor
      discovery_payload:
        device_class: humidity
"#,
    )
    .unwrap();
    let page = homeassistant_page(&catalog).unwrap();

    assert!(page.contains("device_class: temperature\n\nsensor:\n"));
    assert!(page.contains("device_class: humidity\n```\n"));
}

#[test]
fn zero_config_device_keeps_heading_and_fence() {
    let catalog = DeviceCatalog::from_yaml(
        "x.leak:\n  model: SJCGQ11LM\n  vendor: Xiaomi\n  description: water leak sensor\n  supports: '-'\n  homeassistant: []\n",
    )
    .unwrap();
    let page = homeassistant_page(&catalog).unwrap();

    assert!(page.contains("### SJCGQ11LM\n```yaml\n```\n"));
}

#[test]
fn guide_renders_devices_in_catalog_order() {
    let catalog = DeviceCatalog::from_yaml(MIXED_VENDOR_CATALOG).unwrap();
    let page = homeassistant_page(&catalog).unwrap();

    let zeta = page.find("### Z1").unwrap();
    let alpha = page.find("### A1").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn repeated_renders_are_identical() {
    let catalog = DeviceCatalog::embedded().unwrap();

    assert_eq!(
        supported_devices_page(&catalog),
        supported_devices_page(&catalog)
    );
    assert_eq!(
        homeassistant_page(&catalog).unwrap(),
        homeassistant_page(&catalog).unwrap()
    );
}
