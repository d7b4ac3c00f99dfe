use crate::{
    catalog::{DeviceCatalog, DeviceDescriptor},
    core::Result,
    docs::discovery::discovery_block,
};

const GENERATED_NOTE: &str = "*NOTE: Automatically generated by `generate-docs`*\n";

const SUPPORTED_DEVICES_INTRO: &str = "\nIn case your device is **NOT** listed here, \
please create an issue at: https://github.com/Koenkk/zigbee2mqtt/issues\n\n";

const TABLE_HEADER: &str =
    "| Model | Description | Picture |\n| ------------- | ------------- | -------------------------- |\n";

const DISCOVERY_INTRO: &str = r#"The easiest way to integrate zigbee2mqtt with home assistant is by using [MQTT discovery](https://www.home-assistant.io/docs/mqtt/discovery/). To enable MQTT discovery set `homeassistant_discovery: true` in your zigbee2mqtt `configuration.yaml` and add the following to your home assistant `configuration.yaml`.
```yaml
mqtt:
  discovery: true
```


To respond to button clicks you can use the following home assistant configuration:
```yaml
automation:
  - alias: Respond to button clicks
    trigger:
      platform: mqtt
      topic: 'zigbee2mqtt/<FRIENDLY_NAME>'
    condition:
      condition: template
      value_template: "{{ 'single' == trigger.payload_json.click }}"
    action:
      entity_id: light.bedroom
      service: light.toggle
```
In case you **don't** want to use home assistants MQTT discovery you can use the configuration below.

"#;

/// Renders the supported devices page.
///
/// One `### <vendor>` section per vendor in lexicographic order, each with a
/// markdown table of that vendor's devices in catalog order. Devices with
/// the `-` support sentinel render like any other row.
pub fn supported_devices_page(catalog: &DeviceCatalog) -> String {
    let mut page = String::from(GENERATED_NOTE);
    page.push_str(SUPPORTED_DEVICES_INTRO);

    for vendor in catalog.vendors() {
        page.push_str(&format!("### {vendor}\n"));
        page.push_str(&device_table(&catalog.by_vendor(vendor)));
        page.push('\n');
    }

    page
}

fn device_table(devices: &[&DeviceDescriptor]) -> String {
    let mut table = String::from(TABLE_HEADER);

    for device in devices {
        // Models may carry a '/' as part of the part number; the image file
        // name replaces the first one to stay filesystem safe.
        let image = device.model.replacen('/', "-", 1);
        table.push_str(&format!(
            "| {} | {} {} ({}) | ![{}](images/devices/{}.jpg) |\n",
            device.model, device.vendor, device.description, device.supports, device.model, image
        ));
    }

    table
}

/// Renders the Home Assistant integration guide.
///
/// Static discovery instructions followed by one `### <model>` section per
/// device in catalog order, each holding a fenced YAML block with the
/// device's discovery snippets. A device without snippets still gets its
/// heading and an empty fence.
///
/// # Errors
///
/// Returns [`crate::DocgenError::Render`] if a discovery payload cannot be
/// serialized.
pub fn homeassistant_page(catalog: &DeviceCatalog) -> Result<String> {
    let mut page = String::from(GENERATED_NOTE);
    page.push('\n');
    page.push_str(DISCOVERY_INTRO);

    for device in catalog.devices() {
        page.push_str(&format!("### {}\n", device.model));
        page.push_str("```yaml\n");

        let configs = &device.homeassistant;
        for (index, config) in configs.iter().enumerate() {
            page.push_str(&discovery_block(config)?);
            if configs.len() > 1 && index < configs.len() - 1 {
                page.push('\n');
            }
        }

        page.push_str("```\n\n");
    }

    Ok(page)
}
