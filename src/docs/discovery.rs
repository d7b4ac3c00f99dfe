use serde_yaml::{Mapping, Value};

use crate::{catalog::AutomationConfig, core::Result};

/// Platform every discovery snippet is rendered for unless the payload
/// overrides it.
const PLATFORM: &str = "mqtt";

/// Topic the bridge publishes device state on.
const STATE_TOPIC: &str = "zigbee2mqtt/<FRIENDLY_NAME>";

/// Topic the bridge publishes its own availability on.
const AVAILABILITY_TOPIC: &str = "zigbee2mqtt/bridge/state";

/// Command topic convention owned by the bridge. Authored values are
/// discarded; outbound commands always go through this topic.
const COMMAND_TOPIC: &str = "zigbee2mqtt/<FRIENDLY_NAME>/set";

/// Renders one automation config as a YAML block headed by its entity type.
///
/// The authored discovery payload is overlaid on the generator defaults
/// (payload keys win, nested values pass through untouched), `command_topic`
/// is forced to the bridge convention, and the merged mapping is framed as a
/// one-element sequence under the entity type:
///
/// ```yaml
/// sensor:
///   - platform: mqtt
///     state_topic: zigbee2mqtt/<FRIENDLY_NAME>
///     availability_topic: zigbee2mqtt/bridge/state
/// ```
///
/// The block ends with a newline and embeds directly into a fenced section
/// of the integration guide.
///
/// # Errors
///
/// Returns [`crate::DocgenError::Render`] if the merged payload cannot be
/// serialized as YAML.
pub fn discovery_block(config: &AutomationConfig) -> Result<String> {
    let payload = merged_payload(config);
    let yaml = serde_yaml::to_string(&[Value::Mapping(payload)])?;

    let mut block = String::with_capacity(config.entity_type.len() + yaml.len() * 2);
    block.push_str(&config.entity_type);
    block.push_str(":\n");

    for line in yaml.lines() {
        if line.is_empty() {
            block.push('\n');
        } else {
            block.push_str("  ");
            block.push_str(line);
            block.push('\n');
        }
    }

    Ok(block)
}

/// Shallow merge of the generator defaults and the authored payload.
fn merged_payload(config: &AutomationConfig) -> Mapping {
    let mut payload = Mapping::new();
    payload.insert(Value::from("platform"), Value::from(PLATFORM));
    payload.insert(Value::from("state_topic"), Value::from(STATE_TOPIC));
    payload.insert(
        Value::from("availability_topic"),
        Value::from(AVAILABILITY_TOPIC),
    );

    for (key, value) in &config.discovery_payload {
        payload.insert(key.clone(), value.clone());
    }

    let command_topic = Value::from("command_topic");
    if let Some(value) = payload.get_mut(&command_topic) {
        *value = Value::from(COMMAND_TOPIC);
    }

    payload
}
