use std::collections::BTreeSet;

use super::{ConverterEntry, DeviceCatalog};

/// Returns converter-referenced model numbers that have no device descriptor.
///
/// The two catalogs drift independently, and a converter claiming a model
/// without a descriptor would make the supported devices page lie about what
/// the bridge handles. The result is sorted and deduplicated so diagnostics
/// are stable between runs. An inconsistency is advisory: callers report it
/// and keep generating from the device catalog as source of truth.
pub fn missing_converter_models(
    catalog: &DeviceCatalog,
    converters: &[ConverterEntry],
) -> Vec<String> {
    let referenced: BTreeSet<&str> = converters
        .iter()
        .flat_map(|converter| converter.devices.iter().map(String::as_str))
        .collect();

    referenced
        .into_iter()
        .filter(|model| !catalog.contains_model(model))
        .map(str::to_owned)
        .collect()
}
