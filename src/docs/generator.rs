use std::{fs, path::PathBuf};

use tracing::{info, warn};

use crate::{
    catalog::{ConverterEntry, DeviceCatalog, missing_converter_models},
    core::{DocgenError, Result},
    docs::markdown,
};

/// File name of the generated device table page.
pub const SUPPORTED_DEVICES_FILE: &str = "Supported-devices.md";

/// File name of the generated Home Assistant guide page.
pub const HOMEASSISTANT_FILE: &str = "Integrating-with-home-assistant.io.md";

/// Generates the documentation pages for a device catalog.
///
/// Renders markdown from the device and converter catalogs and writes the
/// result into the configured output directory.
pub struct DocsGenerator {
    output_dir: PathBuf,
}

impl DocsGenerator {
    /// Creates a generator writing into `output_dir`.
    ///
    /// The directory must already exist; writes fail otherwise.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Generates every documentation page.
    ///
    /// Runs the converter consistency check first. A converter referencing a
    /// model without a descriptor is reported and generation continues with
    /// the device catalog as source of truth.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Write`] if a page cannot be persisted and
    /// [`DocgenError::Render`] if a discovery payload cannot be serialized.
    /// A failed write aborts before the remaining pages are attempted.
    pub fn generate_all(
        &self,
        devices: &DeviceCatalog,
        converters: &[ConverterEntry],
    ) -> Result<()> {
        for model in missing_converter_models(devices, converters) {
            warn!("{model} is referenced by a converter but missing from the device catalog");
        }

        self.generate_supported_devices(devices)?;
        self.generate_homeassistant_guide(devices)?;

        Ok(())
    }

    /// Generates the supported devices page and returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Write`] if the page cannot be persisted.
    pub fn generate_supported_devices(&self, devices: &DeviceCatalog) -> Result<PathBuf> {
        self.write_page(
            SUPPORTED_DEVICES_FILE,
            &markdown::supported_devices_page(devices),
        )
    }

    /// Generates the Home Assistant integration guide and returns the
    /// written path.
    ///
    /// # Errors
    ///
    /// Returns [`DocgenError::Render`] if a discovery payload cannot be
    /// serialized and [`DocgenError::Write`] if the page cannot be persisted.
    pub fn generate_homeassistant_guide(&self, devices: &DeviceCatalog) -> Result<PathBuf> {
        let page = markdown::homeassistant_page(devices)?;
        self.write_page(HOMEASSISTANT_FILE, &page)
    }

    fn write_page(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, content).map_err(|err| DocgenError::write(err, &path))?;

        info!("generated {}", path.display());
        Ok(path)
    }
}
