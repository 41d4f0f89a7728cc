//! Cross-category state derived from the general configuration.

use ferrite_config::GeneralConfig;
use std::path::Path;

/// Library paths shared by the model-assigning categories.
///
/// Built from [`GeneralConfig`] before any category runs; the general
/// category mutates nothing on the design itself.
#[derive(Debug, Default)]
pub(crate) struct ApplyContext {
    spice_model_library: String,
    s_parameter_library: String,
}

impl ApplyContext {
    pub(crate) fn from_general(general: &GeneralConfig) -> Self {
        Self {
            spice_model_library: general.spice_model_library.clone(),
            s_parameter_library: general.s_parameter_library.clone(),
        }
    }

    /// Resolves a SPICE model file name against the configured library.
    pub(crate) fn resolve_spice_file(&self, file: &str) -> String {
        resolve(&self.spice_model_library, file)
    }

    /// Resolves a Touchstone file name against the configured library.
    pub(crate) fn resolve_s_parameter_file(&self, file: &str) -> String {
        resolve(&self.s_parameter_library, file)
    }
}

fn resolve(library: &str, file: &str) -> String {
    if library.is_empty() || Path::new(file).is_absolute() {
        return file.to_string();
    }
    Path::new(library).join(file).to_string_lossy().into_owned()
}
