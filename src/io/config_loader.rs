use crate::io::render_settings::RenderSettings;
use log::debug;
use std::path::Path;

/// TOML front end for [`RenderSettings`].
pub struct TomlConfigLoader;

impl TomlConfigLoader {
    /// Reads and validates a settings file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RenderSettings, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config file {:?}: {}", path, e))?;
        debug!("parsing config file {:?}", path);
        Self::load_from_content(&content)
    }

    pub fn load_from_content(content: &str) -> Result<RenderSettings, String> {
        let settings: RenderSettings =
            toml::from_str(content).map_err(|e| format!("invalid TOML config: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes `settings` as TOML, e.g. to seed a config file from the defaults.
    pub fn save_to_file<P: AsRef<Path>>(settings: &RenderSettings, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(settings)
            .map_err(|e| format!("cannot serialize settings: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write config file {:?}: {}", path, e))
    }
}
