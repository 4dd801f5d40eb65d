use crate::io::config_loader::TomlConfigLoader;
use crate::io::render_settings::RenderSettings;
use clap::Parser;
use log::info;

/// Command line of the renderer. Every option overrides the config file.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "softgl")]
#[command(about = "Software rasterizer: renders a textured OBJ mesh to an image file")]
pub struct Cli {
    /// Wavefront OBJ mesh to render
    #[arg(value_name = "OBJ")]
    pub obj: Option<String>,

    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Color output image; the format follows the extension
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Also write the depth buffer as a grayscale image
    #[arg(long, value_name = "FILE")]
    pub depth_output: Option<String>,

    /// Write the effective settings as TOML and exit
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<String>,
}

impl Cli {
    /// Loads the config file if one was given, then applies the overrides.
    pub fn resolve_settings(&self) -> Result<RenderSettings, String> {
        let mut settings = match &self.config {
            Some(path) => {
                info!("loading config file: {}", path);
                TomlConfigLoader::load_from_file(path)
                    .map_err(|e| format!("config file {} rejected: {}", path, e))?
            }
            None => RenderSettings::default(),
        };
        self.apply_to(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut RenderSettings) {
        if let Some(obj) = &self.obj {
            settings.obj = obj.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if let Some(depth_output) = &self.depth_output {
            settings.depth_output = Some(depth_output.clone());
        }
    }
}
