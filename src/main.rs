use clap::Parser;
use log::{error, info};
use softgl::core::Renderer;
use softgl::io::args::Cli;
use softgl::io::config_loader::TomlConfigLoader;
use softgl::io::image_output::{save_color_buffer, save_depth_buffer};
use softgl::io::obj_loader::{Model, load_obj_model};
use std::time::Instant;

/// `RUST_LOG` when set, `info` otherwise.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            builder.parse_filters(&filter);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.init();
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();
    let start_time = Instant::now();

    let settings = cli.resolve_settings().inspect_err(|e| error!("{}", e))?;

    if let Some(path) = &cli.save_config {
        TomlConfigLoader::save_to_file(&settings, path)?;
        info!("settings written to {}", path);
        return Ok(());
    }

    // A broken mesh still produces an (empty) image.
    let model = load_obj_model(&settings.obj).unwrap_or_else(|e| {
        error!("{}", e);
        Model::default()
    });

    let context = settings.transform_context();
    let mut renderer = Renderer::new(settings.width, settings.height);
    renderer.render_scene(&model, &context, settings.light_dir());

    save_color_buffer(&renderer.frame_buffer, &settings.output).inspect_err(|e| error!("{}", e))?;
    if let Some(depth_path) = &settings.depth_output {
        save_depth_buffer(&renderer.depth_buffer, depth_path).inspect_err(|e| error!("{}", e))?;
    }

    info!("done in {:?}", start_time.elapsed());
    Ok(())
}
