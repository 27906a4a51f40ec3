use clap::Parser;
use holonet::core::config::{self, CliOverrides};
use holonet::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "holonet", about = "Star Wars character browser")]
struct Args {
    /// SWAPI base URL (overrides config and HOLONET_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Run without sound
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(parsed) => (parsed, None),
        Err(e) => (config::HolonetConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        mute: args.mute,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("holonet.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match config_error {
        Some(e) => log::warn!("Ignoring config file, using defaults: {}", e),
        None => {
            if let Some(path) = config::config_path() {
                log::info!("Config path: {}", path.display());
            }
        }
    }
    log::info!(
        "Holonet starting up against {} (audio: {})",
        resolved.base_url,
        if resolved.audio.enabled { "on" } else { "off" }
    );

    tui::run(resolved)
}
