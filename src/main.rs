use clap::Parser;

use pixterm::cli::{draw_image, handle_config_action, Args, Command, Settings};
use pixterm::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // If --config is specified, require the file to exist.
    // Otherwise, fall back to defaults if the default config can't be used.
    let cfg = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to load config file: {}", e);
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    let settings = Settings::resolve(&args, &cfg);
    log::debug!("Effective settings: {:?}", settings);

    match args.command {
        Some(Command::Config { action }) => handle_config_action(action, args.config, &settings),
        // clap requires the image whenever no subcommand is given.
        None => {
            if let Some(image) = args.image {
                if let Err(e) = draw_image(&image, &settings) {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
