use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use ytmp3_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::load(config_path)?;

    println!("ytmp3 configuration\n");
    print!("{}", toml::to_string_pretty(&config)?);

    println!("\n# Effective output templates");
    println!("#   playlist: {}", config.output.playlist_output());
    println!("#   video:    {}", config.output.video_output());

    // Show config file locations
    println!("\nConfig file locations (in priority order):");
    if let Some(p) = config_path {
        println!("  1. {} (specified)", p.display());
    }
    if let Some(default_config) = Config::default_path() {
        println!("  2. {}", default_config.display());
    }
    println!("  3. Environment variables (YTMP3_*, nested keys split on __)");

    Ok(ExitCode::SUCCESS)
}
