use anyhow::Result;
use std::path::Path;
use std::process::{Command, ExitCode};
use which::which;
use ytmp3_core::config::{python_has_yt_dlp, Config};

pub async fn run(config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::load(config_path)?;

    println!("ytmp3 dependency check\n");

    let mut all_ok = true;

    // Check yt-dlp (binary or Python module)
    print!("yt-dlp:  ");
    match config.yt_dlp_command() {
        Ok(command) => match command.version().await {
            Ok(version) => println!("OK ({}, {})", version, command),
            Err(e) => {
                println!("FOUND ({}) but failed to get version: {}", command, e);
                all_ok = false;
            }
        },
        Err(_) => {
            println!("NOT FOUND");
            println!("         Install with: pip install yt-dlp");
            if let Ok(python) = which("python3") {
                if !python_has_yt_dlp(&python) {
                    println!("         ({} has no yt_dlp module)", python.display());
                }
            }
            all_ok = false;
        }
    }

    // Check FFmpeg, needed by yt-dlp to extract audio
    print!("ffmpeg:  ");
    match which("ffmpeg") {
        Ok(path) => match Command::new(&path).arg("-version").output() {
            Ok(out) => {
                let first_line = String::from_utf8_lossy(&out.stdout)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .to_string();
                // Extract just version number
                let version_part = first_line.split_whitespace().nth(2).unwrap_or("unknown");
                println!("OK ({})", version_part);
            }
            Err(_) => {
                println!("FOUND but failed to get version");
                all_ok = false;
            }
        },
        Err(_) => {
            println!("NOT FOUND");
            println!("         Install with your package manager, e.g. apt install ffmpeg");
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("All dependencies OK!");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Some dependencies are missing. See above for installation instructions.");
        Ok(ExitCode::FAILURE)
    }
}
