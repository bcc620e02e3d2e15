//! # Badge Link
//!
//! Drive a B1248 scrolling LED name badge over USB serial.
//!
//! Encodes a text message into the badge's fixed binary command protocol and
//! pushes the frames out through the serial port, pausing after each one so
//! the firmware can execute the command before the next arrives.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use badge_link::config::Config;
use badge_link::serial::open_badge_port;
use badge_link::transmit::Transmitter;

#[derive(Parser, Debug)]
#[command(name = "badge-link")]
#[command(version)]
#[command(
    about = "Drive a B1248 scrolling LED name badge over USB serial",
    after_help = "Examples:\n  badge-link text \"hello world\"\n  badge-link text hello --speed 3 --mode C\n  badge-link mirror hello --port /dev/ttyUSB0\n  badge-link clear"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Serial device path (overrides the configuration file)
    #[arg(short, long, global = true)]
    port: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display text on the LED screen
    Text {
        /// Text to display (truncated to 250 characters)
        text: String,

        /// Scroll speed, 0-9
        #[arg(short, long)]
        speed: Option<u8>,

        /// Display mode letter (e.g. A, B)
        #[arg(short, long)]
        mode: Option<char>,
    },

    /// Display mirrored text on the LED screen (for viewing through a mirror)
    #[command(alias = "mirror-text")]
    Mirror {
        /// Text to mirror, lowercase letters only
        text: String,

        /// Scroll speed, 0-9
        #[arg(short, long)]
        speed: Option<u8>,

        /// Display mode letter (e.g. A, B)
        #[arg(short, long)]
        mode: Option<char>,
    },

    /// Clear the LED screen
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let port_path = cli.port.as_deref().unwrap_or(&config.serial.port);
    let port = open_badge_port(port_path, config.serial.baud_rate)?;
    let mut transmitter = Transmitter::new(port);

    match cli.command {
        Commands::Text { text, speed, mode } => {
            let speed = speed.unwrap_or(config.display.speed);
            let mode = mode.unwrap_or(config.display.mode);

            info!("Writing '{}' to display", text);
            transmitter.send_text(&text, speed, mode).await?;
            info!("Done");
        }
        Commands::Mirror { text, speed, mode } => {
            let speed = speed.unwrap_or(config.display.speed);
            let mode = mode.unwrap_or(config.display.mode);

            info!("Writing mirror of '{}' to display", text);
            transmitter.send_mirrored(&text, speed, mode).await?;
            info!("Done");
        }
        Commands::Clear => {
            info!("Clearing the display");
            transmitter.clear().await?;
            info!("Done");
        }
    }

    Ok(())
}
