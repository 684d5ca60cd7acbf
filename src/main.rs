mod config;
mod discord;
mod error;
mod events;
mod log;
mod picker;
mod tui;

use chrono::Local;

use config::Config;
use discord::{PostOutcome, post_dates};
use error::{ConfigError, WhenNextError};
use picker::DatePicker;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments and config file; clap prints usage errors itself
    let config = match Config::from_args(std::env::args_os()) {
        Err(ConfigError::Cli(e)) => e.exit(),
        other => other.map_err(WhenNextError::from)?,
    };

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    run(&config).await?;
    Ok(())
}

async fn run(config: &Config) -> error::Result<()> {
    log::log(&format!("Config: {}", config.summary()));

    let mut picker = DatePicker::starting_today().with_layout(config.layout.clone());
    let end = tui::run_session(&mut picker).await?;
    log::log(&format!("Session ended: {:?}", end));

    let dates = picker.selected_dates()?;
    if !dates.is_empty() {
        println!("Sending webhook...");
    }

    match post_dates(config, &dates).await? {
        PostOutcome::Skipped => println!("No dates selected, nothing to send."),
        PostOutcome::Posted(Some(message)) => {
            log::log(&format!(
                "Created message {} in channel {}",
                message.id,
                message.channel_id.map(|id| id.to_string()).unwrap_or_default()
            ));
            match message.id.timestamp() {
                Some(created) => println!(
                    "Poll posted (message {}, created {}).",
                    message.id,
                    created.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ),
                None => println!("Poll posted (message {}).", message.id),
            }
        }
        PostOutcome::Posted(None) => println!("Poll posted."),
    }

    Ok(())
}
