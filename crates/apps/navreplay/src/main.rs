//! navreplay - replays move-back navigation scenarios
//!
//! Usage: `navreplay [--user-settings] <scenario.json>...`
//!
//! Prints one JSON line per scenario with the resolver's decision. Exits with
//! status 1 when a scenario's expected outcome is not met and 2 when a
//! scenario cannot be loaded or the arguments are invalid.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use mailnav::{MailSettings, Scenario};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "navreplay", version, about = "Replay move-back navigation scenarios")]
struct Args {
    /// Resolve with the user's mail settings instead of the scenario's
    #[arg(long)]
    user_settings: bool,

    /// Scenario files to replay
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,
}

fn run(args: Args) -> Result<bool> {
    let user_settings = if args.user_settings {
        let settings = MailSettings::load()?;
        if let Some(path) = MailSettings::default_settings_path() {
            info!("Using mail settings from {}", path.display());
        }
        Some(settings)
    } else {
        None
    };

    let mut all_met = true;
    for path in &args.scenarios {
        let mut scenario = Scenario::from_file(path)
            .with_context(|| format!("Failed to load scenario: {}", path.display()))?;
        if let Some(settings) = &user_settings {
            scenario.settings = settings.clone();
        }

        let decision = scenario.resolve();
        let met = scenario.expect.map(|expect| expect.is_met_by(&decision));
        if met == Some(false) {
            warn!(
                "Scenario {} expected {:?}, got {}",
                path.display(),
                scenario.expect,
                decision
            );
            all_met = false;
        }

        let line = serde_json::json!({
            "scenario": scenario.name.clone().unwrap_or_else(|| path.display().to_string()),
            "result": decision,
            "expectation_met": met,
        });
        println!("{}", line);
    }
    Ok(all_met)
}

fn main() -> ExitCode {
    // Usage errors exit with status 2
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}
