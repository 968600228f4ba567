//! Entry point for **yabai-scratchpad**.
//!
//! The only supported invocation is `yabai-scratchpad --toggle <name>`.
//! Errors are printed as a single line on stdout and exit with status 1.

use clap::Parser;
use log::{debug, info};
use yabai_scratchpad::config::Config;
use yabai_scratchpad::env::SystemEnvironment;
use yabai_scratchpad::launch::ProcessLauncher;
use yabai_scratchpad::poll::SystemClock;
use yabai_scratchpad::toggle::Toggler;
use yabai_scratchpad::yabai::{UnixSocketTransport, Yabai};
use yabai_scratchpad::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "yabai-scratchpad")]
#[command(about = "Toggle scratchpad windows managed by yabai")]
struct Cli {
    /// Name of the scratchpad to toggle.
    #[arg(long, value_name = "scratchpad-name")]
    toggle: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        debug!("toggle failed: {:?}", e);
        println!("{}", report(&e));
        std::process::exit(1);
    }
}

/// The one-line message printed for a failed invocation.
///
/// Usage and lookup errors are shown as-is; everything else is unexpected.
fn report(e: &Error) -> String {
    match e {
        Error::InvalidArguments | Error::ScratchpadNotFound(_) => e.to_string(),
        other => format!("unexpected error: {}", other),
    }
}

fn run() -> Result<()> {
    let cli = Cli::try_parse().map_err(|_| Error::InvalidArguments)?;

    let env = SystemEnvironment;
    let config = Config::load_default(&env)?;
    let scratchpad = config.scratchpad(&cli.toggle)?;

    let toggler = Toggler::new(
        Yabai::new(UnixSocketTransport::from_env(&env)),
        ProcessLauncher,
        SystemClock,
    );
    let outcome = toggler.toggle(scratchpad)?;
    info!("{}: {:?}", scratchpad.name, outcome);
    Ok(())
}
