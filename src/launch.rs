//! [`Launcher`] that spawns real child processes.

use crate::error::{Error, Result};
use crate::model::LaunchOption;
use crate::traits::Launcher;
use log::info;
use std::process::{Command, Stdio};

/// Spawns scratchpad applications with `open -a` or `sh -c`.
///
/// The child is detached from our stdio and never waited on; yabai
/// scratchpad invocations are short-lived, so the child is reparented when
/// we exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    /// Build the command for `option` without running it.
    pub fn command(option: &LaunchOption) -> Command {
        let mut command = match option {
            LaunchOption::Application(name) => {
                let mut c = Command::new("open");
                c.arg("-a").arg(name);
                c
            }
            LaunchOption::ApplicationWithArgs(name, args) => {
                let mut c = Command::new("open");
                c.arg("-a").arg(name).arg("--args").args(args);
                c
            }
            LaunchOption::RawCommand(cmd) => {
                let mut c = Command::new("sh");
                c.arg("-c").arg(cmd);
                c
            }
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, option: &LaunchOption) -> Result<()> {
        let line = option.command_line();
        info!("launching: {}", line);
        Self::command(option)
            .spawn()
            .map_err(|e| Error::Launch(format!("{}: {}", line, e)))?;
        Ok(())
    }
}
