//! Capability seams between the toggle logic and the outside world.
//!
//! The [`Toggler`](crate::toggle::Toggler) never touches a socket, a clock,
//! a child process or the process environment directly.  It goes through
//! these traits, so tests can substitute recording fakes for each of them.

use crate::error::Result;
use crate::model::LaunchOption;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A request/response channel to yabai.
///
/// Implementations send one command (a sequence of string tokens) and
/// return the raw response text.
pub trait Transport {
    /// Send `command` and return yabai's reply as text.
    fn query(&self, command: &[String]) -> Result<String>;
}

/// Starts the process behind a scratchpad.
///
/// [`launch`](Launcher::launch) returns as soon as the process has been
/// started.  It does not wait for a window to appear; the caller polls for
/// that.
pub trait Launcher {
    /// Start the process described by `option`.
    fn launch(&self, option: &LaunchOption) -> Result<()>;
}

/// Source of time for the launch-wait loop.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Block for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Process-wide facts used to derive file and socket paths.
pub trait Environment {
    /// Login name of the current user, if known.
    fn username(&self) -> Option<String>;

    /// The user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Directory holding the yabai socket.
    fn temp_dir(&self) -> PathBuf;
}
