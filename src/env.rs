//! [`Environment`] backed by the real process environment.

use crate::traits::Environment;
use std::path::PathBuf;

/// Reads `$USER`, the home directory reported by the OS, and uses `/tmp`
/// as the socket directory (yabai hardcodes it).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn username(&self) -> Option<String> {
        std::env::var("USER").ok().filter(|u| !u.is_empty())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn temp_dir(&self) -> PathBuf {
        PathBuf::from("/tmp")
    }
}
