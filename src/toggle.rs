//! The scratchpad toggle.
//!
//! [`Toggler`] finds the window behind a [`Scratchpad`], launching it first
//! if needed, and then either parks it on the scratchpad space (when it has
//! focus) or brings it to the focused space at its configured geometry.

use crate::config::Scratchpad;
use crate::error::{Error, Result};
use crate::model::Window;
use crate::poll::poll_until;
use crate::traits::{Clock, Launcher, Transport};
use crate::yabai::Yabai;
use log::info;
use std::time::Duration;

/// Delay between window lookups while waiting for a launch.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a toggle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The window had focus and was sent to the scratchpad space.
    Hidden,
    /// The window was brought to the focused space and focused.
    Shown,
}

/// Drives yabai to show or hide scratchpads.
///
/// Every step is a separate yabai command.  Nothing is rolled back when a
/// later step fails, so a window can be left floated or moved but not
/// resized.
pub struct Toggler<T: Transport, L: Launcher, C: Clock> {
    yabai: Yabai<T>,
    launcher: L,
    clock: C,
}

impl<T: Transport, L: Launcher, C: Clock> Toggler<T, L, C> {
    /// Create a toggler from a yabai client, a launcher and a clock.
    pub fn new(yabai: Yabai<T>, launcher: L, clock: C) -> Self {
        Self {
            yabai,
            launcher,
            clock,
        }
    }

    /// The underlying yabai client.
    pub fn yabai(&self) -> &Yabai<T> {
        &self.yabai
    }

    /// Toggle `scratchpad`.
    pub fn toggle(&self, scratchpad: &Scratchpad) -> Result<Outcome> {
        let window = match self.yabai.find_window(&scratchpad.target)? {
            Some(w) => w,
            None => self.launch_and_wait(scratchpad)?,
        };

        if window.has_focus {
            self.hide(scratchpad, &window)?;
            Ok(Outcome::Hidden)
        } else {
            self.show(scratchpad, &window)?;
            Ok(Outcome::Shown)
        }
    }

    /// Launch the scratchpad once and poll until its window shows up.
    fn launch_and_wait(&self, scratchpad: &Scratchpad) -> Result<Window> {
        let start = self.clock.now();
        self.launcher.launch(&scratchpad.launch)?;

        let timeout = Duration::from_secs(u64::from(scratchpad.launch_timeout));
        poll_until(&self.clock, POLL_INTERVAL, timeout, start, || {
            self.yabai.find_window(&scratchpad.target)
        })?
        .ok_or_else(|| {
            Error::Config(format!(
                "{} didn't launch within {} seconds",
                scratchpad.name, scratchpad.launch_timeout
            ))
        })
    }

    fn hide(&self, scratchpad: &Scratchpad, window: &Window) -> Result<()> {
        info!(
            "hiding {} (window {}) on space {}",
            scratchpad.name, window.id, scratchpad.space
        );
        self.yabai
            .window_focus_on_space(window.id, u32::from(scratchpad.space))
    }

    fn show(&self, scratchpad: &Scratchpad, window: &Window) -> Result<()> {
        let space = self.yabai.focused_space()?;
        info!(
            "showing {} (window {}) on space {}",
            scratchpad.name, window.id, space.index
        );

        if !window.is_floating {
            self.yabai.window_toggle_float(window.id)?;
        }
        self.yabai.window_move_to_space(window.id, space.index)?;
        self.yabai.window_move(window.id, scratchpad.position)?;
        self.yabai.window_resize(window.id, scratchpad.size)?;
        self.yabai.focus_window(window.id)
    }
}
