//! **yabai-scratchpad**: toggle scratchpad windows under yabai.
//!
//! A scratchpad is a named window (matched by title or application name)
//! that is either parked on a dedicated space or floating, at a fixed size
//! and position, on whatever space has focus.  Toggling flips between the
//! two, launching the application first when no window exists yet.
//!
//! # Architecture
//!
//! The [`toggle::Toggler`] only talks to the outside world through the
//! traits in [`traits`]:
//!
//! * [`traits::Transport`]: request/response to yabai, implemented over
//!   yabai's Unix socket in [`yabai::socket`].
//! * [`traits::Launcher`]: starts applications, see [`launch`].
//! * [`traits::Clock`]: drives the launch-wait loop, see [`poll`].
//! * [`traits::Environment`]: user name and home directory, see [`env`].

pub mod config;
pub mod env;
pub mod error;
pub mod launch;
pub mod model;
pub mod poll;
pub mod toggle;
pub mod traits;
pub mod yabai;

pub use error::{Error, Result};
