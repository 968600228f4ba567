//! Crate-wide error type.
//!
//! Every failure is terminal for the invocation.  The binary prints the
//! [`Display`](std::fmt::Display) form of the error on a single line and
//! exits with status `1`.

/// Everything that can go wrong while toggling a scratchpad.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command line did not have the shape `--toggle <name>`.
    #[error("usage: yabai-scratchpad --toggle <scratchpad-name>")]
    InvalidArguments,

    /// No scratchpad with this name exists in the config.
    #[error("scratchpad not found: {0}")]
    ScratchpadNotFound(String),

    /// Missing or malformed config, or a launch that never produced a window.
    #[error("config error: {0}")]
    Config(String),

    /// The yabai socket is missing or could not be talked to.
    #[error("socket error: {0}")]
    Socket(String),

    /// A query response was not the JSON we expected.
    #[error("failed to decode yabai response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The launch command could not be started.
    #[error("launch error: {0}")]
    Launch(String),

    /// yabai reported no focused space.
    #[error("no focused space")]
    NoFocusedSpace,
}

pub type Result<T> = std::result::Result<T, Error>;
