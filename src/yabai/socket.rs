//! [`Transport`] over yabai's Unix message socket.
//!
//! yabai listens on `/tmp/yabai_$USER.socket`.  Every request opens a fresh
//! connection, writes one frame, and reads until yabai closes its end.

use super::codec;
use crate::error::{Error, Result};
use crate::traits::{Environment, Transport};
use log::{debug, warn};
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

const READ_CHUNK: usize = 1024;

/// Resolve the yabai socket path for the current user.
///
/// Falls back to the user name `unknown` when the environment has none.
pub fn socket_path(env: &impl Environment) -> PathBuf {
    let user = env.username().unwrap_or_else(|| "unknown".into());
    env.temp_dir().join(format!("yabai_{}.socket", user))
}

/// Short-lived connections to the yabai socket.
///
/// No connection is held between calls.
#[derive(Debug, Clone)]
pub struct UnixSocketTransport {
    path: PathBuf,
    read_timeout: Option<Duration>,
}

impl UnixSocketTransport {
    /// Transport for the socket derived from `env`.
    pub fn from_env(env: &impl Environment) -> Self {
        Self::at(socket_path(env))
    }

    /// Transport for an explicit socket path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            read_timeout: None,
        }
    }

    /// Stop reading a response once no byte has arrived for `timeout`.
    ///
    /// Without one, reads block until yabai closes the connection.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for UnixSocketTransport {
    /// Send `command` and return the full response.
    ///
    /// The response is decoded as UTF-8.  Invalid UTF-8 yields an empty
    /// string rather than an error.
    fn query(&self, command: &[String]) -> Result<String> {
        if !self.path.exists() {
            return Err(Error::Socket(format!(
                "no socket at {} (is yabai running?)",
                self.path.display()
            )));
        }

        let mut stream = UnixStream::connect(&self.path)
            .map_err(|e| Error::Socket(format!("connect to {}: {}", self.path.display(), e)))?;

        stream
            .set_read_timeout(self.read_timeout)
            .map_err(|e| Error::Socket(format!("set read timeout: {}", e)))?;

        debug!("-> {}", command.join(" "));
        stream
            .write_all(&codec::encode(command))
            .map_err(|e| Error::Socket(format!("write: {}", e)))?;

        let mut response = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => response.extend_from_slice(&chunk[..n]),
                Err(e) => {
                    debug!("read stopped: {}", e);
                    break;
                }
            }
        }

        match String::from_utf8(response) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("discarding non-UTF-8 response: {}", e);
                Ok(String::new())
            }
        }
    }
}
