//! yabai-specific implementations.
//!
//! [`codec`] frames requests, [`socket`] carries them over yabai's Unix
//! socket, and [`query`] turns them into typed commands and records.
//!
//! Nothing outside this module should know the wire format.

pub mod codec;
pub mod query;
pub mod socket;

pub use query::Yabai;
pub use socket::UnixSocketTransport;
