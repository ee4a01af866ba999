//! Client side of the timer-server line protocol
//!
//! - `TimerLink` / `TcpLink` - the duplex text-line channel
//! - `TimerPhase` - the timer's own state label, read fresh on each query
//! - `TimerClient` - one typed method per wire command

mod client;
mod protocol;
mod transport;

pub use client::TimerClient;
pub use protocol::TimerPhase;
pub use transport::{TcpLink, TimerLink, REPLY_ERROR};
