//! Line transport to the timer server

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::Result;

/// Reply sentinel for an unset channel or a failed read.
pub const REPLY_ERROR: &str = "ERROR";

/// A duplex text-line channel to the timer server.
///
/// `send_line` never fails: with no live channel it is a silent no-op.
/// `receive_line` blocks for exactly one reply line and degrades every
/// failure (unset channel, read error, timeout, peer EOF) to the
/// [`REPLY_ERROR`] sentinel, so callers cannot tell "timer not running" from
/// "timer unreachable". Replies are never buffered and nothing retries;
/// every send that expects a reply must be followed by exactly one receive.
pub trait TimerLink {
    /// Write one line plus terminator and flush immediately.
    fn send_line(&mut self, line: &str);

    /// Block for one reply line, stripped of its terminator.
    fn receive_line(&mut self) -> String;

    /// Drop the underlying channel, if any.
    fn close(&mut self);
}

/// TCP implementation of [`TimerLink`].
pub struct TcpLink {
    conn: Option<Conn>,
}

struct Conn {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl TcpLink {
    /// A link with no channel: every send is a no-op and every receive
    /// yields the sentinel.
    pub fn unconnected() -> Self {
        Self { conn: None }
    }

    /// Connect to the timer server. `read_timeout` bounds how long a reply
    /// read may stall the calling event handler.
    pub fn connect(host: &str, port: u16, read_timeout: Duration) -> Result<Self> {
        let writer = TcpStream::connect((host, port))?;
        writer.set_read_timeout(Some(read_timeout))?;
        writer.set_nodelay(true)?;
        let reader = BufReader::new(writer.try_clone()?);
        log::info!("connected to timer server at {}:{}", host, port);
        Ok(Self {
            conn: Some(Conn { reader, writer }),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }
}

impl TimerLink for TcpLink {
    fn send_line(&mut self, line: &str) {
        let Some(conn) = &mut self.conn else { return };
        let write = conn
            .writer
            .write_all(line.as_bytes())
            .and_then(|_| conn.writer.write_all(b"\r\n"))
            .and_then(|_| conn.writer.flush());
        if let Err(e) = write {
            log::debug!("timer send failed ({}), dropped: {}", e, line);
        }
    }

    fn receive_line(&mut self) -> String {
        let Some(conn) = &mut self.conn else {
            return REPLY_ERROR.to_string();
        };
        let mut line = String::new();
        match conn.reader.read_line(&mut line) {
            // 0 bytes means the peer closed the channel
            Ok(0) => REPLY_ERROR.to_string(),
            Ok(_) => line.trim_end_matches(&['\r', '\n'][..]).to_string(),
            Err(e) => {
                log::debug!("timer read failed: {}", e);
                REPLY_ERROR.to_string()
            }
        }
    }

    fn close(&mut self) {
        if self.conn.take().is_some() {
            log::info!("timer server link closed");
        }
    }
}
