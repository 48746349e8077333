//! Transmit-only serial link for the arm state stream.
//!
//! The port is strictly optional: a failed open or a failed write is
//! logged and otherwise ignored, and the application keeps running with
//! whatever state the link is in. No retries, no reconnect loop.

use std::io::Write;
use std::time::Duration;

use tracing::{error, info, warn};

/// Minimal sink for outgoing text lines, so tests can capture traffic
/// without hardware on the other end.
pub trait TxPort: Send {
    fn write_line(&mut self, line: &str) -> std::io::Result<()>;
}

impl TxPort for Box<dyn serialport::SerialPort> {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()
    }
}

pub struct SerialLink {
    port: Option<Box<dyn TxPort>>,
    port_name: String,
}

impl SerialLink {
    /// Opens the configured port. A failed open logs the error and yields
    /// a disconnected link; the app stays fully usable without hardware.
    pub fn connect(port_name: &str, baudrate: u32) -> Self {
        if port_name.is_empty() {
            info!("No serial port configured");
            return Self {
                port: None,
                port_name: String::new(),
            };
        }
        match serialport::new(port_name, baudrate)
            .timeout(Duration::from_millis(10))
            .open()
        {
            Ok(port) => {
                info!(port = port_name, baudrate, "Serial port opened");
                Self {
                    port: Some(Box::new(port)),
                    port_name: port_name.to_string(),
                }
            }
            Err(e) => {
                error!(error = %e, port = port_name, "Failed to open serial port");
                Self {
                    port: None,
                    port_name: port_name.to_string(),
                }
            }
        }
    }

    /// Wraps an already-open port.
    pub fn from_port(port: Box<dyn TxPort>, port_name: &str) -> Self {
        Self {
            port: Some(port),
            port_name: port_name.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    /// Name the link was opened (or last attempted) against.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Writes one line, newline-terminated. A failed write is logged and
    /// dropped; the link stays up.
    pub fn send_line(&mut self, line: &str) {
        if let Some(port) = &mut self.port {
            if let Err(e) = port.write_line(line) {
                warn!(error = %e, "Serial write failed");
            }
        }
    }
}

/// Names of serial ports currently present on the system.
pub fn available_port_names() -> Vec<String> {
    match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(|p| p.port_name).collect(),
        Err(e) => {
            warn!(error = %e, "Could not enumerate serial ports");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecorderPort {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl TxPort for RecorderPort {
        fn write_line(&mut self, line: &str) -> std::io::Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    struct BrokenPort;

    impl TxPort for BrokenPort {
        fn write_line(&mut self, _line: &str) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn send_line_reaches_the_port() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut link = SerialLink::from_port(
            Box::new(RecorderPort {
                lines: lines.clone(),
            }),
            "mock0",
        );
        link.send_line("$1:90:#000000");
        link.send_line("$2:0:#ff0000");
        assert_eq!(
            *lines.lock().unwrap(),
            vec!["$1:90:#000000".to_string(), "$2:0:#ff0000".to_string()]
        );
        assert!(link.is_connected());
        assert_eq!(link.port_name(), "mock0");
    }

    #[test]
    fn empty_port_name_means_disconnected() {
        let mut link = SerialLink::connect("", 9600);
        assert!(!link.is_connected());
        // Silently swallowed, never panics.
        link.send_line("$1:90:#000000");
    }

    #[test]
    fn write_errors_do_not_tear_down_the_link() {
        let mut link = SerialLink::from_port(Box::new(BrokenPort), "mock1");
        link.send_line("$1:90:#000000");
        link.send_line("$1:91:#000000");
        assert!(link.is_connected());
    }
}
