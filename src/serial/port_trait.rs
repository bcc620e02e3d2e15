//! Trait abstraction for the badge's byte sink to enable testing

use async_trait::async_trait;
use std::io;

/// Trait for serial port I/O operations
///
/// The transmitter only needs something that accepts whole frames and can
/// report I/O errors; the badge never sends anything back.
#[async_trait]
pub trait SerialPortIO: Send {
    /// Write all data to the port
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush the output buffer
    async fn flush(&mut self) -> io::Result<()>;
}

/// Wrapper around tokio_serial::SerialStream that implements SerialPortIO
pub struct BadgePort {
    port: tokio_serial::SerialStream,
}

impl BadgePort {
    pub fn new(port: tokio_serial::SerialStream) -> Self {
        Self { port }
    }
}

impl std::fmt::Debug for BadgePort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgePort").finish_non_exhaustive()
    }
}

#[async_trait]
impl SerialPortIO for BadgePort {
    async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.port.write_all(data).await
    }

    async fn flush(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        self.port.flush().await
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock serial port recording every frame handed to it
    #[derive(Clone)]
    pub struct MockSerialPort {
        pub written_frames: Arc<Mutex<Vec<Vec<u8>>>>,
        pub write_error: Arc<Mutex<Option<io::ErrorKind>>>,
        pub fail_after_writes: Arc<Mutex<Option<usize>>>,
    }

    impl MockSerialPort {
        pub fn new() -> Self {
            Self {
                written_frames: Arc::new(Mutex::new(Vec::new())),
                write_error: Arc::new(Mutex::new(None)),
                fail_after_writes: Arc::new(Mutex::new(None)),
            }
        }

        pub fn get_written_frames(&self) -> Vec<Vec<u8>> {
            self.written_frames.lock().unwrap().clone()
        }

        /// Every write fails with the given kind
        pub fn set_write_error(&self, error: io::ErrorKind) {
            *self.write_error.lock().unwrap() = Some(error);
        }

        /// The first `count` writes succeed, then writes fail
        pub fn fail_after(&self, count: usize) {
            *self.fail_after_writes.lock().unwrap() = Some(count);
        }
    }

    #[async_trait]
    impl SerialPortIO for MockSerialPort {
        async fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            if let Some(error) = *self.write_error.lock().unwrap() {
                return Err(io::Error::new(error, "mock write error"));
            }
            if let Some(limit) = *self.fail_after_writes.lock().unwrap() {
                if self.written_frames.lock().unwrap().len() >= limit {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock write error"));
                }
            }
            self.written_frames.lock().unwrap().push(data.to_vec());
            Ok(())
        }

        async fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
