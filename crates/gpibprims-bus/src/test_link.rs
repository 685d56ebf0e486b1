//! Recording mock link shared by the bus test modules.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use gpibprims_transport::{Link, Result, TransportError};

/// One observed link operation, in global order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
    Write(Vec<u8>),
    Read,
}

/// A `Link` that records every call and serves canned response lines.
///
/// Cloning shares the underlying state, so tests keep a handle while the
/// bus owns another.
#[derive(Clone, Default)]
pub(crate) struct MockLink {
    log: Arc<Mutex<Vec<Op>>>,
    responses: Arc<Mutex<VecDeque<Vec<u8>>>>,
    fail_next_write: Arc<AtomicBool>,
    read_delay: Duration,
}

impl MockLink {
    /// A mock whose reads block for `delay` before returning, to widen
    /// race windows in interleaving tests.
    pub(crate) fn with_read_delay(delay: Duration) -> Self {
        Self {
            read_delay: delay,
            ..Self::default()
        }
    }

    /// Queue a response line for a future `read_line`.
    pub(crate) fn push_response(&self, line: impl Into<Vec<u8>>) {
        self.responses.lock().push_back(line.into());
    }

    /// Fail the next `write_raw` with an I/O error.
    pub(crate) fn fail_next_write(&self) {
        self.fail_next_write.store(true, Ordering::SeqCst);
    }

    /// Snapshot of all recorded operations.
    pub(crate) fn ops(&self) -> Vec<Op> {
        self.log.lock().clone()
    }

    /// Forget recorded operations.
    pub(crate) fn clear(&self) {
        self.log.lock().clear();
    }
}

impl Link for MockLink {
    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        if self.fail_next_write.swap(false, Ordering::SeqCst) {
            return Err(TransportError::Io(std::io::Error::other(
                "injected write failure",
            )));
        }
        self.log.lock().push(Op::Write(data.to_vec()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Vec<u8>> {
        if !self.read_delay.is_zero() {
            std::thread::sleep(self.read_delay);
        }
        self.log.lock().push(Op::Read);
        Ok(self.responses.lock().pop_front().unwrap_or_default())
    }
}
