use std::sync::Arc;

use parking_lot::Mutex;

use gpibprims_frame::{codec, Address, ControllerCommand};

use crate::bus::BusCore;
use crate::error::Result;

/// Per-instrument handle on a shared bus.
///
/// Bound to one address for its whole life; cheap to clone, and dropping
/// one never tears down the bus. Every write re-selects the bound address
/// lazily before transmitting.
#[derive(Clone)]
pub struct Endpoint {
    address: Address,
    core: Arc<Mutex<BusCore>>,
}

impl Endpoint {
    pub(crate) fn new(address: Address, core: Arc<Mutex<BusCore>>) -> Self {
        Self { address, core }
    }

    /// The address this endpoint is bound to.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Send an ASCII text payload.
    ///
    /// Validation happens before the bus lock is taken: a non-ASCII
    /// character fails the call with no bytes sent.
    pub fn write(&self, text: &str) -> Result<()> {
        let payload = codec::ensure_ascii(text)?;
        self.write_bytes(payload)
    }

    /// Send a raw byte payload.
    ///
    /// Holds the bus lock across selection, escaping, and transmission, so
    /// no other endpoint's traffic can land mid-frame.
    pub fn write_bytes(&self, payload: &[u8]) -> Result<()> {
        self.core.lock().write_frame(self.address, payload)
    }

    /// Read one response line.
    ///
    /// Address-agnostic: reads return whatever the bus currently yields,
    /// no selection is issued. An empty string means the line timed out or
    /// the instrument sent an empty line — not an error.
    pub fn read(&self) -> Result<String> {
        let line = self.core.lock().read_line()?;
        decode_line(&line)
    }

    /// Write `text`, then read the response, as one atomic exchange.
    ///
    /// The bus lock is held for the whole pair: another endpoint cannot
    /// slip a write between the two halves and steal the response.
    pub fn query(&self, text: &str) -> Result<String> {
        let payload = codec::ensure_ascii(text)?;
        let mut core = self.core.lock();
        core.write_frame(self.address, payload)?;
        let line = core.read_line()?;
        decode_line(&line)
    }

    /// Serial-poll the instrument and return its status byte text.
    ///
    /// Goes through the ordinary escaped write path; `++spoll` contains no
    /// reserved bytes, so the wire bytes are identical to a raw controller
    /// write and query atomicity applies.
    pub fn serial_poll(&self) -> Result<String> {
        self.query(&ControllerCommand::Spoll.text())
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("address", &self.address)
            .finish()
    }
}

fn decode_line(line: &[u8]) -> Result<String> {
    let text = codec::decode_ascii(line)?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::bus::Bus;
    use crate::test_link::{MockLink, Op};

    fn addr(value: u8) -> Address {
        Address::new(value).unwrap()
    }

    #[test]
    fn test_write_escapes_reserved_bytes() {
        let link = MockLink::default();
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(1));

        // Pre-select so the payload write is the only traffic.
        endpoint.write("").unwrap();
        link.clear();

        endpoint.write("A\x1bB\rC\nD").unwrap();
        assert_eq!(
            link.ops(),
            vec![Op::Write(b"A\x1b\x1bB\x1b\rC\x1b\nD\n".to_vec())]
        );
    }

    #[test]
    fn test_empty_write_sends_bare_terminator() {
        let link = MockLink::default();
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(1));

        endpoint.write("").unwrap();
        assert_eq!(
            link.ops(),
            vec![Op::Write(b"++addr 1\n".to_vec()), Op::Write(b"\n".to_vec())]
        );
    }

    #[test]
    fn test_non_ascii_write_sends_nothing() {
        let link = MockLink::default();
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(1));

        endpoint.write("\u{00e9}").unwrap_err();
        assert!(link.ops().is_empty());
        assert_eq!(bus.selected(), None);
    }

    #[test]
    fn test_read_strips_line_terminators() {
        let link = MockLink::default();
        link.push_response(b"32\r\n".to_vec());
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(1));

        assert_eq!(endpoint.read().unwrap(), "32");
        // Read issues no selection.
        assert_eq!(link.ops(), vec![Op::Read]);
    }

    #[test]
    fn test_read_empty_line_is_not_an_error() {
        let link = MockLink::default();
        let bus = Bus::new(link);
        let endpoint = bus.endpoint(addr(1));
        assert_eq!(endpoint.read().unwrap(), "");
    }

    #[test]
    fn test_query_pairs_write_and_read() {
        let link = MockLink::default();
        link.push_response(b"ok\n".to_vec());
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(7));

        assert_eq!(endpoint.query("STATUS?").unwrap(), "ok");
        assert_eq!(
            link.ops(),
            vec![
                Op::Write(b"++addr 7\n".to_vec()),
                Op::Write(b"STATUS?\n".to_vec()),
                Op::Read,
            ]
        );
    }

    #[test]
    fn test_serial_poll_wire_bytes() {
        let link = MockLink::default();
        link.push_response(b"4\r\n".to_vec());
        let bus = Bus::new(link.clone());
        let endpoint = bus.endpoint(addr(1));

        assert_eq!(endpoint.serial_poll().unwrap(), "4");
        assert_eq!(
            link.ops(),
            vec![
                Op::Write(b"++addr 1\n".to_vec()),
                Op::Write(b"++spoll\n".to_vec()),
                Op::Read,
            ]
        );
    }

    #[test]
    fn test_query_atomic_under_concurrent_write() {
        // The mock's slow read widens the window in which a buggy lock
        // scheme would let endpoint B write between A's query halves.
        let link = MockLink::with_read_delay(Duration::from_millis(50));
        link.push_response(b"answer\n".to_vec());
        let bus = Bus::new(link.clone());
        let a = bus.endpoint(addr(1));
        let b = bus.endpoint(addr(2));

        let writer = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            b.write("intruder").unwrap();
        });

        let response = a.query("STATUS?").unwrap();
        writer.join().unwrap();
        assert_eq!(response, "answer");

        let ops = link.ops();
        let query_write = ops
            .iter()
            .position(|op| *op == Op::Write(b"STATUS?\n".to_vec()))
            .expect("query write should be recorded");
        let read = ops
            .iter()
            .position(|op| *op == Op::Read)
            .expect("query read should be recorded");
        // Nothing may land between the query's write and its read.
        assert_eq!(read, query_write + 1);
    }
}
