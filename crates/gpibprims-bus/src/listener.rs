use gpibprims_frame::Address;

/// Observer for bus traffic.
///
/// Injected by the caller via [`Bus::with_listener`]; all methods default
/// to no-ops. The bus itself never writes to stdout — a CLI or logger that
/// wants to mirror traffic installs a listener instead.
///
/// Callbacks run while the bus lock is held, so they must not call back
/// into the bus.
///
/// [`Bus::with_listener`]: crate::Bus::with_listener
pub trait BusListener: Send {
    /// A selection command was issued and the bus switched to `address`.
    fn on_select(&self, address: Address) {
        let _ = address;
    }

    /// A data frame (escaped payload + terminator) was transmitted.
    fn on_data_sent(&self, address: Address, wire: &[u8]) {
        let _ = (address, wire);
    }

    /// A response line was drained from the link.
    fn on_line_received(&self, line: &[u8]) {
        let _ = line;
    }
}
