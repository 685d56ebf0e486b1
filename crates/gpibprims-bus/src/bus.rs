use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use parking_lot::Mutex;
use tracing::{debug, trace};

use gpibprims_frame::{encode_data, Address, ControllerCommand};
use gpibprims_transport::{Link, SerialConfig, SerialLink};

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::listener::BusListener;

const SCRATCH_CAPACITY: usize = 256;

/// Selection state plus link: the one critical section of the crate.
///
/// Everything that touches the wire goes through a method on this type
/// while the owning mutex is held.
pub(crate) struct BusCore {
    link: Box<dyn Link>,
    selected: Option<Address>,
    listener: Option<Box<dyn BusListener>>,
    scratch: BytesMut,
}

impl BusCore {
    /// Make `address` the active bus target, issuing a `++addr` command
    /// only if it is not already selected.
    ///
    /// Atomic with respect to failure: `selected` transitions only after
    /// the selection command was written successfully, so a transport
    /// failure never leaves the bus believing the wrong address is active.
    pub(crate) fn ensure_selected(&mut self, address: Address) -> Result<()> {
        if self.selected == Some(address) {
            trace!(%address, "address already selected");
            return Ok(());
        }

        self.scratch.clear();
        ControllerCommand::Addr(address).encode_into(&mut self.scratch);
        self.link.write_raw(&self.scratch)?;

        debug!(%address, previous = ?self.selected, "bus address selected");
        self.selected = Some(address);
        if let Some(listener) = &self.listener {
            listener.on_select(address);
        }
        Ok(())
    }

    /// Select, escape, and transmit one data frame to `address`.
    pub(crate) fn write_frame(&mut self, address: Address, payload: &[u8]) -> Result<()> {
        self.ensure_selected(address)?;

        self.scratch.clear();
        encode_data(payload, &mut self.scratch);
        self.link.write_raw(&self.scratch)?;

        trace!(%address, len = self.scratch.len(), "data frame sent");
        if let Some(listener) = &self.listener {
            listener.on_data_sent(address, &self.scratch);
        }
        Ok(())
    }

    /// Write a controller command line, bypassing selection and escaping.
    pub(crate) fn write_command(&mut self, command: ControllerCommand) -> Result<()> {
        self.scratch.clear();
        command.encode_into(&mut self.scratch);
        self.link.write_raw(&self.scratch)?;
        debug!(command = %command.text(), "controller command sent");
        Ok(())
    }

    /// Drain one response line from the link.
    pub(crate) fn read_line(&mut self) -> Result<Vec<u8>> {
        let line = self.link.read_line()?;
        if let Some(listener) = &self.listener {
            listener.on_line_received(&line);
        }
        Ok(line)
    }
}

/// Manager of one shared GPIB link.
///
/// Exactly one `Bus` exists per physical channel; it is the sole mutator
/// of the selected-address state. Per-instrument handles come from
/// [`Bus::endpoint`].
pub struct Bus {
    core: Arc<Mutex<BusCore>>,
}

impl Bus {
    /// Open the serial port described by `config` and manage it.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        Ok(Self::new(SerialLink::open(config)?))
    }

    /// Manage an already-open link.
    ///
    /// The bus starts unselected, so the first write through any endpoint
    /// always issues an explicit selection command rather than trusting
    /// the adapter's power-on default.
    pub fn new(link: impl Link + 'static) -> Self {
        Self {
            core: Arc::new(Mutex::new(BusCore {
                link: Box::new(link),
                selected: None,
                listener: None,
                scratch: BytesMut::with_capacity(SCRATCH_CAPACITY),
            })),
        }
    }

    /// Install a traffic observer.
    pub fn with_listener(self, listener: impl BusListener + 'static) -> Self {
        self.core.lock().listener = Some(Box::new(listener));
        self
    }

    /// Create a handle bound to `address`.
    ///
    /// Pure factory: no channel traffic is generated until the endpoint's
    /// first write. Endpoints share this bus and may outlive each other.
    pub fn endpoint(&self, address: Address) -> Endpoint {
        Endpoint::new(address, Arc::clone(&self.core))
    }

    /// The currently selected address, if any.
    pub fn selected(&self) -> Option<Address> {
        self.core.lock().selected
    }

    /// Configure the adapter's own GPIB read timeout (`++read_tmo_ms`).
    ///
    /// Never sent implicitly; the adapter default applies until a caller
    /// asks for this.
    pub fn set_adapter_read_timeout(&self, timeout: Duration) -> Result<()> {
        self.core
            .lock()
            .write_command(ControllerCommand::ReadTimeout(timeout))
    }

    /// Address the selected instrument to talk (`++read eoi`).
    pub fn request_talk(&self) -> Result<()> {
        self.core.lock().write_command(ControllerCommand::ReadEoi)
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("selected", &self.core.lock().selected)
            .finish()
    }
}
