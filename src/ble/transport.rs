//! SoftDevice-backed [`Transport`] used by the main loop.

use bathbuzzer::error::Result;
use bathbuzzer::{BleError, Error, SwitchCode, Transport};
use defmt::info;
use nrf_softdevice::ble::gatt_server::NotifyValueError;

use super::{Server, ADVERTISE, CONNECTION};

pub struct SoftdeviceTransport {
    server: &'static Server,
}

impl SoftdeviceTransport {
    pub fn new(server: &'static Server) -> Self {
        Self { server }
    }
}

impl Transport for SoftdeviceTransport {
    fn publish(&mut self, code: SwitchCode) -> Result<()> {
        let value = code.value();

        // Keep the table in sync so a plain read returns the last code.
        self.server
            .switch
            .state_set(&value)
            .map_err(|_| BleError::SetValueFailed)?;

        let conn = CONNECTION
            .lock(|c| c.borrow().clone())
            .ok_or(Error::Disconnected)?;

        self.server
            .switch
            .state_notify(&conn, &value)
            .map_err(|e| match e {
                NotifyValueError::Disconnected => Error::Disconnected,
                NotifyValueError::Raw(_) => Error::Ble(BleError::NotifyFailed),
            })
    }

    fn restart_advertising(&mut self) {
        info!("BLE: start advertising");
        ADVERTISE.signal(());
    }
}
