//! GATT table: one custom service with a single switch-state value.
//!
//! The UUID literals must match `config::SERVICE_UUID` and
//! `config::CHARACTERISTIC_UUID`; the proc macros only accept literals.

/// Switch service. `state` holds the last published code (`u32`, LE).
#[nrf_softdevice::gatt_service(uuid = "d1583dcd-73b2-4455-8efa-3632ae8ecfcb")]
pub struct SwitchService {
    #[characteristic(
        uuid = "6538a81a-0601-4c85-a75d-812ce857b14b",
        read,
        write,
        notify,
        indicate
    )]
    pub state: u32,
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub switch: SwitchService,
}
