//! Application-wide constants and compile-time configuration.
//!
//! All identifiers, pin assignments, timing parameters, and notification
//! codes live here so they can be tuned in one place.

// BLE identity

/// GAP device name, also carried in the advertising payload.
pub const DEVICE_NAME: &str = "BathBuzzer";

/// Primary service UUID (string form, as declared on the GATT service).
pub const SERVICE_UUID: &str = "d1583dcd-73b2-4455-8efa-3632ae8ecfcb";

/// Primary service UUID as a 128-bit integer, for the advertising payload.
pub const SERVICE_UUID_U128: u128 = 0xd1583dcd_73b2_4455_8efa_3632ae8ecfcb;

/// Switch-state characteristic UUID (string form).
pub const CHARACTERISTIC_UUID: &str = "6538a81a-0601-4c85-a75d-812ce857b14b";

/// Switch-state characteristic UUID as a 128-bit integer.
pub const CHARACTERISTIC_UUID_U128: u128 = 0x6538a81a_0601_4c85_a75d_812ce857b14b;

/// Service UUID in the little-endian byte order used on air.
pub const fn service_uuid_le_bytes() -> [u8; 16] {
    SERVICE_UUID_U128.to_le_bytes()
}

// SoftDevice sizing

/// Only one central is served at a time.
pub const BLE_MAX_CONNECTIONS: u8 = 1;

/// ATT MTU requested from the SoftDevice. The payload is 4 bytes so the
/// default minimum is plenty.
pub const BLE_ATT_MTU: u16 = 23;

/// Back-off before retrying a rejected advertising start (ms).
pub const BLE_ADVERTISE_RETRY_MS: u64 = 500;

// GPIO pin assignments (nRF52840-DK defaults)
//
// The concrete `embassy_nrf::peripherals::*` pin is picked in `main.rs`.
//
//   Switch input   → P0.11 (button 1, pull-up, active-low)

/// Human-readable label of the switch pin, for boot logs.
pub const SWITCH_PIN_LABEL: &str = "P0.11";

// Timing

/// Main loop cadence (ms). Not configurable at runtime.
pub const LOOP_PERIOD_MS: u64 = 1000;

// Notification codes

/// Sent every tick while the switch is open (pin pulled high).
pub const POLLING_DATA: u32 = 1;

/// Sent every tick while the switch is closed (pin pulled low).
pub const SWITCH_ON: u32 = 2;

/// Size of the characteristic value on the wire (bytes).
pub const NOTIFICATION_VALUE_SIZE: usize = 4;
