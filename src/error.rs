//! Unified error type for bathbuzzer.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging when the
//! `defmt` feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The SoftDevice rejected a GATT operation.
    Ble(BleError),

    /// A publish was attempted while no central is connected.
    Disconnected,
}

/// Subset of BLE errors we surface (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BleError {
    /// Updating the attribute value in the GATT table failed.
    SetValueFailed,
    /// The notification was not queued (no subscriber, congestion).
    NotifyFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
