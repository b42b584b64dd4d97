//! Switch input and the notification codes derived from it.
//!
//! The switch pulls the pin to ground when closed; the internal pull-up
//! keeps it high otherwise:
//!
//! ```text
//! pin level  switch   code
//! ---------  ------   ----------------
//!   high     open     POLLING_DATA (1)
//!   low      closed   SWITCH_ON    (2)
//! ```

use crate::config::{NOTIFICATION_VALUE_SIZE, POLLING_DATA, SWITCH_ON};

/// A single raw sample of the switch pin. No debouncing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Pulled up: switch open, idle.
    High,
    /// Pulled down: switch closed, active.
    Low,
}

impl PinLevel {
    /// Build from a numeric reading (`0` = low, anything else = high).
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            PinLevel::Low
        } else {
            PinLevel::High
        }
    }

    /// `true` when the switch is closed.
    pub const fn is_active(self) -> bool {
        matches!(self, PinLevel::Low)
    }
}

/// The value pushed to the central every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchCode {
    /// Switch open; keep-alive poll.
    PollingData,
    /// Switch closed.
    SwitchOn,
}

impl SwitchCode {
    /// Map a pin sample to its code.
    pub const fn from_level(level: PinLevel) -> Self {
        match level {
            PinLevel::High => SwitchCode::PollingData,
            PinLevel::Low => SwitchCode::SwitchOn,
        }
    }

    /// Numeric value carried by the characteristic.
    pub const fn value(self) -> u32 {
        match self {
            SwitchCode::PollingData => POLLING_DATA,
            SwitchCode::SwitchOn => SWITCH_ON,
        }
    }

    /// On-air representation (little-endian, the nRF52840's native order).
    pub const fn to_bytes(self) -> [u8; NOTIFICATION_VALUE_SIZE] {
        self.value().to_le_bytes()
    }
}

impl From<PinLevel> for SwitchCode {
    fn from(level: PinLevel) -> Self {
        SwitchCode::from_level(level)
    }
}

/// Anything that can sample the switch pin.
pub trait SwitchInput {
    /// Read the pin exactly once.
    fn level(&mut self) -> PinLevel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_maps_to_polling_data() {
        assert_eq!(SwitchCode::from_level(PinLevel::High), SwitchCode::PollingData);
        assert_eq!(SwitchCode::PollingData.value(), 1);
    }

    #[test]
    fn low_maps_to_switch_on() {
        assert_eq!(SwitchCode::from_level(PinLevel::Low), SwitchCode::SwitchOn);
        assert_eq!(SwitchCode::SwitchOn.value(), 2);
    }

    #[test]
    fn from_bit_treats_nonzero_as_high() {
        assert_eq!(PinLevel::from_bit(0), PinLevel::Low);
        assert_eq!(PinLevel::from_bit(1), PinLevel::High);
        assert_eq!(PinLevel::from_bit(0xFF), PinLevel::High);
    }

    #[test]
    fn only_low_is_active() {
        assert!(PinLevel::Low.is_active());
        assert!(!PinLevel::High.is_active());
    }

    #[test]
    fn codes_are_four_bytes_little_endian() {
        assert_eq!(SwitchCode::PollingData.to_bytes(), [0x01, 0x00, 0x00, 0x00]);
        assert_eq!(SwitchCode::SwitchOn.to_bytes(), [0x02, 0x00, 0x00, 0x00]);
    }
}
