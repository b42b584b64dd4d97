//! Polling notifier - samples the switch and publishes its code.

use crate::error::Result;
use crate::switch::{SwitchCode, SwitchInput};

/// The wireless side of the application, as seen from the main loop.
///
/// Both calls are fire-and-forget from the loop's point of view: a failed
/// publish is reported back but never retried.
pub trait Transport {
    /// Store `code` as the characteristic value and notify the central.
    fn publish(&mut self, code: SwitchCode) -> Result<()>;

    /// Make the peripheral discoverable again after a central left.
    fn restart_advertising(&mut self);
}

/// Outcome of one publish attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Publish {
    pub code: SwitchCode,
    pub result: Result<()>,
}

/// Read the switch once, map it, and hand the code to the transport.
///
/// Callers must only invoke this while a central is connected.
pub fn poll_and_publish<S, T>(input: &mut S, transport: &mut T) -> Publish
where
    S: SwitchInput,
    T: Transport,
{
    let code = SwitchCode::from_level(input.level());
    let result = transport.publish(code);
    Publish { code, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BleError, Error};
    use crate::switch::PinLevel;

    struct Fixed(PinLevel, usize);

    impl SwitchInput for Fixed {
        fn level(&mut self) -> PinLevel {
            self.1 += 1;
            self.0
        }
    }

    struct OneShot {
        last: Option<SwitchCode>,
        fail: bool,
    }

    impl Transport for OneShot {
        fn publish(&mut self, code: SwitchCode) -> Result<()> {
            self.last = Some(code);
            if self.fail {
                Err(BleError::NotifyFailed.into())
            } else {
                Ok(())
            }
        }

        fn restart_advertising(&mut self) {}
    }

    #[test]
    fn samples_pin_exactly_once() {
        let mut input = Fixed(PinLevel::High, 0);
        let mut transport = OneShot { last: None, fail: false };

        poll_and_publish(&mut input, &mut transport);
        assert_eq!(input.1, 1);
    }

    #[test]
    fn publishes_mapped_code() {
        let mut input = Fixed(PinLevel::Low, 0);
        let mut transport = OneShot { last: None, fail: false };

        let publish = poll_and_publish(&mut input, &mut transport);
        assert_eq!(publish.code, SwitchCode::SwitchOn);
        assert_eq!(publish.result, Ok(()));
        assert_eq!(transport.last, Some(SwitchCode::SwitchOn));
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let mut input = Fixed(PinLevel::High, 0);
        let mut transport = OneShot { last: None, fail: true };

        let publish = poll_and_publish(&mut input, &mut transport);
        assert_eq!(publish.code, SwitchCode::PollingData);
        assert_eq!(publish.result, Err(Error::Ble(BleError::NotifyFailed)));
    }
}
