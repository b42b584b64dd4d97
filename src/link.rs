//! Connection state tracking.
//!
//! The link is split in two halves:
//!
//! - [`LinkStatus`] holds the *current* flag. The BLE link task flips it
//!   from its own execution context when a central connects or drops, so
//!   it is an atomic that can live in a `static`.
//! - [`ConnectionTracker`] holds the *previous* flag and is owned by the
//!   main loop. Once per tick it compares both halves and reacts to the
//!   edge (re-advertising on disconnect) outside the callback context.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::notifier::Transport;

/// Connection flag written by the transport callbacks.
pub struct LinkStatus {
    connected: AtomicBool,
}

impl LinkStatus {
    /// A link that starts disconnected.
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
        }
    }

    /// A central finished connection setup.
    pub fn on_connect(&self) {
        self.connected.store(true, Ordering::Release);
    }

    /// The link to the central was lost.
    pub fn on_disconnect(&self) {
        self.connected.store(false, Ordering::Release);
    }

    /// Whether a central is connected right now.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}

impl Default for LinkStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// A transition observed between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEdge {
    /// disconnected -> connected
    Connected,
    /// connected -> disconnected; advertising was restarted.
    Disconnected,
}

/// Edge detector over a shared [`LinkStatus`].
pub struct ConnectionTracker<'a> {
    status: &'a LinkStatus,
    previous: bool,
}

impl<'a> ConnectionTracker<'a> {
    pub const fn new(status: &'a LinkStatus) -> Self {
        Self {
            status,
            previous: false,
        }
    }

    /// Current connection flag, as last written by the callbacks.
    pub fn is_connected(&self) -> bool {
        self.status.is_connected()
    }

    /// Connection flag as of the last [`reconcile`](Self::reconcile).
    pub fn was_connected(&self) -> bool {
        self.previous
    }

    /// Detect and act on a connect/disconnect edge.
    ///
    /// On a disconnect edge the transport is asked to advertise again.
    /// `previous` is only brought in line with `current` after that
    /// request has been made.
    pub fn reconcile<T: Transport>(&mut self, transport: &mut T) -> Option<LinkEdge> {
        let current = self.status.is_connected();

        if !current && self.previous {
            transport.restart_advertising();
            self.previous = current;
            Some(LinkEdge::Disconnected)
        } else if current && !self.previous {
            // The stack stops advertising on its own once connected.
            self.previous = current;
            Some(LinkEdge::Connected)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::switch::SwitchCode;

    #[derive(Default)]
    struct CountingTransport {
        restarts: usize,
    }

    impl Transport for CountingTransport {
        fn publish(&mut self, _code: SwitchCode) -> Result<()> {
            Ok(())
        }

        fn restart_advertising(&mut self) {
            self.restarts += 1;
        }
    }

    #[test]
    fn link_status_starts_disconnected() {
        let status = LinkStatus::new();
        assert!(!status.is_connected());
    }

    #[test]
    fn callbacks_flip_current_only() {
        let status = LinkStatus::new();
        let tracker = ConnectionTracker::new(&status);

        status.on_connect();
        assert!(tracker.is_connected());
        assert!(!tracker.was_connected());

        status.on_disconnect();
        assert!(!tracker.is_connected());
        assert!(!tracker.was_connected());
    }

    #[test]
    fn connect_edge_does_not_readvertise() {
        let status = LinkStatus::new();
        let mut tracker = ConnectionTracker::new(&status);
        let mut transport = CountingTransport::default();

        status.on_connect();
        assert_eq!(tracker.reconcile(&mut transport), Some(LinkEdge::Connected));
        assert!(tracker.was_connected());
        assert_eq!(transport.restarts, 0);
    }

    #[test]
    fn disconnect_edge_readvertises_once() {
        let status = LinkStatus::new();
        let mut tracker = ConnectionTracker::new(&status);
        let mut transport = CountingTransport::default();

        status.on_connect();
        tracker.reconcile(&mut transport);
        status.on_disconnect();

        assert_eq!(
            tracker.reconcile(&mut transport),
            Some(LinkEdge::Disconnected)
        );
        assert_eq!(tracker.reconcile(&mut transport), None);
        assert_eq!(transport.restarts, 1);
        assert!(!tracker.was_connected());
    }

    #[test]
    fn steady_state_is_silent() {
        let status = LinkStatus::new();
        let mut tracker = ConnectionTracker::new(&status);
        let mut transport = CountingTransport::default();

        for _ in 0..3 {
            assert_eq!(tracker.reconcile(&mut transport), None);
        }

        status.on_connect();
        tracker.reconcile(&mut transport);
        for _ in 0..3 {
            assert_eq!(tracker.reconcile(&mut transport), None);
        }
        assert_eq!(transport.restarts, 0);
    }

    #[test]
    fn blip_between_ticks_is_not_an_edge() {
        let status = LinkStatus::new();
        let mut tracker = ConnectionTracker::new(&status);
        let mut transport = CountingTransport::default();

        status.on_connect();
        status.on_disconnect();

        assert_eq!(tracker.reconcile(&mut transport), None);
        assert_eq!(transport.restarts, 0);
    }
}
