//! Main-loop context.
//!
//! [`App`] owns everything one loop iteration touches: the edge tracker,
//! the switch input, and the transport. The embedded entry point calls
//! [`App::tick`] once per period and logs the returned [`Tick`].

use crate::link::{ConnectionTracker, LinkEdge, LinkStatus};
use crate::notifier::{poll_and_publish, Publish, Transport};
use crate::switch::SwitchInput;

/// What happened during one loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Set when a central was connected and a code was published.
    pub publish: Option<Publish>,
    /// Set when the link changed since the previous tick.
    pub edge: Option<LinkEdge>,
}

pub struct App<'a, S, T> {
    tracker: ConnectionTracker<'a>,
    input: S,
    transport: T,
}

impl<'a, S, T> App<'a, S, T>
where
    S: SwitchInput,
    T: Transport,
{
    pub fn new(status: &'a LinkStatus, input: S, transport: T) -> Self {
        Self {
            tracker: ConnectionTracker::new(status),
            input,
            transport,
        }
    }

    /// Run one iteration: publish while connected, then reconcile edges.
    pub fn tick(&mut self) -> Tick {
        let publish = if self.tracker.is_connected() {
            Some(poll_and_publish(&mut self.input, &mut self.transport))
        } else {
            None
        };

        let edge = self.tracker.reconcile(&mut self.transport);

        Tick { publish, edge }
    }

    pub fn tracker(&self) -> &ConnectionTracker<'a> {
        &self.tracker
    }

    pub fn input_mut(&mut self) -> &mut S {
        &mut self.input
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
