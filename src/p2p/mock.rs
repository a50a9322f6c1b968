//! Mock reactor: satisfies the [`Reactor`] contract with inert bodies,
//! for tests of the surrounding p2p machinery.

use tracing::debug;

use crate::p2p::{ChannelDescriptor, Envelope, PeerId, Reactor};

/// A [`Reactor`] with no behavior: it serves a fixed, test-configured
/// channel list and ignores every lifecycle call.
#[derive(Debug, Default)]
pub struct MockReactor {
    channels: Vec<ChannelDescriptor>,
}

impl MockReactor {
    pub fn new(channels: Vec<ChannelDescriptor>) -> Self {
        Self { channels }
    }
}

impl Reactor for MockReactor {
    fn channels(&self) -> &[ChannelDescriptor] {
        &self.channels
    }

    fn add_peer(&mut self, peer: PeerId) {
        debug!(peer = %peer.0, "mock reactor ignoring add_peer");
    }

    fn remove_peer(&mut self, peer: PeerId, reason: &str) {
        debug!(peer = %peer.0, reason, "mock reactor ignoring remove_peer");
    }

    fn receive(&mut self, envelope: Envelope) {
        debug!(
            channel = envelope.channel_id,
            bytes = envelope.payload.len(),
            "mock reactor dropping message"
        );
    }
}
