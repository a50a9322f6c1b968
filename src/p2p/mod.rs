//! # Peer-to-Peer Surface
//!
//! The minimal peer-lifecycle contract the surrounding p2p subsystem
//! dispatches against, plus a mock implementation for its tests. Nothing
//! here touches the codec; see [`crate::core`] for the wire logic.

pub mod mock;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Identifier of a logical peer connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerId(pub String);

/// Static description of one multiplexed channel a reactor serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    /// Wire identifier of the channel.
    pub id: u8,
    /// Relative send priority among a reactor's channels.
    pub priority: u32,
}

/// A message routed to a reactor from a peer.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub channel_id: u8,
    pub peer: PeerId,
    pub payload: Bytes,
}

/// Peer-lifecycle contract a p2p switch dispatches against.
pub trait Reactor: Send + Sync {
    /// Channels this reactor serves.
    fn channels(&self) -> &[ChannelDescriptor];

    /// Called when a new peer completes its handshake.
    fn add_peer(&mut self, peer: PeerId);

    /// Called when a peer is dropped, with a human-readable reason.
    fn remove_peer(&mut self, peer: PeerId, reason: &str);

    /// Called for every message arriving on one of this reactor's
    /// channels.
    fn receive(&mut self, envelope: Envelope);
}
