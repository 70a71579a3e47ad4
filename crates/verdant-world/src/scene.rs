//! The seam between the streaming core and the scene collaborator.
//!
//! The core only decides *what* exists; turning a descriptor into drawable
//! objects is the collaborator's business. The contract: exactly one
//! `chunk_ready` per resident key, exactly one instantiation per placement
//! record, and `chunk_retired` only for keys previously made ready.

use verdant_common::ChunkKey;

use crate::chunk::ChunkDescriptor;

/// Receiver for chunk lifecycle events.
pub trait SceneSink {
    /// A newly generated chunk is ready to instantiate. Ownership of the
    /// descriptor (and its placement records) passes to the sink.
    fn chunk_ready(&mut self, chunk: ChunkDescriptor);

    /// A previously ready chunk left the retention range and should be torn
    /// down.
    fn chunk_retired(&mut self, key: ChunkKey);
}

/// Sink that retains everything it receives.
///
/// Used by tests and by collaborators that buffer instantiation work.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ready: Vec<ChunkDescriptor>,
    retired: Vec<ChunkKey>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all descriptors received so far, in emission order.
    #[must_use]
    pub fn ready(&self) -> &[ChunkDescriptor] {
        &self.ready
    }

    /// Returns all retired keys received so far, in notification order.
    #[must_use]
    pub fn retired(&self) -> &[ChunkKey] {
        &self.retired
    }

    /// Returns the keys of all descriptors received so far.
    #[must_use]
    pub fn ready_keys(&self) -> Vec<ChunkKey> {
        self.ready.iter().map(|c| c.key).collect()
    }
}

impl SceneSink for RecordingSink {
    fn chunk_ready(&mut self, chunk: ChunkDescriptor) {
        self.ready.push(chunk);
    }

    fn chunk_retired(&mut self, key: ChunkKey) {
        self.retired.push(key);
    }
}
