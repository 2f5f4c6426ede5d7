//! Storage backends behind the queue abstractions.

pub mod queue;
pub use queue::HeapQueue;
pub use queue::LinearScanQueue;
