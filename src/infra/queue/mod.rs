//! Selection queue backends.

pub mod heap;
pub mod scan;

pub use heap::HeapQueue;
pub use scan::LinearScanQueue;
