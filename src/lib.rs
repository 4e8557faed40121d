pub mod cli;
pub mod constants;
pub mod generator;
pub mod logging;
pub mod pool;
pub mod record;
pub mod sort;
pub mod stats;
pub mod verify;

// Re-export main types for easier access
pub use pool::{BufferPool, PoolError, PoolStats};
pub use record::Record;
pub use sort::{sort_file, BlockSorter, SortConfig, SortStats};
