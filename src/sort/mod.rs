pub mod config;
pub mod driver;
pub mod kernels;


pub use config::SortConfig;
pub use driver::BlockSorter;

use std::path::Path;

use anyhow::Result;

use crate::pool::BufferPool;

/// Outcome of one sort: the pool's access counters plus wall time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortStats {
    pub records: usize,
    pub cache_hits: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
    pub sort_time_ms: u64,
}

/// Sorts `data_file` in place through a pool of `num_buffers` page buffers.
pub fn sort_file(data_file: &Path, num_buffers: usize, config: SortConfig) -> Result<SortStats> {
    config.validate()?;
    let pool = BufferPool::open(data_file, num_buffers)?;
    BlockSorter::new(pool, config).sort()
}
