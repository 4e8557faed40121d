use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};

use crate::pool::BufferPool;
use crate::record::Record;

use super::config::SortConfig;
use super::kernels::{merge, merge_sort};
use super::SortStats;

/// Size-adaptive sort over a buffer pool.
///
/// The sorter owns the pool for the duration of the sort: [`sort`](Self::sort)
/// dispatches on the record count, flushes, closes the pool, and returns the
/// accumulated statistics.
pub struct BlockSorter {
    pool: BufferPool,
    config: SortConfig,
}

impl BlockSorter {
    pub fn new(pool: BufferPool, config: SortConfig) -> Self {
        Self { pool, config }
    }

    pub fn sort(mut self) -> Result<SortStats> {
        let records = self.pool.record_count();
        let started = Instant::now();

        if records > 1 {
            if records <= self.config.small_sort_max_records {
                info!(records, "sorting in memory");
                self.sort_in_memory(records)?;
            } else if records <= self.config.medium_sort_max_records {
                info!(records, "sorting with block merge sort");
                merge_sort(
                    &mut self.pool,
                    0,
                    records - 1,
                    self.config.insertion_sort_threshold,
                )?;
            } else {
                info!(records, "sorting with chunked merge sort");
                self.sort_chunked(records)?;
            }
        }

        self.pool.flush_all()?;
        let pool_stats = self.pool.close()?;
        let sort_time_ms = started.elapsed().as_millis() as u64;

        Ok(SortStats {
            records,
            cache_hits: pool_stats.cache_hits,
            disk_reads: pool_stats.disk_reads,
            disk_writes: pool_stats.disk_writes,
            sort_time_ms,
        })
    }

    /// Small files: pull every record into one array, sort it, write it
    /// back in order.
    fn sort_in_memory(&mut self, records: usize) -> Result<()> {
        let mut all: Vec<Record> = Vec::with_capacity(records);
        for index in 0..records {
            all.push(self.pool.get_record(index)?);
        }

        all.sort_unstable_by_key(|record| record.key);

        for (index, record) in all.into_iter().enumerate() {
            self.pool.set_record(index, record)?;
        }
        Ok(())
    }

    /// Large files: sort fixed-size chunks, then merge adjacent pairs of
    /// geometrically growing width. Each merge's working set stays
    /// proportional to the current chunk size rather than the whole file.
    ///
    /// With an odd chunk count the tail chunk is carried forward unmerged;
    /// it is already sorted, and the next round's doubled window sweeps it
    /// in.
    fn sort_chunked(&mut self, records: usize) -> Result<()> {
        let chunk = self.config.large_sort_chunk_records;
        let mut num_chunks = (records + chunk - 1) / chunk;

        for index in 0..num_chunks {
            let start = index * chunk;
            let end = (start + chunk - 1).min(records - 1);
            merge_sort(
                &mut self.pool,
                start,
                end,
                self.config.insertion_sort_threshold,
            )?;
        }

        let mut chunk_len = chunk;
        while num_chunks > 1 {
            debug!(num_chunks, chunk_len, "merging chunk pairs");
            for pair in 0..num_chunks / 2 {
                let start = pair * 2 * chunk_len;
                let mid = (start + chunk_len - 1).min(records - 1);
                let end = (mid + chunk_len).min(records - 1);
                if mid < end {
                    merge(&mut self.pool, start, mid, end)?;
                }
            }

            chunk_len *= 2;
            num_chunks = (num_chunks + 1) / 2;
        }
        Ok(())
    }
}
