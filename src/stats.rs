use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use crate::sort::SortStats;

/// Appends one sort's statistics entry to `stat_file`, creating it if
/// needed. Entries are separated by a blank line.
pub fn append_entry(stat_file: &Path, data_file: &str, stats: &SortStats) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(stat_file)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "File: {}", data_file)?;
    writeln!(writer, "Cache hits: {}", stats.cache_hits)?;
    writeln!(writer, "Disk reads: {}", stats.disk_reads)?;
    writeln!(writer, "Disk writes: {}", stats.disk_writes)?;
    writeln!(writer, "Sort time: {} ms", stats.sort_time_ms)?;
    writeln!(writer)?;

    writer.flush()?;
    Ok(())
}
