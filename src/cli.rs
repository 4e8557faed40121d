use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::constants::{MAX_BUFFERS, MIN_BUFFERS};
use crate::sort::{self, SortConfig};
use crate::{stats, verify};

pub const USAGE: &str = "Usage: pagesort <data-file> <num-buffers> <stat-file>";

/// Runs the sort command against `args` (program name excluded), printing
/// every message to `out`.
///
/// Argument problems and surfaced sort errors all end as a single printed
/// line; the function itself only fails if `out` cannot be written.
pub fn run<W: Write>(args: &[String], out: &mut W) -> Result<()> {
    if args.len() != 3 {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }

    let data_file = &args[0];
    let stat_file = &args[2];

    // Parsed as signed so a negative count reads as an integer that is
    // merely out of range, not as a malformed number.
    let num_buffers: i64 = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            writeln!(out, "Error: Invalid number of buffers")?;
            return Ok(());
        }
    };

    if !(MIN_BUFFERS as i64..=MAX_BUFFERS as i64).contains(&num_buffers) {
        writeln!(
            out,
            "Number of buffers must be between {MIN_BUFFERS} and {MAX_BUFFERS}"
        )?;
        return Ok(());
    }

    match sort_and_verify(Path::new(data_file), num_buffers as usize, Path::new(stat_file)) {
        Ok(true) => writeln!(out, "File sorted successfully")?,
        Ok(false) => writeln!(out, "Error: File not sorted correctly")?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    Ok(())
}

/// Sorts the file, records statistics, and checks the result.
fn sort_and_verify(data_file: &Path, num_buffers: usize, stat_file: &Path) -> Result<bool> {
    let sort_stats = sort::sort_file(data_file, num_buffers, SortConfig::default())?;
    stats::append_entry(stat_file, &data_file.display().to_string(), &sort_stats)?;
    verify::is_sorted(data_file)
}
