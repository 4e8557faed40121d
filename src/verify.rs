use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Result};

use crate::constants::BYTES_PER_RECORD;

/// Sequentially scans `path` and reports whether record keys are in
/// non-decreasing order.
///
/// Reads the file directly rather than through a pool, so it can check the
/// sort's output without disturbing any counters.
pub fn is_sorted(path: &Path) -> Result<bool> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = [0u8; BYTES_PER_RECORD];
    let mut prev_key: Option<i16> = None;

    loop {
        let mut filled = 0;
        while filled < BYTES_PER_RECORD {
            let n = reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == 0 {
            break;
        }
        if filled < BYTES_PER_RECORD {
            bail!("truncated record at end of {}", path.display());
        }

        let key = i16::from_be_bytes([buf[0], buf[1]]);
        if let Some(prev) = prev_key {
            if prev > key {
                return Ok(false);
            }
        }
        prev_key = Some(key);
    }

    Ok(true)
}
