// Sort kernels driven through the record accessor. Both operate on
// inclusive index ranges, so their I/O cost is governed entirely by the
// pool's residency.

use anyhow::Result;

use crate::pool::BufferPool;
use crate::record::Record;

/// Recursive merge sort over the record range `[lo, hi]`.
///
/// Ranges at or below `insertion_threshold` fall back to insertion sort.
/// The merge is skipped when the two halves are already in order.
pub fn merge_sort(
    pool: &mut BufferPool,
    lo: usize,
    hi: usize,
    insertion_threshold: usize,
) -> Result<()> {
    if hi - lo <= insertion_threshold {
        return insertion_sort(pool, lo, hi);
    }

    let mid = lo + (hi - lo) / 2;
    merge_sort(pool, lo, mid, insertion_threshold)?;
    merge_sort(pool, mid + 1, hi, insertion_threshold)?;

    if pool.get_key(mid)? <= pool.get_key(mid + 1)? {
        return Ok(());
    }

    merge(pool, lo, mid, hi)
}

/// In-place insertion sort over `[lo, hi]`.
///
/// The held record is only written when it actually moved.
pub fn insertion_sort(pool: &mut BufferPool, lo: usize, hi: usize) -> Result<()> {
    for i in lo + 1..=hi {
        let held = pool.get_record(i)?;

        let mut j = i;
        while j > lo && pool.get_key(j - 1)? > held.key {
            let shifted = pool.get_record(j - 1)?;
            pool.set_record(j, shifted)?;
            j -= 1;
        }

        if j != i {
            pool.set_record(j, held)?;
        }
    }
    Ok(())
}

/// Merges the sorted ranges `[lo, mid]` and `[mid+1, hi]`.
///
/// Both halves are materialised into temporary arrays first; the merged
/// output is then written back through the accessor, which keeps the
/// working set bounded by the range being merged rather than the file.
pub fn merge(pool: &mut BufferPool, lo: usize, mid: usize, hi: usize) -> Result<()> {
    let mut left: Vec<Record> = Vec::with_capacity(mid - lo + 1);
    for index in lo..=mid {
        left.push(pool.get_record(index)?);
    }

    let mut right: Vec<Record> = Vec::with_capacity(hi - mid);
    for index in mid + 1..=hi {
        right.push(pool.get_record(index)?);
    }

    let mut i = 0;
    let mut j = 0;
    let mut out = lo;

    while i < left.len() && j < right.len() {
        if left[i].key <= right[j].key {
            pool.set_record(out, left[i])?;
            i += 1;
        } else {
            pool.set_record(out, right[j])?;
            j += 1;
        }
        out += 1;
    }

    while i < left.len() {
        pool.set_record(out, left[i])?;
        i += 1;
        out += 1;
    }

    while j < right.len() {
        pool.set_record(out, right[j])?;
        j += 1;
        out += 1;
    }

    Ok(())
}
