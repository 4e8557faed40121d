// Record-level accessor layered on the buffer pool. Every read and write
// goes through `get_block`, copying records through stack temporaries so
// that eviction between two pool calls is always safe.

use crate::constants::{BYTES_IN_KEY, BYTES_PER_RECORD, RECORDS_PER_BLOCK};
use crate::record::Record;

use super::pool::{BufferPool, PoolError};

fn locate(record_index: usize) -> (usize, usize) {
    (
        record_index / RECORDS_PER_BLOCK,
        (record_index % RECORDS_PER_BLOCK) * BYTES_PER_RECORD,
    )
}

impl BufferPool {
    /// Number of records in the backing file.
    pub fn record_count(&self) -> usize {
        (self.file_len() / BYTES_PER_RECORD as u64) as usize
    }

    pub fn get_key(&mut self, record_index: usize) -> Result<i16, PoolError> {
        let (block, offset) = locate(record_index);
        let bytes = self.get_block(block)?;
        Ok(i16::from_be_bytes([bytes[offset], bytes[offset + 1]]))
    }

    pub fn get_value(&mut self, record_index: usize) -> Result<i16, PoolError> {
        let (block, offset) = locate(record_index);
        let bytes = self.get_block(block)?;
        let offset = offset + BYTES_IN_KEY;
        Ok(i16::from_be_bytes([bytes[offset], bytes[offset + 1]]))
    }

    /// Reads both halves of a record with a single block fetch.
    pub fn get_record(&mut self, record_index: usize) -> Result<Record, PoolError> {
        let (block, offset) = locate(record_index);
        let bytes = self.get_block(block)?;
        Ok(Record::from_bytes(&bytes[offset..offset + BYTES_PER_RECORD]))
    }

    /// Writes a record and marks its block dirty.
    pub fn set_record(&mut self, record_index: usize, record: Record) -> Result<(), PoolError> {
        let (block, offset) = locate(record_index);
        let bytes = self.get_block(block)?;
        record.write_bytes(&mut bytes[offset..offset + BYTES_PER_RECORD]);
        // The block is still resident: nothing ran between the fetch and
        // here, so this marks without a second counted access.
        self.mark_dirty(block)
    }

    /// Exchanges records `i` and `j`. A same-block swap touches the pool
    /// exactly once; a cross-block swap copies both records out before
    /// writing either back, because the second fetch may evict the first
    /// block.
    pub fn swap_records(&mut self, i: usize, j: usize) -> Result<(), PoolError> {
        if i == j {
            return Ok(());
        }

        let (block_i, offset_i) = locate(i);
        let (block_j, offset_j) = locate(j);

        if block_i == block_j {
            let bytes = self.get_block(block_i)?;
            let mut temp = [0u8; BYTES_PER_RECORD];
            temp.copy_from_slice(&bytes[offset_i..offset_i + BYTES_PER_RECORD]);
            bytes.copy_within(offset_j..offset_j + BYTES_PER_RECORD, offset_i);
            bytes[offset_j..offset_j + BYTES_PER_RECORD].copy_from_slice(&temp);
            self.mark_dirty(block_i)
        } else {
            let record_i = self.get_record(i)?;
            let record_j = self.get_record(j)?;
            self.set_record(i, record_j)?;
            self.set_record(j, record_i)
        }
    }
}
