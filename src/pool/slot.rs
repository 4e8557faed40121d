use crate::constants::BYTES_PER_BLOCK;

/// One fixed buffer in the pool: a block image plus its metadata.
///
/// `block_id` is `None` while the slot is empty or mid-load; `stamp` is the
/// pool-issued ordering value from the slot's most recent residency update.
pub(super) struct BufferSlot {
    pub block_id: Option<usize>,
    pub bytes: Box<[u8]>,
    pub dirty: bool,
    pub stamp: u64,
}

impl BufferSlot {
    pub fn empty() -> Self {
        Self {
            block_id: None,
            bytes: vec![0u8; BYTES_PER_BLOCK].into_boxed_slice(),
            dirty: false,
            stamp: 0,
        }
    }
}
