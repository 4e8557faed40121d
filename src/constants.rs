pub const BYTES_IN_KEY: usize = 2;
pub const BYTES_IN_VALUE: usize = 2;
pub const BYTES_PER_RECORD: usize = BYTES_IN_KEY + BYTES_IN_VALUE;
pub const BYTES_PER_BLOCK: usize = 4096;
pub const RECORDS_PER_BLOCK: usize = BYTES_PER_BLOCK / BYTES_PER_RECORD;

pub const MIN_BUFFERS: usize = 1;
pub const MAX_BUFFERS: usize = 20;

pub const SMALL_SORT_MAX_RECORDS: usize = 5000;
pub const MEDIUM_SORT_MAX_RECORDS: usize = 50000;
pub const LARGE_SORT_CHUNK_RECORDS: usize = 10000;
pub const INSERTION_SORT_THRESHOLD: usize = 32;
