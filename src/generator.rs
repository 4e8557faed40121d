use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{BYTES_PER_BLOCK, BYTES_PER_RECORD, RECORDS_PER_BLOCK};
use crate::record::Record;

/// Key/value domain for generated files.
///
/// `Ascii` restricts both halves to printable ASCII codes, which makes the
/// raw file loosely human-readable while keeping the record format
/// identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    Binary,
    Ascii,
}

const ASCII_PRINTABLE: std::ops::RangeInclusive<i16> = 32..=126;

/// Seeded random record-file generator, sized in whole blocks.
pub struct FileGenerator {
    path: PathBuf,
    num_blocks: usize,
    domain: KeyDomain,
    seed: Option<u64>,
}

impl FileGenerator {
    pub fn new(path: &Path, num_blocks: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            num_blocks,
            domain: KeyDomain::Binary,
            seed: None,
        }
    }

    pub fn with_domain(mut self, domain: KeyDomain) -> Self {
        self.domain = domain;
        self
    }

    /// Fixes the RNG seed so the generated file is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate(&self) -> Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::with_capacity(BYTES_PER_BLOCK, file);
        let mut buf = [0u8; BYTES_PER_RECORD];

        for _ in 0..self.num_blocks * RECORDS_PER_BLOCK {
            let record = match self.domain {
                KeyDomain::Binary => Record::new(rng.gen(), rng.gen()),
                KeyDomain::Ascii => Record::new(
                    rng.gen_range(ASCII_PRINTABLE),
                    rng.gen_range(ASCII_PRINTABLE),
                ),
            };
            record.write_bytes(&mut buf);
            writer.write_all(&buf)?;
        }

        writer.flush()?;
        Ok(())
    }
}
