//! Transport backed by a saved block dump.
//!
//! _Requires Cargo feature `std`._
//!
//! Dumps hold history blocks most recent first, in one of two formats:
//!
//! - [`DumpFormat::Binary`]: consecutive 16-byte blocks.
//! - [`DumpFormat::Hex`]: one block per line as hex. Whitespace within a line
//!   is ignored, as are blank lines and lines starting with `#`.

use std::{io::Read, vec::Vec};

use either::Either::{Left, Right};
use log::{debug, warn};

use crate::block::BLOCK_LEN;

use super::{Transport, TransportError};

/// The encoding of a block dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    #[default]
    Binary,
    Hex,
}

/// A [`Transport`] reading blocks from a dump.
///
/// The reader is consumed by the first read; later reads find no blocks.
#[derive(Debug)]
pub struct BlockDump<R> {
    reader: R,
    format: DumpFormat,
}

impl<R: Read> BlockDump<R> {
    pub fn new(reader: R, format: DumpFormat) -> Self {
        Self { reader, format }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Transport for BlockDump<R> {
    fn read_blocks(&mut self, max: usize) -> Result<Vec<Vec<u8>>, TransportError> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;

        let blocks = match self.format {
            DumpFormat::Binary => {
                if data.len() % BLOCK_LEN != 0 {
                    warn!(
                        "Block dump of {} bytes ends with a partial block",
                        data.len()
                    );
                }

                Left(data.chunks(BLOCK_LEN).map(|c| Ok::<_, TransportError>(c.to_vec())))
            }
            DumpFormat::Hex => {
                let text = std::str::from_utf8(&data)?;

                Right(
                    text.lines()
                        .enumerate()
                        .map(|(i, l)| (i + 1, l.trim()))
                        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
                        .map(|(line, l)| {
                            let digits: std::string::String =
                                l.chars().filter(|c| !c.is_whitespace()).collect();
                            hex::decode(digits)
                                .map_err(|source| TransportError::Hex { line, source })
                        }),
                )
            }
        };

        let blocks = blocks.take(max).collect::<Result<Vec<_>, _>>()?;
        debug!("Read {} blocks from {:?} dump", blocks.len(), self.format);

        Ok(blocks)
    }
}
