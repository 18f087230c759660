//! Retrieval of history blocks from a card.
//!
//! Talking to a reader is left to implementations of [`Transport`]. A card
//! read is a single tap: the transport requests the history service and
//! returns whatever blocks the card holds, most recent first. Block contents
//! are untrusted, and are returned without checking their length.

use alloc::vec::Vec;

use tartan_bitfield::bitfield;
use thiserror::Error;

#[cfg(feature = "std")]
pub mod dump;

/// Service code of the transaction history on transit cards.
pub const HISTORY_SERVICE_CODE: u16 = 0x090F;

/// Number of history blocks requested per tap.
pub const MAX_HISTORY_BLOCKS: usize = 20;

bitfield! {
    struct ServiceCodeBits(u16) {
        [0..6] attribute: u8,
        [6..16] number: u16,
    }
}

/// A FeliCa service code, split into its service number and access
/// attribute as readers address it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode {
    pub number: u16,
    pub attribute: u8,
}

impl ServiceCode {
    pub fn from_code(code: u16) -> Self {
        let bits = ServiceCodeBits(code);

        Self {
            number: bits.number(),
            attribute: bits.attribute(),
        }
    }

    /// The service holding the transaction history.
    pub fn history() -> Self {
        Self::from_code(HISTORY_SERVICE_CODE)
    }
}

/// An error reading blocks from a card.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The presented card is not a FeliCa (NFC Type 3) tag.
    #[error("The presented card is not a FeliCa tag.")]
    WrongCardType,
    /// The card stopped responding, or refused the read.
    #[error("The card could not be read.")]
    Unreadable,
    /// An error from the underlying reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A hex block dump is not text.
    #[cfg(feature = "std")]
    #[error("Hex block dump is not valid UTF-8: {0}.")]
    Utf8(#[from] core::str::Utf8Error),
    /// A line of a hex block dump is not valid hex.
    #[cfg(feature = "std")]
    #[error("Invalid hex on line {line} of block dump: {source}.")]
    Hex {
        line: usize,
        source: hex::FromHexError,
    },
}

/// A source of history blocks.
pub trait Transport {
    /// Read up to `max` history blocks from a single tap, most recent first.
    ///
    /// Fewer blocks are returned when the card holds fewer transactions.
    fn read_blocks(&mut self, max: usize) -> Result<Vec<Vec<u8>>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read_blocks(&mut self, max: usize) -> Result<Vec<Vec<u8>>, TransportError> {
        (**self).read_blocks(max)
    }
}
