//! Decoding of individual history blocks.
//!
//! # Layout
//!
//! A history block is 16 bytes, made up of two single bytes, two 16-bit
//! words, four single bytes, one 16-bit word and four single bytes. Card
//! firmware writes most words big-endian, but the balance little-endian. The
//! block is therefore read twice, once in each byte order, and each field is
//! picked from the reading that matches how it was written:
//!
//! | Index | Width | Order  | Field                         |
//! |-------|-------|--------|-------------------------------|
//! | 0     | 8     | big    | terminal code                 |
//! | 1     | 8     | big    | transaction code              |
//! | 3     | 16    | big    | packed date                   |
//! | 4, 5  | 8, 8  | big    | entry line, entry station     |
//! | 6, 7  | 8, 8  | big    | exit line, exit station       |
//! | 8     | 16    | little | balance after the transaction |
//!
//! Remaining fields are not interpreted.

use thiserror::Error;
use zerocopy::{
    FromBytes,
    byteorder::{BigEndian, LittleEndian, U16},
};

use crate::station::{StationInfo, StationRef, StationResolver};

pub mod code;
pub mod date;

use code::{TerminalKind, TransactionKind};
use date::HistoryDate;

/// The size of a history block in bytes.
pub const BLOCK_LEN: usize = 16;

/// A history block as read from a card.
pub type RawBlock = [u8; BLOCK_LEN];

/// An error decoding a history block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The block is not [`BLOCK_LEN`] bytes long.
    #[error("Expected a {BLOCK_LEN} byte history block, found {found} bytes.")]
    Length { found: usize },
}

macro_rules! fields {
    ($t:ident, $order:ident) => {
        /// Every field of a block, read in one byte order.
        #[allow(dead_code)]
        #[repr(C)]
        #[derive(FromBytes)]
        struct $t(
            u8,
            u8,
            U16<$order>,
            U16<$order>,
            u8,
            u8,
            u8,
            u8,
            U16<$order>,
            u8,
            u8,
            u8,
            u8,
        );
    };
}

fields!(BigEndianFields, BigEndian);
fields!(LittleEndianFields, LittleEndian);

/// The contents of one history block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub terminal_code: u8,
    /// The terminal kind, if the code is recognised.
    pub terminal: Option<TerminalKind>,
    pub transaction_code: u8,
    /// The transaction kind, if the code is recognised.
    pub transaction: Option<TransactionKind>,
    pub date: HistoryDate,
    pub in_ref: StationRef,
    pub in_station: StationInfo,
    pub out_ref: StationRef,
    pub out_station: StationInfo,
    /// The card balance after this transaction was applied.
    pub balance: u16,
}

/// Decode a history block, resolving its stations.
///
/// Decoding cannot fail. Unrecognised codes are kept as `None` and unknown
/// stations resolve to [`StationInfo::not_found`], so unused all-zero blocks
/// also decode.
pub fn decode<S: StationResolver + ?Sized>(r: RawBlock, stations: &S) -> HistoryEntry {
    let be: BigEndianFields = zerocopy::transmute!(r);
    let le: LittleEndianFields = zerocopy::transmute!(r);

    let in_ref = StationRef::new(be.4, be.5);
    let out_ref = StationRef::new(be.6, be.7);

    HistoryEntry {
        terminal_code: be.0,
        terminal: TerminalKind::from_code(be.0),
        transaction_code: be.1,
        transaction: TransactionKind::from_code(be.1),
        date: date::decode(be.3.get()),
        in_ref,
        in_station: stations.resolve(in_ref),
        out_ref,
        out_station: stations.resolve(out_ref),
        balance: le.8.get(),
    }
}

/// Decode a history block from a slice, which must be exactly [`BLOCK_LEN`]
/// bytes long.
pub fn decode_slice<S: StationResolver + ?Sized>(
    r: &[u8],
    stations: &S,
) -> Result<HistoryEntry, FormatError> {
    let block = r
        .try_into()
        .map_err(|_| FormatError::Length { found: r.len() })?;

    Ok(decode(block, stations))
}
