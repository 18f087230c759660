//! Reconstruction of a chronological transaction log.
//!
//! Cards store only the balance left after each transaction, not the amount
//! it moved. The amount is recovered by differencing the balances of
//! neighbouring blocks, which costs one entry: the most recent block has no
//! later balance to compare against and is left out of the log.

use alloc::vec::Vec;

use log::debug;
use thiserror::Error;

use crate::{
    block::{
        self, FormatError, HistoryEntry,
        code::{TerminalKind, TransactionKind},
        date::HistoryDate,
    },
    station::{StationInfo, StationResolver},
    transport::{MAX_HISTORY_BLOCKS, Transport, TransportError},
};

/// Errors occurring while reading a card's history.
#[derive(Debug, Error)]
pub enum Error {
    /// Blocks could not be read from the card.
    #[error("Failed to read card: {0}")]
    Transport(#[from] TransportError),
    /// A block could not be decoded.
    #[error("Failed to decode history block {index}: {source}")]
    Format { index: usize, source: FormatError },
}

/// A transaction in the reconstructed log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub terminal_code: u8,
    pub terminal: Option<TerminalKind>,
    pub transaction_code: u8,
    pub transaction: Option<TransactionKind>,
    pub date: HistoryDate,
    pub in_station: StationInfo,
    pub out_station: StationInfo,
    /// The card balance after this transaction.
    pub balance: u16,
    /// This transaction's balance minus that of the transaction after it.
    pub payment: i32,
}

impl Transaction {
    fn new(entry: HistoryEntry, payment: i32) -> Self {
        let HistoryEntry {
            terminal_code,
            terminal,
            transaction_code,
            transaction,
            date,
            in_station,
            out_station,
            balance,
            ..
        } = entry;

        Self {
            terminal_code,
            terminal,
            transaction_code,
            transaction,
            date,
            in_station,
            out_station,
            balance,
            payment,
        }
    }

    pub fn terminal_label(&self) -> Option<&'static str> {
        self.terminal.map(TerminalKind::label)
    }

    pub fn transaction_label(&self) -> Option<&'static str> {
        self.transaction.map(TransactionKind::label)
    }
}

/// Build a chronological log from decoded entries in card order, most recent
/// first.
///
/// Each entry after the first is paired with the entry before it (the next
/// more recent transaction), and is assigned a payment of its own balance
/// minus that entry's balance. The most recent entry receives no payment and
/// is dropped. The rest are returned oldest first, so `n` entries yield
/// `n - 1` transactions, and fewer than two entries yield none.
pub fn reconstruct(entries: impl IntoIterator<Item = HistoryEntry>) -> Vec<Transaction> {
    let mut entries = entries.into_iter();

    let Some(newest) = entries.next() else {
        return Vec::new();
    };

    debug!(
        "Dropping most recent entry from {} (balance {}) with no later balance",
        newest.date, newest.balance
    );

    let mut later = newest.balance;
    let mut log = Vec::with_capacity(entries.size_hint().0);

    for entry in entries {
        let payment = i32::from(entry.balance) - i32::from(later);
        later = entry.balance;
        log.push(Transaction::new(entry, payment));
    }

    log.reverse();
    log
}

/// Decode blocks in card order, stopping at the first malformed one.
pub fn decode_blocks<S: StationResolver + ?Sized>(
    blocks: &[impl AsRef<[u8]>],
    stations: &S,
) -> Result<Vec<HistoryEntry>, Error> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, r)| {
            block::decode_slice(r.as_ref(), stations)
                .map_err(|source| Error::Format { index, source })
        })
        .collect()
}

/// Read a card's history and reconstruct its transaction log.
///
/// Requests up to [`MAX_HISTORY_BLOCKS`] blocks from the transport.
pub fn read_history<S: StationResolver + ?Sized>(
    transport: &mut impl Transport,
    stations: &S,
) -> Result<Vec<Transaction>, Error> {
    let blocks = transport.read_blocks(MAX_HISTORY_BLOCKS)?;
    let entries = decode_blocks(&blocks, stations)?;

    Ok(reconstruct(entries))
}
