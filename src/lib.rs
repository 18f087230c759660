#![no_std]

//! A decoder for the transaction history kept by FeliCa transit stored-value
//! cards (Suica and its interoperable siblings).
//!
//! A card keeps its most recent transactions as fixed 16-byte history blocks,
//! newest first. This crate turns those blocks into a chronological log of
//! [`history::Transaction`]s, each annotated with the fare or charge it moved
//! and with station names resolved from a lookup table.
//!
//! Most users should begin with [`history::read_history`], supplying a
//! [`transport::Transport`] and a [`station::StationResolver`]. The pieces it
//! is built from are public for applications that obtain blocks some other
//! way:
//!
//! - [`block`] decodes a single block ([`block::decode`]).
//! - [`history`] orders decoded blocks and computes payments
//!   ([`history::reconstruct`]).
//! - [`station`] defines station lookup, with an in-memory
//!   [`station::table::StationTable`] loaded from a CSV file.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable CSV station tables and dump-backed transports (default).
//! - `cli`: build the `felica-history` binary (default).

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod block;
pub mod history;
pub mod station;
pub mod transport;
