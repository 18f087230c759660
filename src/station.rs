//! Station lookup.
//!
//! History blocks identify stations by a pair of small codes: a line code
//! and a station code within that line. Turning these into names requires a
//! reference table, which this crate does not ship. Implement
//! [`StationResolver`] over whatever table is available, or load one with
//! [`table::StationTable`].

use alloc::string::String;

#[cfg(feature = "std")]
pub mod table;

/// Placeholder held by every field of [`StationInfo::not_found`].
pub const NOT_FOUND: &str = "None";

/// A (line, station) code pair as stored in a history block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StationRef {
    pub line: u8,
    pub station: u8,
}

impl StationRef {
    pub fn new(line: u8, station: u8) -> Self {
        Self { line, station }
    }
}

/// Names for a station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationInfo {
    /// Regional code from the reference table; informational only.
    pub area: u8,
    pub company: String,
    pub line: String,
    pub station: String,
}

impl StationInfo {
    /// The value for stations missing from the reference table.
    pub fn not_found() -> Self {
        Self {
            area: 0,
            company: NOT_FOUND.into(),
            line: NOT_FOUND.into(),
            station: NOT_FOUND.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        *self == Self::not_found()
    }
}

/// Resolve station codes to names.
///
/// Resolution is total: a pair absent from the backing table yields
/// [`StationInfo::not_found`]. Implementations are expected to be fast and
/// local, typically a table loaded once and shared for the life of the
/// process.
pub trait StationResolver {
    fn resolve(&self, r: StationRef) -> StationInfo;
}

impl<T: StationResolver + ?Sized> StationResolver for &T {
    fn resolve(&self, r: StationRef) -> StationInfo {
        (**self).resolve(r)
    }
}
