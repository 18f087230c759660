//! Dates packed into history blocks.

use core::fmt;

use tartan_bitfield::bitfield;

/// The year that stored year offsets count from.
pub const EPOCH_YEAR: u16 = 2000;

bitfield! {
    struct PackedDate(u16) {
        [0..5] day: u8,
        [5..9] month: u8,
        [9..16] year_offset: u8,
    }
}

/// A calendar date read from a history block.
///
/// Values are taken from the block as stored. A blank or damaged block can
/// yield a month or day of zero, or a month above twelve; checking for a real
/// calendar date is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HistoryDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl HistoryDate {
    /// Years since [`EPOCH_YEAR`], as stored on the card.
    ///
    /// Decoded dates span 2000 to 2127. Years before the epoch give zero and
    /// years past 2255 give `u8::MAX`.
    pub fn year_offset(&self) -> u8 {
        u8::try_from(self.year.saturating_sub(EPOCH_YEAR)).unwrap_or(u8::MAX)
    }
}

impl fmt::Display for HistoryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Unpack a 16-bit date field.
///
/// The field holds seven bits of year offset, four of month, and five of day,
/// from most to least significant. The value must already be assembled in
/// the block's byte order.
pub fn decode(r: u16) -> HistoryDate {
    let packed = PackedDate(r);

    HistoryDate {
        year: EPOCH_YEAR + u16::from(packed.year_offset()),
        month: packed.month(),
        day: packed.day(),
    }
}

/// Pack a date into a 16-bit date field.
///
/// Components wider than their bit range are truncated to it.
pub fn encode(year_offset: u8, month: u8, day: u8) -> u16 {
    let mut packed = PackedDate(0);

    packed.set_year_offset(year_offset & 0x7F);
    packed.set_month(month & 0x0F);
    packed.set_day(day & 0x1F);

    packed.0
}
