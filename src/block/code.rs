//! Terminal and transaction type codes.
//!
//! Only the codes commonly seen on transit cards are recognised. Anything
//! else decodes to `None`, which callers should present as unknown rather
//! than guessing.

use zerocopy::TryFromBytes;

/// The kind of equipment that recorded a transaction.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum TerminalKind {
    FareAdjustmentMachine = 0x03,
    MobileTerminal = 0x04,
    OnboardTerminal = 0x05,
    TicketVendingMachine = 0x12,
    Gate = 0x16,
    TransferAdjustmentMachine = 0x1C,
    VendingMachine = 0xC8,
}

impl TerminalKind {
    /// Look up a terminal code.
    pub fn from_code(code: u8) -> Option<Self> {
        zerocopy::try_transmute!(code).ok()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FareAdjustmentMachine => "Fare adjustment machine",
            Self::MobileTerminal => "Mobile terminal",
            Self::OnboardTerminal => "Onboard terminal",
            Self::TicketVendingMachine => "Ticket vending machine",
            Self::Gate => "Gate",
            Self::TransferAdjustmentMachine => "Transfer adjustment machine",
            Self::VendingMachine => "Vending machine",
        }
    }

    /// The label as printed by the issuer's own readers.
    pub fn label_ja(self) -> &'static str {
        match self {
            Self::FareAdjustmentMachine => "精算機",
            Self::MobileTerminal => "携帯型端末",
            Self::OnboardTerminal => "車載端末",
            Self::TicketVendingMachine => "券売機",
            Self::Gate => "改札機",
            Self::TransferAdjustmentMachine => "乗継精算機",
            Self::VendingMachine => "自販機",
        }
    }
}

/// The kind of operation a transaction performed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes)]
pub enum TransactionKind {
    FarePayment = 0x01,
    Charge = 0x02,
    Bus = 0x0F,
    Purchase = 0x46,
}

impl TransactionKind {
    /// Look up a transaction code.
    pub fn from_code(code: u8) -> Option<Self> {
        zerocopy::try_transmute!(code).ok()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FarePayment => "Fare payment",
            Self::Charge => "Charge",
            Self::Bus => "Bus",
            Self::Purchase => "Purchase",
        }
    }

    /// The label as printed by the issuer's own readers.
    pub fn label_ja(self) -> &'static str {
        match self {
            Self::FarePayment => "運賃支払",
            Self::Charge => "チャージ",
            Self::Bus => "バス",
            Self::Purchase => "物販",
        }
    }
}
