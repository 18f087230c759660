use felica_history::{
    block::{
        self, BLOCK_LEN, FormatError,
        code::{TerminalKind, TransactionKind},
        date::{self, EPOCH_YEAR, HistoryDate},
    },
    station::{StationInfo, StationRef, StationResolver},
};

/// Resolves only the station at line 0x25, station 0x0A.
struct OneStation;

impl StationResolver for OneStation {
    fn resolve(&self, r: StationRef) -> StationInfo {
        if r == StationRef::new(0x25, 0x0A) {
            StationInfo {
                area: 0,
                company: "East".into(),
                line: "Loop".into(),
                station: "Central".into(),
            }
        } else {
            StationInfo::not_found()
        }
    }
}

const GATE_EXIT: [u8; BLOCK_LEN] = [
    0x16, 0x01, 0x00, 0x00, 0x30, 0x6F, 0x25, 0x0A, 0x25, 0x0B, 0xE8, 0x03, 0x00, 0x00, 0x00,
    0x00,
];

#[test]
fn decode_gate_exit() {
    let entry = block::decode(GATE_EXIT, &OneStation);

    assert_eq!(entry.terminal_code, 0x16);
    assert_eq!(entry.terminal, Some(TerminalKind::Gate));
    assert_eq!(entry.transaction_code, 0x01);
    assert_eq!(entry.transaction, Some(TransactionKind::FarePayment));
    assert_eq!(
        entry.date,
        HistoryDate {
            year: 2024,
            month: 3,
            day: 15
        }
    );
    assert_eq!(entry.in_ref, StationRef::new(0x25, 0x0A));
    assert_eq!(entry.in_station.station, "Central");
    assert_eq!(entry.out_ref, StationRef::new(0x25, 0x0B));
    assert!(entry.out_station.is_not_found());
    assert_eq!(entry.balance, 1000);
}

#[test]
fn decode_balance_little_endian() {
    let mut r = [0; BLOCK_LEN];
    r[10] = 0x34;
    r[11] = 0x12;
    // Same bytes in the date position are read big-endian.
    r[4] = 0x34;
    r[5] = 0x12;

    let entry = block::decode(r, &OneStation);

    assert_eq!(entry.balance, 0x1234);
    assert_eq!(entry.date, date::decode(0x3412));
}

#[test]
fn decode_ignores_uninterpreted_bytes() {
    let mut r = GATE_EXIT;
    for i in [2, 3, 12, 13, 14, 15] {
        r[i] = 0xFF;
    }

    assert_eq!(
        block::decode(r, &OneStation),
        block::decode(GATE_EXIT, &OneStation)
    );
}

#[test]
fn decode_blank_block() {
    let entry = block::decode([0; BLOCK_LEN], &OneStation);

    assert_eq!(entry.terminal, None);
    assert_eq!(entry.transaction, None);
    assert_eq!(
        entry.date,
        HistoryDate {
            year: EPOCH_YEAR,
            month: 0,
            day: 0
        }
    );
    assert_eq!(entry.in_station, StationInfo::not_found());
    assert_eq!(entry.out_station, StationInfo::not_found());
    assert_eq!(entry.balance, 0);
}

#[test]
fn decode_any_codes() {
    for code in 0..=u8::MAX {
        let mut r = GATE_EXIT;
        r[0] = code;
        r[1] = code;

        let entry = block::decode(r, &OneStation);

        assert_eq!(entry.terminal, TerminalKind::from_code(code));
        assert_eq!(entry.transaction, TransactionKind::from_code(code));
        assert_eq!(entry.terminal_code, code);
        assert_eq!(entry.transaction_code, code);
    }
}

#[test]
fn decode_slice_length() {
    assert!(block::decode_slice(&GATE_EXIT, &OneStation).is_ok());

    for len in [0, 1, BLOCK_LEN - 1, BLOCK_LEN + 1, 2 * BLOCK_LEN] {
        let r = vec![0; len];
        assert_eq!(
            block::decode_slice(&r, &OneStation),
            Err(FormatError::Length { found: len })
        );
    }
}

#[test]
fn terminal_codes() {
    assert_eq!(TerminalKind::from_code(0x16), Some(TerminalKind::Gate));
    assert_eq!(TerminalKind::Gate.label_ja(), "改札機");
    assert_eq!(TerminalKind::from_code(0x99), None);

    let known = [
        (0x03, TerminalKind::FareAdjustmentMachine),
        (0x04, TerminalKind::MobileTerminal),
        (0x05, TerminalKind::OnboardTerminal),
        (0x12, TerminalKind::TicketVendingMachine),
        (0x16, TerminalKind::Gate),
        (0x1C, TerminalKind::TransferAdjustmentMachine),
        (0xC8, TerminalKind::VendingMachine),
    ];

    for code in 0..=u8::MAX {
        let expected = known.iter().find(|(c, _)| *c == code).map(|(_, k)| *k);
        assert_eq!(TerminalKind::from_code(code), expected);
    }

    for (code, kind) in known {
        assert_eq!(kind.code(), code);
    }
}

#[test]
fn transaction_codes() {
    assert_eq!(
        TransactionKind::from_code(0x01),
        Some(TransactionKind::FarePayment)
    );
    assert_eq!(TransactionKind::from_code(0x02), Some(TransactionKind::Charge));
    assert_eq!(TransactionKind::from_code(0x0F), Some(TransactionKind::Bus));
    assert_eq!(
        TransactionKind::from_code(0x46),
        Some(TransactionKind::Purchase)
    );
    assert_eq!(TransactionKind::Charge.label_ja(), "チャージ");

    let recognised = (0..=u8::MAX)
        .filter(|c| TransactionKind::from_code(*c).is_some())
        .count();
    assert_eq!(recognised, 4);
}

#[test]
fn date_round_trip() {
    for year_offset in 0..=0x7F {
        for month in 0..=0x0F {
            for day in 0..=0x1F {
                let decoded = date::decode(date::encode(year_offset, month, day));

                assert_eq!(
                    decoded,
                    HistoryDate {
                        year: EPOCH_YEAR + u16::from(year_offset),
                        month,
                        day
                    }
                );
                assert_eq!(decoded.year_offset(), year_offset);
            }
        }
    }
}

#[test]
fn date_covers_every_bit() {
    for r in 0..=u16::MAX {
        let d = date::decode(r);
        assert_eq!(date::encode(d.year_offset(), d.month, d.day), r);
    }
}

#[test]
fn date_fields() {
    // 2024-03-15
    let d = date::decode(0x306F);
    assert_eq!((d.year, d.month, d.day), (2024, 3, 15));
    assert_eq!(d.to_string(), "2024-03-15");

    // Out of range months and days pass through.
    let d = date::decode(date::encode(1, 13, 0));
    assert_eq!((d.year, d.month, d.day), (2001, 13, 0));

    assert_eq!(date::decode(u16::MAX).year, 2127);
}

#[test]
fn date_encode_truncates() {
    assert_eq!(date::encode(0xFF, 0xFF, 0xFF), u16::MAX);
    assert_eq!(date::encode(0x80, 0x10, 0x20), 0);
}

#[test]
fn year_offset_clamps() {
    let new_year = |year| HistoryDate {
        year,
        month: 1,
        day: 1,
    };

    assert_eq!(new_year(2127).year_offset(), 0x7F);
    assert_eq!(new_year(2255).year_offset(), 255);
    assert_eq!(new_year(2256).year_offset(), u8::MAX);
    assert_eq!(new_year(3000).year_offset(), u8::MAX);
    assert_eq!(new_year(1999).year_offset(), 0);
}
