//! Print the transaction history held in a card's block dump.
//!
//! # Usage
//!
//! ```bash
//! felica-history [--hex] [--ja] [--stations StationCode.csv] [dump.bin | -]
//! ```
//!
//! Without a dump path, or with `-`, blocks are read from standard input.
//!
//! # Environment Variables
//!
//! - `FELICA_STATIONS`: station table used when `--stations` is not given
//!   (default `StationCode.csv`).
//! - `RUST_LOG`: set to `debug` or `warn` to control logging verbosity.

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use either::Either::{Left, Right};
use felica_history::{
    block::code::{TerminalKind, TransactionKind},
    history::{self, Transaction},
    station::{
        StationInfo,
        table::{self, StationTable},
    },
    transport::dump::{BlockDump, DumpFormat},
};
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Stations(#[from] table::Error),
    #[error(transparent)]
    History(#[from] history::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "felica-history",
    version,
    about = "Print the transaction history of a transit card block dump"
)]
struct Cli {
    /// Read the dump as hex text, one block per line.
    #[arg(long)]
    hex: bool,

    /// Print terminal and transaction labels in Japanese.
    #[arg(long)]
    ja: bool,

    /// Station table, comma-delimited without a header row.
    #[arg(
        long,
        value_name = "PATH",
        env = "FELICA_STATIONS",
        default_value = "StationCode.csv"
    )]
    stations: PathBuf,

    /// Block dump, most recent block first (`-` for standard input).
    #[arg(value_name = "DUMP")]
    dump: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stations = match StationTable::from_path(&cli.stations) {
        Ok(stations) => stations,
        Err(table::Error::Io(err)) => {
            warn!(
                "Station table {} unavailable ({err}); station names will not be resolved",
                cli.stations.display()
            );
            StationTable::default()
        }
        Err(err) => Err(err)?,
    };

    let input = match cli.dump.as_deref().filter(|p| *p != Path::new("-")) {
        Some(path) => Left(BufReader::new(File::open(path)?)),
        None => Right(io::stdin().lock()),
    };

    let format = if cli.hex {
        DumpFormat::Hex
    } else {
        DumpFormat::Binary
    };

    let mut dump = BlockDump::new(input, format);
    let log = history::read_history(&mut dump, &stations)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for t in &log {
        print_transaction(&mut out, t, cli.ja)?;
    }

    Ok(())
}

fn print_transaction(out: &mut impl Write, t: &Transaction, ja: bool) -> io::Result<()> {
    fn station(s: &StationInfo) -> String {
        format!("{}-{}", s.company, s.line)
    }

    let (terminal, transaction) = if ja {
        (
            t.terminal.map(TerminalKind::label_ja),
            t.transaction.map(TransactionKind::label_ja),
        )
    } else {
        (t.terminal_label(), t.transaction_label())
    };

    writeln!(out)?;
    writeln!(out, "Payment: {} yen", t.payment)?;
    writeln!(out, "Terminal: {}", label(terminal, t.terminal_code))?;
    writeln!(
        out,
        "Transaction: {}",
        label(transaction, t.transaction_code)
    )?;
    writeln!(out, "Date: {}", t.date)?;
    writeln!(out, "Entry line: {}", station(&t.in_station))?;
    writeln!(out, "Entry station: {}", t.in_station.station)?;
    writeln!(out, "Exit line: {}", station(&t.out_station))?;
    writeln!(out, "Exit station: {}", t.out_station.station)?;
    writeln!(out, "Balance: {}", t.balance)?;

    Ok(())
}

fn label(label: Option<&str>, code: u8) -> String {
    match label {
        Some(label) => label.to_string(),
        None => format!("unknown (0x{code:02X})"),
    }
}
