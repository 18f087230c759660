//! In-memory station table loaded from CSV.
//!
//! _Requires Cargo feature `std`._

use std::{collections::HashMap, fs::File, io::Read, path::Path, string::String};

use csv::ReaderBuilder;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use super::{StationInfo, StationRef, StationResolver};

/// Errors occurring while loading a station table.
#[derive(Debug, Error)]
pub enum Error {
    /// An error opening the table file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error from the underlying reader while parsing the table.
    #[error("Failed to read station table: {0}.")]
    Csv(#[from] csv::Error),
}

/// One row of a station table.
///
/// Tables are headerless and comma-delimited, one station per row:
/// `area,line,station,company,line name,station name`.
#[derive(Debug, Clone, Deserialize)]
struct StationRow {
    area: u8,
    line: u8,
    station: u8,
    company: String,
    line_name: String,
    station_name: String,
}

/// A station table keyed by (line, station) code pairs.
#[derive(Debug, Clone, Default)]
pub struct StationTable {
    stations: HashMap<StationRef, StationInfo>,
}

impl StationTable {
    /// Load a table from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Load a table from a reader of CSV data.
    ///
    /// Rows that cannot be parsed are logged and skipped. When several rows
    /// share a code pair, the first one wins.
    pub fn from_reader(r: impl Read) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(r);

        let mut table = Self::default();

        for (i, row) in reader.deserialize::<StationRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) if err.is_io_error() => Err(err)?,
                Err(err) => {
                    warn!("Skipping station table row {}: {err}", i + 1);
                    continue;
                }
            };

            let r = StationRef::new(row.line, row.station);
            if table.stations.contains_key(&r) {
                debug!("Ignoring duplicate station table row {} for {r:?}", i + 1);
                continue;
            }

            table.insert(
                r,
                StationInfo {
                    area: row.area,
                    company: row.company,
                    line: row.line_name,
                    station: row.station_name,
                },
            );
        }

        debug!("Loaded {} stations", table.len());

        Ok(table)
    }

    /// Add a station, replacing any previous entry for the same code pair.
    pub fn insert(&mut self, r: StationRef, info: StationInfo) -> Option<StationInfo> {
        self.stations.insert(r, info)
    }

    pub fn get(&self, r: StationRef) -> Option<&StationInfo> {
        self.stations.get(&r)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl StationResolver for StationTable {
    fn resolve(&self, r: StationRef) -> StationInfo {
        self.get(r).cloned().unwrap_or_else(StationInfo::not_found)
    }
}

impl FromIterator<(StationRef, StationInfo)> for StationTable {
    fn from_iter<I: IntoIterator<Item = (StationRef, StationInfo)>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}
