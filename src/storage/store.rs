//! CSV-backed record store: load, append-and-persist, snapshot

use anyhow::Context;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use crate::{
    config::Config,
    errors::{JournalError, JournalResult},
    storage::Table,
    types::{COLUMNS, Snapshot, TradeRecord},
    validation::validate_record,
};

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.journal_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole journal. A missing file is an empty journal.
    pub fn load(&self) -> JournalResult<Table> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No trade journal yet, starting empty");
                return Ok(Table::new());
            }
            Err(e) => {
                return Err(JournalError::StorageRead {
                    path: self.path.clone(),
                    source: e.into(),
                });
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers().map_err(|e| self.read_error(e))?;
        if !headers.iter().eq(COLUMNS) {
            return Err(JournalError::corrupt(
                &self.path,
                format!(
                    "expected header '{}', found '{}'",
                    COLUMNS.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            ));
        }

        let records = reader
            .deserialize::<TradeRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.read_error(e))?;

        info!(path = %self.path.display(), trades = records.len(), "Loaded trade journal");

        Ok(Table::from_records(records))
    }

    /// Validates `record`, stores it with its instrument uppercased and
    /// rewrites the journal. On error nothing is committed and `table`
    /// still reflects what is on disk.
    pub fn append(&self, table: &Table, record: TradeRecord) -> JournalResult<Table> {
        validate_record(&record)?;

        let stored = record.normalized();
        let next = table.with_appended(stored);
        self.persist(&next)?;

        if let Some(last) = next.records().last() {
            info!(
                instrument = %last.instrument,
                action = %last.action,
                qty = last.qty,
                price = %last.price,
                total = next.len(),
                "Saved trade"
            );
        }

        Ok(next)
    }

    pub fn snapshot(&self, table: &Table) -> Snapshot {
        table.snapshot()
    }

    // Writes to a temp file beside the journal and renames it into place,
    // so readers see either the old table or the new one.
    fn persist(&self, table: &Table) -> JournalResult<()> {
        self.write_atomically(table)
            .map_err(|source| JournalError::StorageWrite {
                path: self.path.clone(),
                source,
            })
    }

    fn write_atomically(&self, table: &Table) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temporary file in {}", dir.display()))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut tmp);
            writer.write_record(COLUMNS)?;
            for record in table.records() {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;

        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        debug!(path = %self.path.display(), rows = table.len(), "Persisted trade journal");
        Ok(())
    }

    fn read_error(&self, e: csv::Error) -> JournalError {
        if e.is_io_error() {
            JournalError::StorageRead {
                path: self.path.clone(),
                source: e.into(),
            }
        } else {
            JournalError::corrupt(&self.path, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Action, OptionType, Segment};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    const HEADER: &str = "Date,Segment,Instrument,Type,Expiry,Strike,Action,Qty,Price,Notes\n";

    fn store_in(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("trade_journal.csv"))
    }

    fn banknifty_put() -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            segment: Segment::NiftyOptions,
            instrument: "banknifty".to_string(),
            option_type: OptionType::Put,
            expiry: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            strike: dec!(47500),
            action: Action::Sell,
            qty: 15,
            price: dec!(88.05),
            notes: "gap fill, \"quick\" scalp".to_string(),
        }
    }

    #[test]
    fn load_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let table = store_in(&dir).load().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &COLUMNS);
    }

    #[test]
    fn header_only_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), HEADER).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_writes_header_and_row() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(&Table::new(), banknifty_put()).unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some(HEADER.trim_end()));
        assert_eq!(
            lines.next(),
            Some("2024-04-02,NIFTY OPT,BANKNIFTY,PE,2024-04-03,47500,SELL,15,88.05,\"gap fill, \"\"quick\"\" scalp\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn reads_rows_written_by_other_tools() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            format!("{}2024-01-10,NIFTY FUT,NIFTY,FUT,2024-01-25,0,BUY,50,21650.0,\n", HEADER),
        )
        .unwrap();

        let table = store.load().unwrap();
        let record = &table.records()[0];
        assert_eq!(record.segment, Segment::NiftyFutures);
        assert_eq!(record.strike_if_applicable(), None);
        assert_eq!(record.price, dec!(21650));
        assert_eq!(record.notes, "");
    }

    #[test]
    fn wrong_header_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "Date,Instrument,Qty\n2024-01-10,NIFTY,50\n").unwrap();
        assert!(matches!(store.load(), Err(JournalError::StorageCorrupt { .. })));
    }

    #[test]
    fn empty_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "").unwrap();
        assert!(matches!(store.load(), Err(JournalError::StorageCorrupt { .. })));
    }

    #[test]
    fn bad_row_values_are_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let rows = [
            "2024-01-10,CRYPTO,BTC,FUT,2024-01-25,0,BUY,1,100,",
            "2024-01-10,NIFTY OPT,NIFTY,CE,2024-01-25,21000,BUY,fifty,120.5,",
            "10/01/2024,NIFTY OPT,NIFTY,CE,2024-01-25,21000,BUY,50,120.5,",
            "2024-01-10,NIFTY OPT,NIFTY,CE,2024-01-25,21000,BUY,50",
        ];
        for row in rows {
            fs::write(store.path(), format!("{}{}\n", HEADER, row)).unwrap();
            assert!(
                matches!(store.load(), Err(JournalError::StorageCorrupt { .. })),
                "row should be rejected: {}",
                row
            );
        }
    }

    #[test]
    fn rejected_record_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let table = store.append(&Table::new(), banknifty_put()).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let mut bad = banknifty_put();
        bad.qty = 0;
        assert!(matches!(store.append(&table, bad), Err(JournalError::Validation { field: "qty", .. })));

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
        assert_eq!(store.load().unwrap(), table);
    }

    #[test]
    fn failed_write_is_reported_and_not_committed() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("journal_dir");
        fs::create_dir(&target).unwrap();
        let store = RecordStore::new(&target);

        let table = Table::new();
        let result = store.append(&table, banknifty_put());

        assert!(matches!(result, Err(JournalError::StorageWrite { .. })));
        assert!(table.is_empty());
        assert!(target.is_dir());
        // Only the directory itself; the temp file was cleaned up.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("journals").join("2024.csv"));
        store.append(&Table::new(), banknifty_put()).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
