use crate::model::{COLUMN_LABELS, MarketTable, StorageError};
use chrono::NaiveDateTime;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "Crypto_Data_";
pub const FILE_EXTENSION: &str = "xlsx";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `Crypto_Data_<YYYY-MM-DD_HH-MM-SS>.xlsx`
pub fn snapshot_file_name(timestamp: &NaiveDateTime) -> String {
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        timestamp.format(TIMESTAMP_FORMAT),
        FILE_EXTENSION
    )
}

/// Writes one spreadsheet per cycle into `dir`. Existing files are never touched.
pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write(
        &self,
        table: &MarketTable,
        timestamp: &NaiveDateTime,
    ) -> Result<PathBuf, StorageError> {
        let path = self.dir.join(snapshot_file_name(timestamp));

        let mut workbook = Workbook::new();
        fill_sheet(workbook.add_worksheet(), table)?;

        fs::create_dir_all(&self.dir)?;
        // create_new fails if the file appeared since the last cycle
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StorageError::AlreadyExists(path));
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = workbook.save_to_writer(file) {
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }
        Ok(path)
    }
}

/// Bold header row, then one row per record. Unknown numbers stay blank.
fn fill_sheet(sheet: &mut Worksheet, table: &MarketTable) -> Result<(), XlsxError> {
    let header = Format::new().set_bold();
    for (col, label) in COLUMN_LABELS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *label, &header)?;
    }

    for (i, record) in table.records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, &record.name)?;
        sheet.write_string(row, 1, &record.symbol)?;
        let numbers = [
            record.current_price,
            record.market_cap,
            record.total_volume,
            record.price_change_percentage_24h,
        ];
        for (offset, value) in numbers.into_iter().enumerate() {
            if let Some(value) = value {
                sheet.write_number(row, 2 + offset as u16, value)?;
            }
        }
    }
    Ok(())
}
