use std::fs;
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::types::{JobPosting, Result};

/// UTF-8 byte-order mark. Excel wants it in front of the CSV.
const BOM: &[u8] = b"\xef\xbb\xbf";

const HEADER: [&str; 6] = ["keyword", "title", "company", "location", "url", "published"];

/// Reads the persisted history.
///
/// A missing file is an empty history, not an error. Decode failures are
/// returned for the caller to downgrade to "start from empty".
pub fn read_history(path: impl AsRef<Path>) -> Result<Vec<JobPosting>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = fs::read(path)?;
    let raw = raw.strip_prefix(BOM).unwrap_or(&raw);

    let mut reader = csv::Reader::from_reader(raw);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: JobPosting = row?;
        records.push(record);
    }

    debug!("read {} history rows from {}", records.len(), path.display());
    Ok(records)
}

/// Writes the full history as a BOM-prefixed CSV plus a mirrored xlsx
/// export with identical header and rows.
pub fn write_history(
    csv_path: impl AsRef<Path>,
    xlsx_path: impl AsRef<Path>,
    records: &[JobPosting],
) -> Result<()> {
    write_csv(csv_path.as_ref(), records)?;
    write_xlsx(xlsx_path.as_ref(), records)?;
    Ok(())
}

fn write_csv(path: &Path, records: &[JobPosting]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

fn write_xlsx(path: &Path, records: &[JobPosting]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in HEADER.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, record.keyword.as_str())?;
        sheet.write_string(row, 1, record.title.as_str())?;
        sheet.write_string(row, 2, record.company.as_str())?;
        sheet.write_string(row, 3, record.location.as_str())?;
        sheet.write_string(row, 4, record.url.as_str())?;
        sheet.write_string(row, 5, record.published.as_str())?;
    }

    workbook.save(path)?;
    Ok(())
}
