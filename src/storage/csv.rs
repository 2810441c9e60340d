use std::fs::{File, OpenOptions};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::Result;
use crate::models::PlaceRecord;

/// Append-only CSV sink. No header row; rows are added after whatever the
/// file already holds, and every row is flushed as soon as it is written.
pub struct CsvSink {
    writer: Writer<File>,
    count: usize,
}

impl CsvSink {
    /// Opens `path` for appending, creating the file if it does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = WriterBuilder::new().has_headers(false).from_writer(file);

        Ok(Self { writer, count: 0 })
    }

    /// Serializes one record and flushes it to disk.
    pub fn write(&mut self, record: &PlaceRecord) -> Result<()> {
        self.writer.write_record(record.fields())?;
        self.writer.flush()?;
        self.count += 1;
        Ok(())
    }

    /// Number of rows written through this sink.
    pub fn count(&self) -> usize {
        self.count
    }
}
