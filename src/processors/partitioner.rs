use crate::error::Result;
use crate::utils::constants::MAX_ROWS_PER_REQUEST;
use crate::utils::filename::partition_path;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Splits an oversized coordinate file into sequential chunk files.
///
/// Assumes the source already passed [`CsvValidator`](crate::processors::CsvValidator);
/// no re-validation happens here. Partitions are temporary artifacts owned
/// by the caller, who deletes them once consumed.
pub struct Partitioner {
    max_rows: usize,
}

impl Partitioner {
    pub fn new() -> Self {
        Self {
            max_rows: MAX_ROWS_PER_REQUEST,
        }
    }

    pub fn with_max_rows(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Split `source` into files of at most `max_rows` rows, named
    /// `{source}_{n}.csv` with n starting at 1.
    ///
    /// Row order is preserved exactly; every partition except possibly the
    /// last holds exactly `max_rows` rows. The source file is not modified.
    /// On write failure the error propagates with no cleanup of partitions
    /// already written.
    pub fn partition(&self, source: &Path) -> Result<Vec<PathBuf>> {
        let file = File::open(source)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut buffer: Vec<StringRecord> = Vec::with_capacity(self.max_rows);
        let mut paths = Vec::new();

        for record in reader.records() {
            buffer.push(record?);
            if buffer.len() == self.max_rows {
                self.flush(source, paths.len() + 1, &buffer, &mut paths)?;
                buffer.clear();
            }
        }

        if !buffer.is_empty() {
            self.flush(source, paths.len() + 1, &buffer, &mut paths)?;
        }

        info!(
            source = %source.display(),
            partitions = paths.len(),
            "partitioned coordinate file"
        );
        Ok(paths)
    }

    fn flush(
        &self,
        source: &Path,
        index: usize,
        rows: &[StringRecord],
        paths: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let dest = partition_path(source, index);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&dest)?;

        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!(partition = %dest.display(), rows = rows.len(), "wrote partition");
        paths.push(dest);
        Ok(())
    }
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new()
    }
}
