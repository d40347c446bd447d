use crate::domain::ports::RecordSink;
use crate::domain::record::ResultRecord;
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Appends result records to a JSON Lines file, one document per line.
#[derive(Debug, Clone)]
pub struct LocalRecordStore {
    path: PathBuf,
}

impl LocalRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records for one patient, newest first.
    ///
    /// Lines that no longer decode are skipped with a warning so one bad entry
    /// does not hide every other patient's history.
    pub fn history(&self, patient_id: &str) -> Result<Vec<ResultRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let mut records = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: ResultRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(
                        line = index + 1,
                        path = %self.path.display(),
                        error = %e,
                        "⚠️ Skipping unreadable result record"
                    );
                    continue;
                }
            };
            if record.patient_id == patient_id {
                records.push(record);
            }
        }

        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }
}

impl RecordSink for LocalRecordStore {
    fn append(&mut self, record: &ResultRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(
            patient_id = %record.patient_id,
            kind = record.values.kind(),
            path = %self.path.display(),
            "result record appended"
        );
        Ok(())
    }
}
