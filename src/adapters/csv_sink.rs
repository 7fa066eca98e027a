use crate::domain::model::{ScanRecord, CSV_HEADER};
use crate::domain::ports::ScanSink;
use crate::utils::error::Result;
use async_trait::async_trait;
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Append-only CSV scan log. Each row is flushed as soon as it is written.
#[derive(Debug)]
pub struct CsvFileSink {
    path: PathBuf,
    writer: Writer<File>,
    created: bool,
}

impl CsvFileSink {
    /// 開啟（或建立）CSV 檔案；新檔案會先寫入標頭
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let created = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        // 與既有掃描紀錄一致，列尾使用 \r\n
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        if created {
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
            tracing::debug!("Created {} with header row", path.display());
        } else {
            tracing::debug!("Appending to existing file {}", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            created,
        })
    }

    /// Whether `open` had to create the file.
    pub fn created(&self) -> bool {
        self.created
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScanSink for CsvFileSink {
    async fn append(&mut self, record: &ScanRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }
}
