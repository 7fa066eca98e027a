use crate::domain::model::{ScanEvent, ScanRecord, ScanSummary};
use crate::domain::ports::{ConfigProvider, ScanSink, SkipPolicy};
use crate::utils::error::Result;
use chrono::Local;
use std::future::Future;

pub struct ScanSimulator<S: ScanSink, K: SkipPolicy, C: ConfigProvider> {
    sink: S,
    policy: K,
    config: C,
}

impl<S: ScanSink, K: SkipPolicy, C: ConfigProvider> ScanSimulator<S, K, C> {
    pub fn new(sink: S, policy: K, config: C) -> Self {
        Self {
            sink,
            policy,
            config,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs the whole range, stopping early once `shutdown` resolves.
    ///
    /// `shutdown` is checked before every sheet and raced against each delay.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<ScanSummary>
    where
        F: Future<Output = ()>,
    {
        self.run_with(shutdown, |_| {}).await
    }

    /// Same as [`run`](Self::run), reporting every sheet to `on_event` as it happens.
    pub async fn run_with<F, O>(&mut self, shutdown: F, mut on_event: O) -> Result<ScanSummary>
    where
        F: Future<Output = ()>,
        O: FnMut(&ScanEvent),
    {
        tokio::pin!(shutdown);

        let total = self.config.total_sheets();
        let delay = self.config.delay();
        let mut summary = ScanSummary::new(total);

        tracing::debug!(
            start = self.config.start_sheet(),
            end = self.config.end_sheet(),
            ?delay,
            "Starting scan run"
        );

        for sheet in self.config.start_sheet()..=self.config.end_sheet() {
            // 每張之前讓出一次執行權，連續跳過時也能收到中斷訊號
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!(sheet, "Scan run interrupted");
                    summary.interrupted = true;
                    break;
                }
                () = tokio::task::yield_now() => {}
            }

            if self.policy.should_skip(sheet) {
                summary.skipped_sheets.push(sheet);
                tracing::debug!(sheet, "Sheet skipped");
                on_event(&ScanEvent::Skipped { sheet });
                continue;
            }

            let record = ScanRecord::new(sheet, Local::now(), self.config.scanner_id());
            self.sink.append(&record).await?;
            summary.scanned_count += 1;

            tracing::debug!(sheet, timestamp = %record.timestamp, "Sheet scanned");
            on_event(&ScanEvent::Scanned {
                sheet,
                position: summary.scanned_count,
                total,
            });

            // 掃描間隔；等待期間收到中斷訊號就提前結束
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!(sheet, "Scan run interrupted");
                    summary.interrupted = true;
                    break;
                }
                () = tokio::time::sleep(delay) => {}
            }
        }

        tracing::info!(
            scanned = summary.scanned_count,
            skipped = summary.skipped_count(),
            interrupted = summary.interrupted,
            "Scan run finished"
        );

        Ok(summary)
    }
}
