use crate::analyzer::analyze;
use crate::config::AppConfig;
use crate::fetcher::MarketFetcher;
use crate::model::CycleError;
use crate::storage::SnapshotWriter;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tokio::time::{Duration, Instant, sleep_until};
use tracing::{error, info, warn};

#[derive(Debug, PartialEq)]
pub enum CycleOutcome {
    /// Fetch failed; nothing analyzed or written.
    Skipped,
    Written(PathBuf),
}

/// One fetch -> analyze -> write pass stamped with `started_at`.
pub async fn run_cycle(
    fetcher: &dyn MarketFetcher,
    config: &AppConfig,
    writer: &SnapshotWriter,
    started_at: NaiveDateTime,
) -> Result<CycleOutcome, CycleError> {
    info!("Fetching live cryptocurrency data...");
    let raw = match fetcher.fetch(&config.query).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error fetching data: {}", e);
            return Ok(CycleOutcome::Skipped);
        }
    };

    let table = analyze(&raw)?;
    let path = writer.write(&table, &started_at)?;
    info!(
        "New Excel file created: {} ({} rows, next update in {}s)",
        path.display(),
        table.len(),
        config.check_interval_seconds
    );
    Ok(CycleOutcome::Written(path))
}

/// Start time of the last cycle, carried explicitly by the loop.
pub struct Schedule {
    interval: Duration,
    last_start: Option<Instant>,
}

impl Schedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_start: None,
        }
    }

    /// `None` until the first cycle has started.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_start.map(|start| start + self.interval)
    }

    /// Sleeps until the next deadline (returns at once before the first cycle)
    /// and records the new cycle start.
    pub async fn wait_next(&mut self) -> Instant {
        if let Some(deadline) = self.next_deadline() {
            sleep_until(deadline).await;
        }
        let start = Instant::now();
        self.last_start = Some(start);
        start
    }
}

pub async fn run_forever(fetcher: &dyn MarketFetcher, config: &AppConfig) {
    let writer = SnapshotWriter::new(config.output_dir.clone());
    let mut schedule = Schedule::new(Duration::from_secs(config.check_interval_seconds));
    info!("Writing snapshots into {}", writer.dir().display());

    loop {
        schedule.wait_next().await;
        let started_at = Local::now().naive_local();

        match run_cycle(fetcher, config, &writer, started_at).await {
            Ok(CycleOutcome::Written(_)) => {}
            Ok(CycleOutcome::Skipped) => info!("Cycle skipped, no file written."),
            Err(e) => error!("Cycle failed: {}", e),
        }
    }
}
