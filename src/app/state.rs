use tracing::{debug, warn};

use super::config::{Config, TableColumn};
use super::status::{StatusLevel, StatusMessage};
use crate::data::{Collector, ProcRoot, ProcessRecord, SortDir, SortKey, sort_records};
use crate::error::Result;
use crate::grid::{CellValue, ColumnSpec, render, render_header};
use crate::utils::text_width;

pub struct App {
    collector: Collector<ProcRoot>,
    columns: Vec<TableColumn>,
    specs: Vec<ColumnSpec>,
    pub separator: String,
    pub show_kernel_threads: bool,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub records: Vec<ProcessRecord>,
    pub header: String,
    pub lines: Vec<String>,
    /// Set when the latest collection pass failed; cleared by the next success.
    pub last_error: Option<String>,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let specs = config.column_specs();
        let header = render_header(&specs)?.join(&config.separator);
        Ok(Self {
            collector: Collector::new(ProcRoot::new(config.proc_root)),
            columns: config.columns,
            specs,
            separator: config.separator,
            show_kernel_threads: config.show_kernel_threads,
            sort_key: config.sort_key,
            sort_dir: config.sort_dir,
            records: Vec::new(),
            header,
            lines: Vec::new(),
            last_error: None,
            status: None,
        })
    }

    /// Takes a new snapshot and re-renders it.
    ///
    /// A failed collection keeps the previous grid and is retried on the
    /// next call. Render errors are returned.
    pub fn refresh(&mut self) -> Result<()> {
        match self.collector.collect() {
            Ok(snapshot) => {
                let show_kernel_threads = self.show_kernel_threads;
                self.records = snapshot
                    .into_values()
                    .filter(|record| show_kernel_threads || !record.is_kernel_thread())
                    .collect();
                self.last_error = None;
                if self.status_level() == Some(StatusLevel::CollectionFailed) {
                    self.status = None;
                }
                self.rebuild()
            }
            Err(err) => {
                warn!(error = %err, "collection pass failed");
                self.status = Some(StatusMessage::collection_failed(format!(
                    "collection failed: {err}"
                )));
                self.last_error = Some(err.to_string());
                Ok(())
            }
        }
    }

    pub fn tick(&mut self) {
        self.clear_expired_status();
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> Result<()> {
        self.sort_key = key;
        self.sort_dir = key.default_dir();
        self.notify(format!("sort: {}", key.label()));
        self.rebuild()
    }

    pub fn toggle_sort_dir(&mut self) -> Result<()> {
        self.sort_dir = self.sort_dir.toggle();
        self.notify(format!("order: {}", self.sort_dir.label()));
        self.rebuild()
    }

    /// `=` rule as wide as the joined header.
    pub fn rule(&self) -> String {
        "=".repeat(text_width(&self.header))
    }

    /// Short-lived footer notice; never hides a pending collection failure.
    pub fn notify(&mut self, text: String) {
        if self.status_level() != Some(StatusLevel::CollectionFailed) {
            self.status = Some(StatusMessage::notice(text));
        }
    }

    pub fn status_level(&self) -> Option<StatusLevel> {
        self.status.as_ref().map(|status| status.level)
    }

    fn clear_expired_status(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status = None;
        }
    }

    fn rebuild(&mut self) -> Result<()> {
        sort_records(&mut self.records, self.sort_key, self.sort_dir);
        let rows = self
            .records
            .iter()
            .map(|record| {
                self.columns
                    .iter()
                    .map(|column| column.field.cell(record))
                    .collect::<Vec<CellValue>>()
            })
            .collect::<Vec<_>>();
        let grid = render(&self.specs, &rows)?;
        self.lines = grid.to_lines(&self.separator);
        debug!(
            records = self.records.len(),
            lines = self.lines.len(),
            "grid rebuilt"
        );
        Ok(())
    }
}
