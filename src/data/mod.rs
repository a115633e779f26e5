pub mod proc;
mod sorting;

pub use proc::{Collector, ProcFs, ProcRoot, ProcSource, ProcessRecord, Snapshot};
pub use sorting::{SortDir, SortKey, sort_records};
