//! Process snapshot collection.
//!
//! A [`Collector`] walks the process table of a [`ProcFs`] adapter once per
//! call and returns a [`Snapshot`] keyed by pid. Permission denial and
//! processes exiting mid-pass are absorbed; only a hard failure reading a
//! command line aborts the pass.

mod parse;
mod source;

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use tracing::{debug, trace};

use crate::error::{ProctabError, Result};

pub use parse::decode;
pub use source::{ProcFs, ProcRoot, ProcSource, is_transient};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    /// Command name from the stat line; empty if stat was unreadable.
    pub name: String,
    pub argv: Vec<String>,
    /// Single-letter state code; empty if stat was unreadable.
    pub status_code: String,
    pub environment: BTreeMap<String, String>,
}

impl ProcessRecord {
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    /// Kernel threads expose an empty command line.
    pub fn is_kernel_thread(&self) -> bool {
        self.argv.is_empty()
    }
}

/// One collection pass, keyed by pid.
pub type Snapshot = BTreeMap<u32, ProcessRecord>;

pub struct Collector<F = ProcRoot> {
    fs: F,
}

impl Collector<ProcRoot> {
    pub fn system() -> Self {
        Self::new(ProcRoot::default())
    }
}

impl<F: ProcFs> Collector<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// The adapter this collector reads from, for callers that need to
    /// inspect it between passes.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn collect(&self) -> Result<Snapshot> {
        let pids = self.fs.pids()?;
        let mut cache = SourceCache::new(&self.fs);
        let mut snapshot = Snapshot::new();

        for pid in pids {
            if let Some(record) = read_record(&mut cache, pid)? {
                snapshot.insert(pid, record);
            }
        }

        debug!(
            processes = snapshot.len(),
            sources_read = cache.len(),
            "collection pass complete"
        );
        Ok(snapshot)
    }
}

fn read_record<F: ProcFs>(cache: &mut SourceCache<'_, F>, pid: u32) -> Result<Option<ProcessRecord>> {
    let Some(argv) = cache.fields(pid, ProcSource::Cmdline)?.map(parse::argv) else {
        trace!(pid, "command line unavailable, skipping process");
        return Ok(None);
    };
    let status_code = cache
        .fields(pid, ProcSource::Stat)?
        .and_then(parse::state_code)
        .unwrap_or_default();
    let name = cache
        .fields(pid, ProcSource::Stat)?
        .and_then(parse::process_name)
        .unwrap_or_default();
    let environment = cache
        .fields(pid, ProcSource::Environ)?
        .map(parse::environment)
        .unwrap_or_default();

    Ok(Some(ProcessRecord {
        pid,
        name,
        argv,
        status_code,
        environment,
    }))
}

/// Decoded fields per (pid, source), alive for a single pass.
///
/// `None` marks a source that was read and found unavailable, so it is not
/// retried within the pass.
struct SourceCache<'a, F> {
    fs: &'a F,
    entries: HashMap<(u32, ProcSource), Option<Vec<String>>>,
}

impl<'a, F: ProcFs> SourceCache<'a, F> {
    fn new(fs: &'a F) -> Self {
        Self {
            fs,
            entries: HashMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn fields(&mut self, pid: u32, source: ProcSource) -> Result<Option<&[String]>> {
        let fs = self.fs;
        let fields = match self.entries.entry((pid, source)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(load(fs, pid, source)?),
        };
        Ok(fields.as_deref())
    }
}

fn load<F: ProcFs>(fs: &F, pid: u32, source: ProcSource) -> Result<Option<Vec<String>>> {
    match fs.read(pid, source) {
        Ok(bytes) => Ok(Some(parse::split_fields(source, &bytes))),
        Err(err) if is_transient(&err) || source != ProcSource::Cmdline => {
            trace!(pid, source = source.file_name(), error = %err, "source unavailable");
            Ok(None)
        }
        Err(err) => Err(ProctabError::io(fs.location(pid, source), err)),
    }
}
