use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ProctabError, Result};

const DEFAULT_PROC_ROOT: &str = "/proc";

/// `errno` reported when reading a source of a process that already exited.
const ESRCH: i32 = 3;

/// Per-process raw byte streams the collector reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProcSource {
    Cmdline,
    Stat,
    Environ,
}

impl ProcSource {
    pub fn file_name(self) -> &'static str {
        match self {
            ProcSource::Cmdline => "cmdline",
            ProcSource::Stat => "stat",
            ProcSource::Environ => "environ",
        }
    }
}

/// Platform adapter exposing the process table as raw byte sources.
pub trait ProcFs {
    /// Every process identifier currently listed.
    fn pids(&self) -> Result<Vec<u32>>;

    /// Reads one source in full. The handle must not outlive the call.
    fn read(&self, pid: u32, source: ProcSource) -> io::Result<Vec<u8>>;

    /// Location reported in errors for `source` of `pid`.
    fn location(&self, pid: u32, source: ProcSource) -> PathBuf {
        PathBuf::from(format!("{pid}/{}", source.file_name()))
    }
}

/// Permission denial and process exit are expected while sampling.
pub fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound
    ) || err.raw_os_error() == Some(ESRCH)
}

/// `/proc`-style directory tree: one numeric directory per process.
#[derive(Clone, Debug)]
pub struct ProcRoot {
    root: PathBuf,
}

impl ProcRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProcRoot {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs for ProcRoot {
    fn pids(&self) -> Result<Vec<u32>> {
        let entries = fs::read_dir(&self.root).map_err(|err| ProctabError::io(&self.root, err))?;
        let mut pids = entries
            .flatten()
            .filter_map(|entry| entry.file_name().to_str().and_then(parse_pid))
            .collect::<Vec<_>>();
        pids.sort_unstable();
        Ok(pids)
    }

    fn read(&self, pid: u32, source: ProcSource) -> io::Result<Vec<u8>> {
        fs::read(self.location(pid, source))
    }

    fn location(&self, pid: u32, source: ProcSource) -> PathBuf {
        self.root.join(pid.to_string()).join(source.file_name())
    }
}

/// Only purely numeric, non-zero names are process directories.
fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse::<u32>().ok().filter(|pid| *pid > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_accepts_only_digits() {
        assert_eq!(parse_pid("1234"), Some(1234));
        assert_eq!(parse_pid("self"), None);
        assert_eq!(parse_pid("12a"), None);
        assert_eq!(parse_pid("+12"), None);
        assert_eq!(parse_pid(""), None);
        assert_eq!(parse_pid("0"), None);
    }

    #[test]
    fn transient_errors() {
        assert!(is_transient(&io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(is_transient(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(is_transient(&io::Error::from_raw_os_error(ESRCH)));
        assert!(!is_transient(&io::Error::other("disk on fire")));
    }

    #[test]
    fn proc_root_locations() {
        let root = ProcRoot::new("/tmp/fakeproc");
        assert_eq!(
            root.location(42, ProcSource::Environ),
            PathBuf::from("/tmp/fakeproc/42/environ")
        );
        assert_eq!(ProcRoot::default().root(), Path::new("/proc"));
    }
}
