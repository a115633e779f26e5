use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::field::Field;
use crate::data::{SortDir, SortKey};
use crate::error::{ProctabError, Result};
use crate::grid::{Alignment, ColumnSpec, validate_columns};

const MIN_TICK_MS: u64 = 100;
const DEFAULT_TICK_MS: u64 = 2000;
const DEFAULT_SEPARATOR: &str = " | ";

/// A rendered column and the record attribute feeding it.
#[derive(Clone, Debug, PartialEq)]
pub struct TableColumn {
    pub field: Field,
    pub spec: ColumnSpec,
}

impl TableColumn {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            spec: field.default_column(),
        }
    }
}

/// Runtime configuration
pub struct Config {
    pub tick_rate: Duration,
    pub proc_root: PathBuf,
    pub separator: String,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub show_kernel_threads: bool,
    pub columns: Vec<TableColumn>,
    pub once: bool,
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    general: GeneralConfig,
    display: DisplayConfig,
    columns: Vec<ColumnConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeneralConfig {
    tick_rate_ms: u64,
    proc_root: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_MS,
            proc_root: PathBuf::from("/proc"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplayConfig {
    separator: String,
    sort: String,
    sort_dir: String,
    show_kernel_threads: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            sort: "pid".to_string(),
            sort_dir: String::new(),
            show_kernel_threads: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ColumnConfig {
    field: String,
    header: Option<String>,
    width: Option<i32>,
    align: Option<String>,
    decimals: Option<usize>,
}

impl ColumnConfig {
    fn into_column(self) -> Result<TableColumn> {
        let field = Field::parse(&self.field)
            .ok_or_else(|| ProctabError::config(format!("unknown column field: {}", self.field)))?;
        let alignment = match self.align.as_deref() {
            Some(value) => Alignment::parse(value)
                .ok_or_else(|| ProctabError::config(format!("unknown alignment: {value}")))?,
            None => field.default_column().alignment,
        };
        let spec = ColumnSpec {
            header: self.header.unwrap_or_else(|| field.header().to_string()),
            width: self.width.unwrap_or_else(|| field.default_width()),
            alignment,
            decimal_places: self.decimals,
        };
        Ok(TableColumn { field, spec })
    }
}

pub fn default_columns() -> Vec<TableColumn> {
    [
        Field::Pid,
        Field::State,
        Field::Name,
        Field::Argc,
        Field::EnvCount,
        Field::Command,
    ]
    .into_iter()
    .map(TableColumn::new)
    .collect()
}

impl Config {
    pub fn from_args() -> Result<Self> {
        let mut args = env::args().skip(1).collect::<Vec<_>>();
        let explicit = take_config_flag(&mut args)?;
        let file_config = match explicit {
            Some(path) => read_config_file(&path)?,
            None => match config_path().filter(|path| path.exists()) {
                Some(path) => read_config_file(&path)?,
                None => FileConfig::default(),
            },
        };
        Self::build(file_config, args)
    }

    fn build(file_config: FileConfig, args: impl IntoIterator<Item = String>) -> Result<Self> {
        // Start with file config values
        let mut tick_ms = file_config.general.tick_rate_ms;
        let mut proc_root = file_config.general.proc_root;
        let mut separator = file_config.display.separator;
        let mut show_kernel_threads = file_config.display.show_kernel_threads;
        let mut sort_key = SortKey::parse(&file_config.display.sort).ok_or_else(|| {
            ProctabError::config(format!("invalid sort key: {}", file_config.display.sort))
        })?;
        let mut sort_dir = if file_config.display.sort_dir.is_empty() {
            None
        } else {
            Some(SortDir::parse(&file_config.display.sort_dir).ok_or_else(|| {
                ProctabError::config(format!(
                    "invalid sort dir: {}",
                    file_config.display.sort_dir
                ))
            })?)
        };
        let columns = if file_config.columns.is_empty() {
            default_columns()
        } else {
            file_config
                .columns
                .into_iter()
                .map(ColumnConfig::into_column)
                .collect::<Result<Vec<_>>>()?
        };
        let mut once = false;

        // Override with CLI args
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Err(ProctabError::usage(usage())),
                "--tick-ms" => {
                    let value = flag_value(&mut args, "--tick-ms")?;
                    tick_ms = value.parse::<u64>().map_err(|_| {
                        ProctabError::usage(format!("Invalid tick value: {value}\n\n{}", usage()))
                    })?;
                }
                "--sort" => {
                    let value = flag_value(&mut args, "--sort")?;
                    sort_key = SortKey::parse(&value).ok_or_else(|| {
                        ProctabError::usage(format!("Invalid sort key: {value}\n\n{}", usage()))
                    })?;
                }
                "--sort-dir" => {
                    let value = flag_value(&mut args, "--sort-dir")?;
                    sort_dir = Some(SortDir::parse(&value).ok_or_else(|| {
                        ProctabError::usage(format!("Invalid sort dir: {value}\n\n{}", usage()))
                    })?);
                }
                "--separator" => separator = flag_value(&mut args, "--separator")?,
                "--proc-root" => proc_root = PathBuf::from(flag_value(&mut args, "--proc-root")?),
                "--hide-kernel" => show_kernel_threads = false,
                "--once" => once = true,
                _ => {
                    return Err(ProctabError::usage(format!(
                        "Unknown argument: {arg}\n\n{}",
                        usage()
                    )));
                }
            }
        }

        let specs = columns
            .iter()
            .map(|column| column.spec.clone())
            .collect::<Vec<_>>();
        validate_columns(&specs)?;

        Ok(Self {
            tick_rate: Duration::from_millis(normalize_tick_ms(tick_ms)),
            proc_root,
            separator,
            sort_key,
            sort_dir: sort_dir.unwrap_or_else(|| sort_key.default_dir()),
            show_kernel_threads,
            columns,
            once,
        })
    }

    pub fn column_specs(&self) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .map(|column| column.spec.clone())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        let general = GeneralConfig::default();
        Self {
            tick_rate: Duration::from_millis(general.tick_rate_ms),
            proc_root: general.proc_root,
            separator: DEFAULT_SEPARATOR.to_string(),
            sort_key: SortKey::Pid,
            sort_dir: SortKey::Pid.default_dir(),
            show_kernel_threads: true,
            columns: default_columns(),
            once: false,
        }
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| ProctabError::usage(format!("Missing value for {flag}\n\n{}", usage())))
}

/// Removes `--config <path>` from `args`; it must be known before the file is read.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(idx) = args.iter().position(|arg| arg == "--config") else {
        return Ok(None);
    };
    if idx + 1 >= args.len() {
        return Err(ProctabError::usage(format!(
            "Missing value for --config\n\n{}",
            usage()
        )));
    }
    let path = args.remove(idx + 1);
    args.remove(idx);
    Ok(Some(PathBuf::from(path)))
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("proctab").join("config.toml"))
}

fn read_config_file(path: &Path) -> Result<FileConfig> {
    debug!(path = %path.display(), "loading config file");
    let content = fs::read_to_string(path)
        .map_err(|err| ProctabError::config_invalid(path.to_path_buf(), err.to_string()))?;
    toml::from_str(&content)
        .map_err(|err| ProctabError::config_invalid(path.to_path_buf(), err.to_string()))
}

fn usage() -> String {
    let config_location = config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/proctab/config.toml".to_string());

    [
        "Usage: proctab [options]",
        "",
        "Options:",
        "  --tick-ms <ms>       Refresh interval in milliseconds (default: 2000, min: 100)",
        "  --sort <key>         pid | state | name | command | env",
        "  --sort-dir <dir>     asc | desc",
        "  --separator <text>   Column separator (default: \" | \")",
        "  --proc-root <path>   Process information root (default: /proc)",
        "  --hide-kernel        Hide processes without a command line",
        "  --once               Print one snapshot to stdout and exit",
        "  --config <path>      Read this config file instead of the default",
        "  -h, --help           Show this help",
        "",
        &format!("Config file: {config_location}"),
        "",
        "Example config.toml:",
        "  [general]",
        "  tick_rate_ms = 2000",
        "",
        "  [display]",
        "  separator = \" | \"",
        "  sort = \"pid\"",
        "  sort_dir = \"asc\"",
        "",
        "  [[columns]]",
        "  field = \"pid\"",
        "  width = 8",
        "  align = \"right\"",
    ]
    .join("\n")
}

fn normalize_tick_ms(value: u64) -> u64 {
    value.max(MIN_TICK_MS)
}
