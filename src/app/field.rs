use crate::data::ProcessRecord;
use crate::grid::{Alignment, CellValue, ColumnSpec};

/// Record attribute shown in a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Pid,
    State,
    Name,
    Command,
    Argc,
    EnvCount,
    Environment,
}

impl Field {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pid" => Some(Field::Pid),
            "state" | "stat" | "s" => Some(Field::State),
            "name" | "comm" => Some(Field::Name),
            "command" | "cmd" | "args" => Some(Field::Command),
            "argc" => Some(Field::Argc),
            "env_count" | "envc" => Some(Field::EnvCount),
            "environment" | "env" => Some(Field::Environment),
            _ => None,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            Field::Pid => "PID",
            Field::State => "S",
            Field::Name => "NAME",
            Field::Command => "COMMAND",
            Field::Argc => "ARGC",
            Field::EnvCount => "ENV",
            Field::Environment => "ENVIRONMENT",
        }
    }

    pub fn default_width(self) -> i32 {
        match self {
            Field::Pid => 8,
            Field::State => 3,
            Field::Name => -16,
            Field::Command => 60,
            Field::Argc => 4,
            Field::EnvCount => 5,
            Field::Environment => 60,
        }
    }

    fn default_alignment(self) -> Alignment {
        match self {
            Field::State => Alignment::Center,
            _ => Alignment::Default,
        }
    }

    pub fn default_column(self) -> ColumnSpec {
        ColumnSpec::new(self.header(), self.default_width()).align(self.default_alignment())
    }

    pub fn cell(self, record: &ProcessRecord) -> CellValue {
        match self {
            Field::Pid => record.pid.into(),
            Field::State => record.status_code.as_str().into(),
            Field::Name => record.name.as_str().into(),
            Field::Command => record.command_line().into(),
            Field::Argc => record.argv.len().into(),
            Field::EnvCount => record.environment.len().into(),
            Field::Environment => record
                .environment
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("\n")
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProcessRecord {
        ProcessRecord {
            pid: 42,
            name: "sleep".to_string(),
            argv: vec!["sleep".to_string(), "".to_string(), "10".to_string()],
            status_code: "S".to_string(),
            environment: [("A", "1"), ("B", "2")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn cells_follow_record() {
        let record = record();
        assert_eq!(Field::Pid.cell(&record), CellValue::Integer(42));
        assert_eq!(Field::Argc.cell(&record), CellValue::Integer(3));
        assert_eq!(Field::Command.cell(&record), CellValue::from("sleep  10"));
        assert_eq!(Field::Environment.cell(&record), CellValue::from("A=1\nB=2"));
    }

    #[test]
    fn parse_fields() {
        assert_eq!(Field::parse("CMD"), Some(Field::Command));
        assert_eq!(Field::parse("env_count"), Some(Field::EnvCount));
        assert_eq!(Field::parse("cpu"), None);
    }

    #[test]
    fn name_column_truncates_by_default() {
        assert!(Field::Name.default_column().truncates());
        assert!(!Field::Command.default_column().truncates());
    }
}
